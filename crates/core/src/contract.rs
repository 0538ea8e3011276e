// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contract lifecycle operations.
//!
//! The lifecycle status, payment sub-status, and approval sub-status move
//! independently; the one coupling rule is that paying a contract forces the
//! payment sub-status to PAID and stamps the payment date if unset. The
//! generic status update back-fills the signature and payment fields when a
//! caller jumps straight to SIGNED or PAID.

use std::str::FromStr;
use tracing::info;

use crate::clock::today;
use crate::codes::{CONTRACT_CODE_PREFIX, CodeGenerator};
use crate::error::{EngineError, translate_domain_error};
use crate::request_response::CreateContractRequest;
use crate::resolver::{resolve_internship, resolve_teacher};
use intern_track_domain::{
    ApprovalStatus, Contract, ContractStatus, PaymentStatus, format_date,
};
use intern_track_persistence::{ContractChangeset, NewContract, Persistence};

/// Creates a contract, standalone or bound to an internship.
///
/// A bound internship is validated to exist; a code is generated when the
/// caller supplies none. New contracts start in DRAFT with both sub-statuses
/// PENDING.
///
/// # Errors
///
/// Returns `NotFound` if a referenced entity does not resolve, or
/// `Conflict` if the code is already taken.
pub fn create_contract(
    persistence: &mut Persistence,
    codes: &dyn CodeGenerator,
    request: &CreateContractRequest,
) -> Result<Contract, EngineError> {
    if let Some(internship_id) = request.internship_id {
        resolve_internship(persistence, internship_id)?;
    }
    if let Some(teacher_id) = request.created_by_teacher_id {
        resolve_teacher(persistence, teacher_id)?;
    }

    let code = match &request.code {
        Some(code) => {
            if persistence
                .contract_code_exists(code)
                .map_err(EngineError::store)?
            {
                return Err(EngineError::Conflict {
                    resource: "Contract",
                    code: code.clone(),
                });
            }
            code.clone()
        }
        None => loop {
            let candidate = codes.next_code(CONTRACT_CODE_PREFIX);
            if !persistence
                .contract_code_exists(&candidate)
                .map_err(EngineError::store)?
            {
                break candidate;
            }
        },
    };

    let record = NewContract {
        internship_id: request.internship_id,
        code: code.clone(),
        title: request.title.clone(),
        terms: request.terms.clone(),
        amount: request.amount,
        status: ContractStatus::Draft.as_str().to_string(),
        payment_status: PaymentStatus::Pending.as_str().to_string(),
        approval_status: ApprovalStatus::Pending.as_str().to_string(),
        created_by_teacher_id: request.created_by_teacher_id,
    };

    let contract_id = persistence
        .insert_contract(&record)
        .map_err(|e| EngineError::code_write("Contract", &code, e))?;
    info!(contract_id, code = %code, "Created contract");

    get_contract(persistence, contract_id)
}

/// Gets a contract by id.
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist.
pub fn get_contract(
    persistence: &mut Persistence,
    contract_id: i64,
) -> Result<Contract, EngineError> {
    persistence
        .get_contract(contract_id)
        .map_err(|e| EngineError::lookup("Contract", contract_id, e))
}

/// Sends a contract out for signature (status → SENT).
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist.
pub fn send_contract(
    persistence: &mut Persistence,
    contract_id: i64,
) -> Result<Contract, EngineError> {
    apply_status_only(persistence, contract_id, ContractStatus::Sent)
}

/// Signs a contract, stamping its signature date to today.
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist.
pub fn sign_contract(
    persistence: &mut Persistence,
    contract_id: i64,
) -> Result<Contract, EngineError> {
    let _ = get_contract(persistence, contract_id)?;
    apply(
        persistence,
        contract_id,
        ContractChangeset {
            status: Some(ContractStatus::Signed.as_str().to_string()),
            signed_date: Some(format_date(today())),
            ..ContractChangeset::default()
        },
    )
}

/// Activates a contract (status → ACTIVE).
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist.
pub fn activate_contract(
    persistence: &mut Persistence,
    contract_id: i64,
) -> Result<Contract, EngineError> {
    apply_status_only(persistence, contract_id, ContractStatus::Active)
}

/// Expires a contract (status → EXPIRED).
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist.
pub fn expire_contract(
    persistence: &mut Persistence,
    contract_id: i64,
) -> Result<Contract, EngineError> {
    apply_status_only(persistence, contract_id, ContractStatus::Expired)
}

/// Terminates a contract (status → TERMINATED).
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist.
pub fn terminate_contract(
    persistence: &mut Persistence,
    contract_id: i64,
) -> Result<Contract, EngineError> {
    apply_status_only(persistence, contract_id, ContractStatus::Terminated)
}

/// Approves a contract on behalf of a teacher.
///
/// Records the approver, stamps the approval date, and moves the lifecycle
/// status to SIGNED.
///
/// # Errors
///
/// Returns `NotFound` if the contract or teacher does not exist.
pub fn approve_contract(
    persistence: &mut Persistence,
    contract_id: i64,
    teacher_id: i64,
) -> Result<Contract, EngineError> {
    resolve_teacher(persistence, teacher_id)?;
    let _ = get_contract(persistence, contract_id)?;

    apply(
        persistence,
        contract_id,
        ContractChangeset {
            approval_status: Some(ApprovalStatus::Approved.as_str().to_string()),
            approved_by_teacher_id: Some(teacher_id),
            approval_date: Some(format_date(today())),
            status: Some(ContractStatus::Signed.as_str().to_string()),
            ..ContractChangeset::default()
        },
    )
}

/// Rejects a contract on behalf of a teacher.
///
/// Records the decision maker and moves the lifecycle status to REJECTED.
///
/// # Errors
///
/// Returns `NotFound` if the contract or teacher does not exist.
pub fn reject_contract(
    persistence: &mut Persistence,
    contract_id: i64,
    teacher_id: i64,
) -> Result<Contract, EngineError> {
    resolve_teacher(persistence, teacher_id)?;
    let _ = get_contract(persistence, contract_id)?;

    apply(
        persistence,
        contract_id,
        ContractChangeset {
            approval_status: Some(ApprovalStatus::Rejected.as_str().to_string()),
            approved_by_teacher_id: Some(teacher_id),
            status: Some(ContractStatus::Rejected.as_str().to_string()),
            ..ContractChangeset::default()
        },
    )
}

/// Sets the payment sub-status.
///
/// Setting it to PAID also stamps the payment date (if unset) and forces the
/// lifecycle status to PAID.
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist, or `InvalidArgument`
/// on an unparseable status string.
pub fn update_payment_status(
    persistence: &mut Persistence,
    contract_id: i64,
    payment_status: &str,
) -> Result<Contract, EngineError> {
    let parsed = PaymentStatus::from_str(payment_status).map_err(translate_domain_error)?;
    let contract = get_contract(persistence, contract_id)?;

    let mut changeset = ContractChangeset {
        payment_status: Some(parsed.as_str().to_string()),
        ..ContractChangeset::default()
    };
    if parsed == PaymentStatus::Paid {
        changeset.payment_date = Some(format_date(contract.payment_date.unwrap_or_else(today)));
        changeset.status = Some(ContractStatus::Paid.as_str().to_string());
    }

    apply(persistence, contract_id, changeset)
}

/// Generic status update, back-filling dependent fields.
///
/// Jumping straight to SIGNED stamps the signature date if unset; jumping
/// straight to PAID forces the payment sub-status to PAID and stamps the
/// payment date if unset.
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist, or `InvalidArgument`
/// on an unparseable status string.
pub fn update_contract_status(
    persistence: &mut Persistence,
    contract_id: i64,
    status: &str,
) -> Result<Contract, EngineError> {
    let parsed = ContractStatus::from_str(status).map_err(translate_domain_error)?;
    let contract = get_contract(persistence, contract_id)?;

    let mut changeset = ContractChangeset {
        status: Some(parsed.as_str().to_string()),
        ..ContractChangeset::default()
    };
    match parsed {
        ContractStatus::Signed if contract.signed_date.is_none() => {
            changeset.signed_date = Some(format_date(today()));
        }
        ContractStatus::Paid => {
            changeset.payment_status = Some(PaymentStatus::Paid.as_str().to_string());
            changeset.payment_date =
                Some(format_date(contract.payment_date.unwrap_or_else(today)));
        }
        _ => {}
    }

    apply(persistence, contract_id, changeset)
}

/// Changes a contract's code, enforcing uniqueness.
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist, or `Conflict` if the
/// new code is already taken.
pub fn update_contract_code(
    persistence: &mut Persistence,
    contract_id: i64,
    code: &str,
) -> Result<Contract, EngineError> {
    let contract = get_contract(persistence, contract_id)?;
    if contract.code == code {
        return Ok(contract);
    }

    if persistence
        .contract_code_exists(code)
        .map_err(EngineError::store)?
    {
        return Err(EngineError::Conflict {
            resource: "Contract",
            code: code.to_string(),
        });
    }

    persistence
        .update_contract(
            contract_id,
            &ContractChangeset {
                code: Some(code.to_string()),
                ..ContractChangeset::default()
            },
        )
        .map_err(|e| EngineError::code_write("Contract", code, e))?;

    get_contract(persistence, contract_id)
}

fn apply_status_only(
    persistence: &mut Persistence,
    contract_id: i64,
    status: ContractStatus,
) -> Result<Contract, EngineError> {
    let _ = get_contract(persistence, contract_id)?;
    apply(
        persistence,
        contract_id,
        ContractChangeset {
            status: Some(status.as_str().to_string()),
            ..ContractChangeset::default()
        },
    )
}

fn apply(
    persistence: &mut Persistence,
    contract_id: i64,
    changeset: ContractChangeset,
) -> Result<Contract, EngineError> {
    persistence
        .update_contract(contract_id, &changeset)
        .map_err(|e| EngineError::lookup("Contract", contract_id, e))?;
    info!(contract_id, "Contract updated");

    get_contract(persistence, contract_id)
}
