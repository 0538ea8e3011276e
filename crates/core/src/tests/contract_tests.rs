// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the contract lifecycle: dedicated operations, the payment
//! coupling rule, and the back-filling generic status update.

use super::helpers::{
    create_test_codes, create_test_store, seed_internship, seed_student, seed_teacher, today_date,
};
use crate::error::EngineError;
use crate::request_response::CreateContractRequest;
use crate::{
    activate_contract, approve_contract, create_contract, expire_contract, reject_contract,
    send_contract, sign_contract, terminate_contract, update_contract_code,
    update_contract_status, update_payment_status,
};
use intern_track_domain::{ApprovalStatus, ContractStatus, PaymentStatus};

#[test]
fn test_create_contract_standalone_defaults() {
    let mut store = create_test_store();
    let codes = create_test_codes();

    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    assert_eq!(contract.status, ContractStatus::Draft);
    assert_eq!(contract.payment_status, PaymentStatus::Pending);
    assert_eq!(contract.approval_status, ApprovalStatus::Pending);
    assert_eq!(contract.code, "CON-0001");
    assert_eq!(contract.internship_id, None);
    assert_eq!(contract.signed_date, None);
}

#[test]
fn test_create_contract_bound_to_internship() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    let contract = create_contract(
        &mut store,
        &codes,
        &CreateContractRequest {
            internship_id: Some(internship.internship_id),
            ..CreateContractRequest::default()
        },
    )
    .unwrap();

    assert_eq!(contract.internship_id, Some(internship.internship_id));
}

#[test]
fn test_create_contract_unknown_internship_fails() {
    let mut store = create_test_store();
    let codes = create_test_codes();

    let result = create_contract(
        &mut store,
        &codes,
        &CreateContractRequest {
            internship_id: Some(404),
            ..CreateContractRequest::default()
        },
    );
    assert_eq!(
        result.unwrap_err(),
        EngineError::NotFound {
            resource: "Internship",
            id: 404
        }
    );
}

#[test]
fn test_create_contract_duplicate_code_conflicts() {
    let mut store = create_test_store();
    let codes = create_test_codes();

    let request = CreateContractRequest {
        code: Some(String::from("CON-SUPPORT-1")),
        ..CreateContractRequest::default()
    };
    create_contract(&mut store, &codes, &request).unwrap();

    let result = create_contract(&mut store, &codes, &request);
    assert!(matches!(result, Err(EngineError::Conflict { .. })));
}

#[test]
fn test_support_contract_records_originating_teacher() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let teacher_id = seed_teacher(&mut store, "Prof. Varga");

    let contract = create_contract(
        &mut store,
        &codes,
        &CreateContractRequest {
            created_by_teacher_id: Some(teacher_id),
            title: Some(String::from("Semester support grant")),
            amount: Some(1200.0),
            ..CreateContractRequest::default()
        },
    )
    .unwrap();

    assert_eq!(contract.created_by_teacher_id, Some(teacher_id));
}

#[test]
fn test_sign_stamps_signed_date() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    let signed = sign_contract(&mut store, contract.contract_id).unwrap();
    assert_eq!(signed.status, ContractStatus::Signed);
    assert_eq!(signed.signed_date, Some(today_date()));
}

#[test]
fn test_dedicated_status_operations() {
    let mut store = create_test_store();
    let codes = create_test_codes();

    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();
    let id = contract.contract_id;

    assert_eq!(
        send_contract(&mut store, id).unwrap().status,
        ContractStatus::Sent
    );
    assert_eq!(
        activate_contract(&mut store, id).unwrap().status,
        ContractStatus::Active
    );
    assert_eq!(
        expire_contract(&mut store, id).unwrap().status,
        ContractStatus::Expired
    );
    assert_eq!(
        terminate_contract(&mut store, id).unwrap().status,
        ContractStatus::Terminated
    );
}

#[test]
fn test_approve_records_approver_and_signs() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let teacher_id = seed_teacher(&mut store, "Prof. Varga");
    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    let approved = approve_contract(&mut store, contract.contract_id, teacher_id).unwrap();

    assert_eq!(approved.approval_status, ApprovalStatus::Approved);
    assert_eq!(approved.approved_by_teacher_id, Some(teacher_id));
    assert_eq!(approved.approval_date, Some(today_date()));
    assert_eq!(approved.status, ContractStatus::Signed);
}

#[test]
fn test_reject_sets_both_statuses() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let teacher_id = seed_teacher(&mut store, "Prof. Varga");
    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    let rejected = reject_contract(&mut store, contract.contract_id, teacher_id).unwrap();

    assert_eq!(rejected.approval_status, ApprovalStatus::Rejected);
    assert_eq!(rejected.status, ContractStatus::Rejected);
}

#[test]
fn test_approve_with_unknown_teacher_fails() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    let result = approve_contract(&mut store, contract.contract_id, 77);
    assert_eq!(
        result.unwrap_err(),
        EngineError::NotFound {
            resource: "Teacher",
            id: 77
        }
    );
}

#[test]
fn test_update_payment_status_paid_forces_contract_paid() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    let paid = update_payment_status(&mut store, contract.contract_id, "PAID").unwrap();

    assert_eq!(paid.payment_status, PaymentStatus::Paid);
    assert_eq!(paid.payment_date, Some(today_date()));
    assert_eq!(paid.status, ContractStatus::Paid);
}

#[test]
fn test_update_payment_status_overdue_leaves_lifecycle_alone() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    let overdue = update_payment_status(&mut store, contract.contract_id, "OVERDUE").unwrap();

    assert_eq!(overdue.payment_status, PaymentStatus::Overdue);
    assert_eq!(overdue.status, ContractStatus::Draft);
    assert_eq!(overdue.payment_date, None);
}

#[test]
fn test_update_payment_status_rejects_unknown_string() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    let result = update_payment_status(&mut store, contract.contract_id, "SETTLED");
    assert!(matches!(result, Err(EngineError::InvalidArgument { .. })));
}

#[test]
fn test_generic_status_update_backfills_signed_date() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    // Jump straight to SIGNED without the dedicated sign operation
    let signed = update_contract_status(&mut store, contract.contract_id, "SIGNED").unwrap();
    assert_eq!(signed.status, ContractStatus::Signed);
    assert_eq!(signed.signed_date, Some(today_date()));
}

#[test]
fn test_generic_status_update_to_paid_backfills_payment() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    let paid = update_contract_status(&mut store, contract.contract_id, "PAID").unwrap();
    assert_eq!(paid.status, ContractStatus::Paid);
    assert_eq!(paid.payment_status, PaymentStatus::Paid);
    assert_eq!(paid.payment_date, Some(today_date()));
}

#[test]
fn test_update_contract_code_enforces_uniqueness() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let first = create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();
    let second =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    let result = update_contract_code(&mut store, second.contract_id, &first.code);
    assert!(matches!(result, Err(EngineError::Conflict { .. })));

    let renamed =
        update_contract_code(&mut store, second.contract_id, "CON-RENEWAL-7").unwrap();
    assert_eq!(renamed.code, "CON-RENEWAL-7");
}

#[test]
fn test_update_contract_code_same_code_is_noop() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let contract =
        create_contract(&mut store, &codes, &CreateContractRequest::default()).unwrap();

    let unchanged =
        update_contract_code(&mut store, contract.contract_id, &contract.code).unwrap();
    assert_eq!(unchanged, contract);
}
