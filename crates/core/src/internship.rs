// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Internship state machine operations.
//!
//! Approval and rejection are guarded edges out of PENDING. Start and
//! completion overwrite any prior status and restamp the corresponding
//! business date; assignment is handled by the assignment resolver module.
//! Each operation is a lookup, a domain validation, and a single persisting
//! write.

use std::str::FromStr;
use tracing::info;

use crate::clock::today;
use crate::codes::{CodeGenerator, INTERNSHIP_CODE_PREFIX};
use crate::error::{EngineError, translate_domain_error};
use crate::parse::optional_business_date;
use crate::request_response::{CreateInternshipRequest, InternshipPatch};
use crate::resolver::{
    resolve_batch, resolve_company, resolve_mentor, resolve_student, resolve_teacher,
};
use intern_track_domain::{Internship, InternshipStatus, format_date, validate_score};
use intern_track_persistence::{InternshipChangeset, NewInternship, Persistence};

/// Creates a new internship in PENDING.
///
/// The student is required and resolved; teacher, mentor, company, and batch
/// are optional and resolved when supplied. A code is generated when the
/// caller supplies none.
///
/// # Errors
///
/// Returns `NotFound` if a referenced entity does not resolve, `Conflict` if
/// the code is already taken, or `InvalidArgument` on a malformed date.
pub fn create_internship(
    persistence: &mut Persistence,
    codes: &dyn CodeGenerator,
    request: &CreateInternshipRequest,
) -> Result<Internship, EngineError> {
    resolve_student(persistence, request.student_id)?;
    if let Some(teacher_id) = request.teacher_id {
        resolve_teacher(persistence, teacher_id)?;
    }
    if let Some(mentor_id) = request.mentor_id {
        resolve_mentor(persistence, mentor_id)?;
    }
    if let Some(company_id) = request.company_id {
        resolve_company(persistence, company_id)?;
    }
    if let Some(batch_id) = request.batch_id {
        resolve_batch(persistence, batch_id)?;
    }

    let code = match &request.code {
        Some(code) => {
            if persistence
                .internship_code_exists(code)
                .map_err(EngineError::store)?
            {
                return Err(EngineError::Conflict {
                    resource: "Internship",
                    code: code.clone(),
                });
            }
            code.clone()
        }
        None => loop {
            let candidate = codes.next_code(INTERNSHIP_CODE_PREFIX);
            if !persistence
                .internship_code_exists(&candidate)
                .map_err(EngineError::store)?
            {
                break candidate;
            }
        },
    };

    let record = NewInternship {
        student_id: request.student_id,
        teacher_id: request.teacher_id,
        mentor_id: request.mentor_id,
        company_id: request.company_id,
        batch_id: request.batch_id,
        code: code.clone(),
        job_title: request.job_title.clone(),
        job_description: request.job_description.clone(),
        start_date: optional_business_date("start_date", request.start_date.as_deref())?,
        end_date: optional_business_date("end_date", request.end_date.as_deref())?,
        status: InternshipStatus::Pending.as_str().to_string(),
        working_hours_per_week: request.working_hours_per_week,
        salary: request.salary,
        notes: request.notes.clone(),
    };

    let internship_id = persistence
        .insert_internship(&record)
        .map_err(|e| EngineError::code_write("Internship", &code, e))?;
    info!(internship_id, code = %code, "Created internship");

    get_internship(persistence, internship_id)
}

/// Gets an internship by id.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist.
pub fn get_internship(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<Internship, EngineError> {
    persistence
        .get_internship(internship_id)
        .map_err(|e| EngineError::lookup("Internship", internship_id, e))
}

/// Approves a PENDING internship.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist, or
/// `InvalidTransition` if its status is not PENDING.
pub fn approve_internship(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<Internship, EngineError> {
    let internship = get_internship(persistence, internship_id)?;
    internship
        .status
        .validate_review_transition(InternshipStatus::Approved)
        .map_err(translate_domain_error)?;

    apply_status(persistence, internship_id, InternshipStatus::Approved, None, None)
}

/// Rejects a PENDING internship.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist, or
/// `InvalidTransition` if its status is not PENDING.
pub fn reject_internship(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<Internship, EngineError> {
    let internship = get_internship(persistence, internship_id)?;
    internship
        .status
        .validate_review_transition(InternshipStatus::Rejected)
        .map_err(translate_domain_error)?;

    apply_status(persistence, internship_id, InternshipStatus::Rejected, None, None)
}

/// Starts an internship, restamping its start date to today.
///
/// There is no precondition on the prior status; the department can force a
/// placement into IN_PROGRESS from anywhere.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist.
pub fn start_internship(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<Internship, EngineError> {
    let _ = get_internship(persistence, internship_id)?;
    apply_status(
        persistence,
        internship_id,
        InternshipStatus::InProgress,
        Some(today()),
        None,
    )
}

/// Completes an internship, restamping its end date to today.
///
/// There is no precondition on the prior status.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist.
pub fn complete_internship(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<Internship, EngineError> {
    let _ = get_internship(persistence, internship_id)?;
    apply_status(
        persistence,
        internship_id,
        InternshipStatus::Completed,
        None,
        Some(today()),
    )
}

/// Cancels an internship.
///
/// Refused once the lifecycle has ended (COMPLETED or REJECTED).
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist, or
/// `InvalidTransition` if its status is terminal.
pub fn cancel_internship(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<Internship, EngineError> {
    let internship = get_internship(persistence, internship_id)?;
    internship
        .status
        .validate_cancel()
        .map_err(translate_domain_error)?;

    apply_status(persistence, internship_id, InternshipStatus::Cancelled, None, None)
}

/// Applies an explicit partial update.
///
/// Only the fields supplied in the patch are written. A status supplied here
/// is parsed against the status set and applied unconditionally; this is the
/// generic setter, distinct from the guarded approve/reject edges. An
/// all-empty patch is a no-op.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist, or
/// `InvalidArgument` on a malformed status or an out-of-scale score.
pub fn update_internship(
    persistence: &mut Persistence,
    internship_id: i64,
    patch: &InternshipPatch,
) -> Result<Internship, EngineError> {
    let _ = get_internship(persistence, internship_id)?;

    let status = patch
        .status
        .as_deref()
        .map(InternshipStatus::from_str)
        .transpose()
        .map_err(translate_domain_error)?;

    for score in [patch.teacher_score, patch.mentor_score, patch.final_score]
        .into_iter()
        .flatten()
    {
        validate_score(score).map_err(translate_domain_error)?;
    }

    let changeset = InternshipChangeset {
        status: status.map(|s| s.as_str().to_string()),
        teacher_comment: patch.teacher_comment.clone(),
        teacher_score: patch.teacher_score,
        mentor_comment: patch.mentor_comment.clone(),
        mentor_score: patch.mentor_score,
        final_score: patch.final_score,
        notes: patch.notes.clone(),
        ..InternshipChangeset::default()
    };

    if !changeset.has_changes() {
        return get_internship(persistence, internship_id);
    }

    persistence
        .update_internship(internship_id, &changeset)
        .map_err(|e| EngineError::lookup("Internship", internship_id, e))?;

    get_internship(persistence, internship_id)
}

/// Deletes an internship, cascading to its reports, evaluations, tasks, and
/// progress records. Bound contracts are detached.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist.
pub fn delete_internship(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<(), EngineError> {
    persistence
        .delete_internship(internship_id)
        .map_err(|e| EngineError::lookup("Internship", internship_id, e))
}

fn apply_status(
    persistence: &mut Persistence,
    internship_id: i64,
    status: InternshipStatus,
    start_date: Option<time::Date>,
    end_date: Option<time::Date>,
) -> Result<Internship, EngineError> {
    let changeset = InternshipChangeset {
        status: Some(status.as_str().to_string()),
        start_date: start_date.map(format_date),
        end_date: end_date.map(format_date),
        ..InternshipChangeset::default()
    };

    persistence
        .update_internship(internship_id, &changeset)
        .map_err(|e| EngineError::lookup("Internship", internship_id, e))?;
    info!(internship_id, status = %status, "Internship status updated");

    get_internship(persistence, internship_id)
}
