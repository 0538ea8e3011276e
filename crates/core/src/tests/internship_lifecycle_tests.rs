// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the internship state machine: guarded review edges, forced
//! start/complete, cancellation, partial updates, and the full lifecycle
//! scenario.

use super::helpers::{
    create_test_codes, create_test_store, seed_batch, seed_company, seed_internship, seed_mentor,
    seed_student, seed_teacher, today_date,
};
use crate::error::EngineError;
use crate::request_response::{
    AssignInternshipRequest, CreateInternshipRequest, InternshipPatch,
};
use crate::{
    approve_internship, assign_internship, cancel_internship, complete_internship,
    create_internship, delete_internship, get_internship, reject_internship, start_internship,
    update_internship,
};
use intern_track_domain::InternshipStatus;

#[test]
fn test_create_defaults_to_pending_with_generated_code() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");

    let internship = seed_internship(&mut store, &codes, student_id);

    assert_eq!(internship.status, InternshipStatus::Pending);
    assert_eq!(internship.code, "INT-0001");
    assert_eq!(internship.student_id, student_id);
    assert_eq!(internship.start_date, None);
    assert_eq!(internship.end_date, None);
}

#[test]
fn test_create_with_full_references() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let teacher_id = seed_teacher(&mut store, "Prof. Varga");
    let mentor_id = seed_mentor(&mut store, "Iris Kovach");
    let company_id = seed_company(&mut store, "Brightline Systems");
    let batch_id = seed_batch(&mut store, "Spring 2026");

    let internship = create_internship(
        &mut store,
        &codes,
        &CreateInternshipRequest {
            student_id,
            teacher_id: Some(teacher_id),
            mentor_id: Some(mentor_id),
            company_id: Some(company_id),
            batch_id: Some(batch_id),
            job_title: Some(String::from("Backend intern")),
            start_date: Some(String::from("2026-03-02")),
            ..CreateInternshipRequest::default()
        },
    )
    .unwrap();

    assert_eq!(internship.teacher_id, Some(teacher_id));
    assert_eq!(internship.mentor_id, Some(mentor_id));
    assert_eq!(internship.company_id, Some(company_id));
    assert_eq!(internship.batch_id, Some(batch_id));
    assert_eq!(internship.job_title.as_deref(), Some("Backend intern"));
    assert!(internship.start_date.is_some());
}

#[test]
fn test_create_with_unknown_batch_fails() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");

    let result = create_internship(
        &mut store,
        &codes,
        &CreateInternshipRequest {
            student_id,
            batch_id: Some(17),
            ..CreateInternshipRequest::default()
        },
    );
    assert_eq!(
        result.unwrap_err(),
        EngineError::NotFound {
            resource: "Batch",
            id: 17
        }
    );
}

#[test]
fn test_create_with_malformed_date_fails() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");

    let result = create_internship(
        &mut store,
        &codes,
        &CreateInternshipRequest {
            student_id,
            start_date: Some(String::from("03/02/2026")),
            ..CreateInternshipRequest::default()
        },
    );
    assert!(matches!(
        result,
        Err(EngineError::InvalidArgument { field, .. }) if field == "start_date"
    ));
}

#[test]
fn test_create_with_unknown_student_fails() {
    let mut store = create_test_store();
    let codes = create_test_codes();

    let result = create_internship(
        &mut store,
        &codes,
        &CreateInternshipRequest {
            student_id: 42,
            ..CreateInternshipRequest::default()
        },
    );

    assert_eq!(
        result.unwrap_err(),
        EngineError::NotFound {
            resource: "Student",
            id: 42
        }
    );
}

#[test]
fn test_create_with_duplicate_code_conflicts() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");

    let request = CreateInternshipRequest {
        student_id,
        code: Some(String::from("INT-2026-001")),
        ..CreateInternshipRequest::default()
    };
    create_internship(&mut store, &codes, &request).unwrap();

    let result = create_internship(&mut store, &codes, &request);
    assert!(matches!(result, Err(EngineError::Conflict { .. })));
}

#[test]
fn test_generated_code_skips_taken_codes() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");

    create_internship(
        &mut store,
        &codes,
        &CreateInternshipRequest {
            student_id,
            code: Some(String::from("INT-0001")),
            ..CreateInternshipRequest::default()
        },
    )
    .unwrap();

    let second = seed_internship(&mut store, &codes, student_id);
    assert_eq!(second.code, "INT-0002");
}

#[test]
fn test_approve_from_pending() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    let approved = approve_internship(&mut store, internship.internship_id).unwrap();
    assert_eq!(approved.status, InternshipStatus::Approved);
}

#[test]
fn test_reject_from_pending() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    let rejected = reject_internship(&mut store, internship.internship_id).unwrap();
    assert_eq!(rejected.status, InternshipStatus::Rejected);
}

#[test]
fn test_approve_off_pending_fails_and_leaves_status() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    start_internship(&mut store, internship.internship_id).unwrap();

    let result = approve_internship(&mut store, internship.internship_id);
    assert!(matches!(
        result,
        Err(EngineError::InvalidTransition { from, .. }) if from == "IN_PROGRESS"
    ));

    let unchanged = get_internship(&mut store, internship.internship_id).unwrap();
    assert_eq!(unchanged.status, InternshipStatus::InProgress);
}

#[test]
fn test_reject_off_pending_fails() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    approve_internship(&mut store, internship.internship_id).unwrap();

    let result = reject_internship(&mut store, internship.internship_id);
    assert!(matches!(result, Err(EngineError::InvalidTransition { .. })));
}

#[test]
fn test_start_stamps_start_date_regardless_of_status() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    // Straight from PENDING, no approval first
    let started = start_internship(&mut store, internship.internship_id).unwrap();
    assert_eq!(started.status, InternshipStatus::InProgress);
    assert_eq!(started.start_date, Some(today_date()));
}

#[test]
fn test_complete_stamps_end_date_regardless_of_status() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    let completed = complete_internship(&mut store, internship.internship_id).unwrap();
    assert_eq!(completed.status, InternshipStatus::Completed);
    assert_eq!(completed.end_date, Some(today_date()));
}

#[test]
fn test_cancel_from_active_states() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    let cancelled = cancel_internship(&mut store, internship.internship_id).unwrap();
    assert_eq!(cancelled.status, InternshipStatus::Cancelled);
}

#[test]
fn test_cancel_refused_after_completion() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    complete_internship(&mut store, internship.internship_id).unwrap();

    let result = cancel_internship(&mut store, internship.internship_id);
    assert!(matches!(result, Err(EngineError::InvalidTransition { .. })));
}

#[test]
fn test_full_lifecycle_scenario() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let mentor_id = seed_mentor(&mut store, "Iris Kovach");
    let internship = seed_internship(&mut store, &codes, student_id);
    let id = internship.internship_id;

    let approved = approve_internship(&mut store, id).unwrap();
    assert_eq!(approved.status, InternshipStatus::Approved);

    // Assignment overrides APPROVED
    let assigned = assign_internship(
        &mut store,
        id,
        &AssignInternshipRequest {
            student_id: Some(student_id),
            mentor_id: Some(mentor_id),
            ..AssignInternshipRequest::default()
        },
    )
    .unwrap();
    assert_eq!(assigned.status, InternshipStatus::Assigned);
    assert_eq!(assigned.mentor_id, Some(mentor_id));

    let started = start_internship(&mut store, id).unwrap();
    assert_eq!(started.status, InternshipStatus::InProgress);
    assert_eq!(started.start_date, Some(today_date()));

    let completed = complete_internship(&mut store, id).unwrap();
    assert_eq!(completed.status, InternshipStatus::Completed);
    assert_eq!(completed.end_date, Some(today_date()));
}

#[test]
fn test_patch_writes_only_supplied_fields() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    let patched = update_internship(
        &mut store,
        internship.internship_id,
        &InternshipPatch {
            teacher_score: Some(8.5),
            teacher_comment: Some(String::from("strong independent work")),
            ..InternshipPatch::default()
        },
    )
    .unwrap();

    assert_eq!(patched.teacher_score, Some(8.5));
    assert_eq!(
        patched.teacher_comment.as_deref(),
        Some("strong independent work")
    );
    // Everything else untouched
    assert_eq!(patched.status, InternshipStatus::Pending);
    assert_eq!(patched.mentor_score, None);
    assert_eq!(patched.final_score, None);
    assert_eq!(patched.code, internship.code);
}

#[test]
fn test_patch_status_applies_unconditionally() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    complete_internship(&mut store, internship.internship_id).unwrap();

    // The generic setter is not the guarded approve edge
    let patched = update_internship(
        &mut store,
        internship.internship_id,
        &InternshipPatch {
            status: Some(String::from("CANCELLED")),
            ..InternshipPatch::default()
        },
    )
    .unwrap();
    assert_eq!(patched.status, InternshipStatus::Cancelled);
}

#[test]
fn test_patch_rejects_unknown_status_string() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    let result = update_internship(
        &mut store,
        internship.internship_id,
        &InternshipPatch {
            status: Some(String::from("ON_HOLD")),
            ..InternshipPatch::default()
        },
    );
    assert!(matches!(
        result,
        Err(EngineError::InvalidArgument { field, .. }) if field == "status"
    ));
}

#[test]
fn test_patch_rejects_out_of_scale_score() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    let result = update_internship(
        &mut store,
        internship.internship_id,
        &InternshipPatch {
            final_score: Some(11.0),
            ..InternshipPatch::default()
        },
    );
    assert!(matches!(
        result,
        Err(EngineError::InvalidArgument { field, .. }) if field == "score"
    ));
}

#[test]
fn test_empty_patch_is_noop() {
    let mut store = create_test_store();
    let codes = create_test_codes();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship = seed_internship(&mut store, &codes, student_id);

    let unchanged =
        update_internship(&mut store, internship.internship_id, &InternshipPatch::default())
            .unwrap();
    assert_eq!(unchanged, internship);
}

#[test]
fn test_delete_unknown_internship_fails() {
    let mut store = create_test_store();
    let result = delete_internship(&mut store, 7);
    assert_eq!(
        result.unwrap_err(),
        EngineError::NotFound {
            resource: "Internship",
            id: 7
        }
    );
}
