// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the store adapter: round trips, uniqueness enforcement, and
//! the internship cascade.

use super::helpers::{create_test_store, new_internship, seed_mentor, seed_student, seed_teacher};
use crate::data_models::{
    InternshipChangeset, NewContract, NewEvaluation, NewProgress, NewReport, NewTask,
};
use crate::error::PersistenceError;
use intern_track_domain::{
    ApprovalStatus, ContractStatus, InternshipStatus, PaymentStatus, ReportStatus,
};

#[test]
fn test_internship_round_trip() {
    let mut store = create_test_store();
    let student_id = seed_student(&mut store, "Dana Soto");

    let internship_id = store
        .insert_internship(&new_internship(student_id, "INT-0001"))
        .unwrap();

    let internship = store.get_internship(internship_id).unwrap();
    assert_eq!(internship.internship_id, internship_id);
    assert_eq!(internship.student_id, student_id);
    assert_eq!(internship.code, "INT-0001");
    assert_eq!(internship.status, InternshipStatus::Pending);
    assert_eq!(internship.teacher_id, None);
    assert_eq!(internship.start_date, None);
}

#[test]
fn test_get_internship_not_found() {
    let mut store = create_test_store();
    let result = store.get_internship(999);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_internship_code_unique_violation() {
    let mut store = create_test_store();
    let student_id = seed_student(&mut store, "Dana Soto");

    store
        .insert_internship(&new_internship(student_id, "INT-0001"))
        .unwrap();
    let result = store.insert_internship(&new_internship(student_id, "INT-0001"));

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_update_internship_changeset_writes_only_supplied_fields() {
    let mut store = create_test_store();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship_id = store
        .insert_internship(&new_internship(student_id, "INT-0001"))
        .unwrap();

    store
        .update_internship(
            internship_id,
            &InternshipChangeset {
                status: Some(InternshipStatus::Approved.as_str().to_string()),
                teacher_comment: Some(String::from("solid plan")),
                ..InternshipChangeset::default()
            },
        )
        .unwrap();

    let internship = store.get_internship(internship_id).unwrap();
    assert_eq!(internship.status, InternshipStatus::Approved);
    assert_eq!(internship.teacher_comment.as_deref(), Some("solid plan"));
    // Untouched columns keep their values
    assert_eq!(internship.code, "INT-0001");
    assert_eq!(internship.mentor_comment, None);
}

#[test]
fn test_delete_internship_cascades_and_detaches_contracts() {
    let mut store = create_test_store();
    let student_id = seed_student(&mut store, "Dana Soto");
    let teacher_id = seed_teacher(&mut store, "Prof. Varga");
    let teacher = store.get_teacher(teacher_id).unwrap();
    let internship_id = store
        .insert_internship(&new_internship(student_id, "INT-0001"))
        .unwrap();

    let report_id = store
        .insert_report(&NewReport {
            internship_id,
            title: String::from("Week 1"),
            report_type: String::from("WEEKLY"),
            week_number: Some(1),
            status: ReportStatus::Pending.as_str().to_string(),
            report_date: None,
            submitted_at: None,
            comments: None,
        })
        .unwrap();

    store
        .insert_evaluation(&NewEvaluation {
            internship_id,
            evaluator_user_id: teacher.user_id,
            evaluator_type: String::from("TEACHER"),
            technical_score: None,
            soft_skill_score: None,
            attitude_score: None,
            communication_score: None,
            overall_score: Some(8.0),
            is_final_evaluation: 0,
            evaluation_date: String::from("2026-05-01T10:00:00Z"),
            strengths: None,
            weaknesses: None,
            recommendations: None,
            comments: None,
        })
        .unwrap();

    store
        .insert_task(&NewTask {
            internship_id,
            mentor_id: None,
            student_id: Some(student_id),
            title: String::from("Set up environment"),
            description: None,
            status: String::from("PENDING"),
            priority: String::from("MEDIUM"),
            due_date: None,
        })
        .unwrap();

    store
        .insert_progress(&NewProgress {
            internship_id,
            current_week: 1,
            total_weeks: 12,
            completed_tasks: 0,
            total_tasks: 1,
            overall_progress: 5.0,
            accomplishments: None,
            challenges: None,
            next_week_plan: None,
            week_start_date: None,
            week_end_date: None,
        })
        .unwrap();

    let contract_id = store
        .insert_contract(&NewContract {
            internship_id: Some(internship_id),
            code: String::from("CON-0001"),
            title: None,
            terms: None,
            amount: None,
            status: ContractStatus::Draft.as_str().to_string(),
            payment_status: PaymentStatus::Pending.as_str().to_string(),
            approval_status: ApprovalStatus::Pending.as_str().to_string(),
            created_by_teacher_id: None,
        })
        .unwrap();

    store.delete_internship(internship_id).unwrap();

    assert!(matches!(
        store.get_internship(internship_id),
        Err(PersistenceError::NotFound(_))
    ));
    assert!(matches!(
        store.get_report(report_id),
        Err(PersistenceError::NotFound(_))
    ));
    assert!(
        store
            .overall_scores_for_internship(internship_id)
            .unwrap()
            .is_empty()
    );
    assert_eq!(store.task_counts_for_internship(internship_id).unwrap(), (0, 0));
    assert_eq!(
        store.latest_progress_for_internship(internship_id).unwrap(),
        None
    );

    // The contract survives, detached from the deleted internship
    let contract = store.get_contract(contract_id).unwrap();
    assert_eq!(contract.internship_id, None);
}

#[test]
fn test_progress_week_unique_per_internship() {
    let mut store = create_test_store();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship_id = store
        .insert_internship(&new_internship(student_id, "INT-0001"))
        .unwrap();

    let record = NewProgress {
        internship_id,
        current_week: 2,
        total_weeks: 12,
        completed_tasks: 0,
        total_tasks: 0,
        overall_progress: 40.0,
        accomplishments: None,
        challenges: None,
        next_week_plan: None,
        week_start_date: None,
        week_end_date: None,
    };

    store.insert_progress(&record).unwrap();
    let result = store.insert_progress(&record);
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_weekly_report_queries_cross_internships() {
    let mut store = create_test_store();
    let student_id = seed_student(&mut store, "Dana Soto");
    let first = store
        .insert_internship(&new_internship(student_id, "INT-0001"))
        .unwrap();
    let second = store
        .insert_internship(&new_internship(student_id, "INT-0002"))
        .unwrap();

    for (internship_id, week) in [(first, 1), (first, 2), (second, 3)] {
        store
            .insert_report(&NewReport {
                internship_id,
                title: format!("Week {week}"),
                report_type: String::from("WEEKLY"),
                week_number: Some(week),
                status: ReportStatus::Pending.as_str().to_string(),
                report_date: None,
                submitted_at: None,
                comments: None,
            })
            .unwrap();
    }

    // A monthly report does not count toward weekly totals
    store
        .insert_report(&NewReport {
            internship_id: first,
            title: String::from("March"),
            report_type: String::from("MONTHLY"),
            week_number: None,
            status: ReportStatus::Pending.as_str().to_string(),
            report_date: None,
            submitted_at: None,
            comments: None,
        })
        .unwrap();

    assert!(store.weekly_report_exists(student_id, 1).unwrap());
    assert!(store.weekly_report_exists(student_id, 3).unwrap());
    assert!(!store.weekly_report_exists(student_id, 4).unwrap());
    assert_eq!(store.count_weekly_reports_for_student(student_id).unwrap(), 3);

    let other_student = seed_student(&mut store, "Leo Brandt");
    assert!(!store.weekly_report_exists(other_student, 1).unwrap());
    assert_eq!(
        store.count_weekly_reports_for_student(other_student).unwrap(),
        0
    );
}

#[test]
fn test_task_counts_for_internship() {
    let mut store = create_test_store();
    let student_id = seed_student(&mut store, "Dana Soto");
    let mentor_id = seed_mentor(&mut store, "Iris Kovach");
    let internship_id = store
        .insert_internship(&new_internship(student_id, "INT-0001"))
        .unwrap();

    let mut task_ids = Vec::new();
    for title in ["Onboarding", "First feature", "Code review"] {
        let task_id = store
            .insert_task(&NewTask {
                internship_id,
                mentor_id: Some(mentor_id),
                student_id: Some(student_id),
                title: title.to_string(),
                description: None,
                status: String::from("PENDING"),
                priority: String::from("MEDIUM"),
                due_date: None,
            })
            .unwrap();
        task_ids.push(task_id);
    }

    store
        .update_task_status(
            task_ids[0],
            "COMPLETED",
            Some(String::from("2026-04-02T16:00:00Z")),
        )
        .unwrap();

    assert_eq!(store.task_counts_for_internship(internship_id).unwrap(), (1, 3));
}

#[test]
fn test_latest_progress_picks_highest_week() {
    let mut store = create_test_store();
    let student_id = seed_student(&mut store, "Dana Soto");
    let internship_id = store
        .insert_internship(&new_internship(student_id, "INT-0001"))
        .unwrap();

    for (week, progress) in [(1, 10.0), (3, 35.0), (2, 20.0)] {
        store
            .insert_progress(&NewProgress {
                internship_id,
                current_week: week,
                total_weeks: 12,
                completed_tasks: 0,
                total_tasks: 0,
                overall_progress: progress,
                accomplishments: None,
                challenges: None,
                next_week_plan: None,
                week_start_date: None,
                week_end_date: None,
            })
            .unwrap();
    }

    let latest = store
        .latest_progress_for_internship(internship_id)
        .unwrap()
        .unwrap();
    assert_eq!(latest.current_week, 3);
    assert!((latest.overall_progress - 35.0).abs() < f64::EPSILON);
}
