// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report workflow operations.
//!
//! Weekly duplicate prevention is advisory: `can_submit_weekly_report` is a
//! separate query and report creation does not re-run it, so the
//! check-then-create pair has a race window that is the caller's to accept.
//! Teacher and mentor approvals are independent flags; a report counts as
//! approved when either is set.

use std::str::FromStr;
use tracing::info;

use crate::clock::{now_timestamp, today};
use crate::error::{EngineError, translate_domain_error};
use crate::internship::get_internship;
use crate::parse::{optional_business_date, optional_timestamp};
use crate::request_response::{CreateReportRequest, UpdateReportStatusRequest};
use crate::resolver::resolve_student;
use intern_track_domain::{
    DomainError, Report, ReportStatus, ReportType, format_date, validate_score,
    validate_week_number,
};
use intern_track_persistence::{NewReport, Persistence, ReportChangeset};

/// Creates a report for an internship.
///
/// The internship is required and resolved. A supplied student id must match
/// the internship's student; the internship is the single source of truth
/// for the student. Submission time and report date default to now/today.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not resolve, or
/// `InvalidArgument` on a student mismatch, an unparseable type, or a
/// missing weekly week number.
pub fn create_report(
    persistence: &mut Persistence,
    request: &CreateReportRequest,
) -> Result<Report, EngineError> {
    let internship = get_internship(persistence, request.internship_id)?;

    if let Some(student_id) = request.student_id {
        if student_id != internship.student_id {
            return Err(translate_domain_error(DomainError::StudentMismatch {
                supplied: student_id,
                bound: internship.student_id,
            }));
        }
    }

    let report_type = ReportType::from_str(&request.report_type).map_err(translate_domain_error)?;

    let week_number = match (report_type, request.week_number) {
        (ReportType::Weekly, Some(week)) => {
            validate_week_number(week).map_err(translate_domain_error)?;
            Some(week)
        }
        (ReportType::Weekly, None) => {
            return Err(EngineError::InvalidArgument {
                field: String::from("week_number"),
                message: String::from("weekly reports require a week number"),
            });
        }
        (_, week) => week,
    };

    let report_date = match optional_business_date("report_date", request.report_date.as_deref())? {
        Some(date) => Some(date),
        None => Some(format_date(today())),
    };
    let submitted_at = match optional_timestamp("submitted_at", request.submitted_at.as_deref())? {
        Some(ts) => Some(ts),
        None => Some(now_timestamp()?),
    };

    let record = NewReport {
        internship_id: request.internship_id,
        title: request.title.clone(),
        report_type: report_type.as_str().to_string(),
        week_number,
        status: ReportStatus::Pending.as_str().to_string(),
        report_date,
        submitted_at,
        comments: request.comments.clone(),
    };

    let report_id = persistence
        .insert_report(&record)
        .map_err(EngineError::store)?;
    info!(
        report_id,
        internship_id = request.internship_id,
        report_type = %report_type,
        "Created report"
    );

    get_report(persistence, report_id)
}

/// Gets a report by id.
///
/// # Errors
///
/// Returns `NotFound` if the report does not exist.
pub fn get_report(persistence: &mut Persistence, report_id: i64) -> Result<Report, EngineError> {
    persistence
        .get_report(report_id)
        .map_err(|e| EngineError::lookup("Report", report_id, e))
}

/// Advisory check: may this student still submit a weekly report for the
/// given week?
///
/// Returns false once any weekly report exists for (student, week). Report
/// creation does not re-run this check.
///
/// # Errors
///
/// Returns `NotFound` if the student does not resolve, or `InvalidArgument`
/// on a non-positive week number.
pub fn can_submit_weekly_report(
    persistence: &mut Persistence,
    student_id: i64,
    week_number: i32,
) -> Result<bool, EngineError> {
    resolve_student(persistence, student_id)?;
    validate_week_number(week_number).map_err(translate_domain_error)?;

    let exists = persistence
        .weekly_report_exists(student_id, week_number)
        .map_err(EngineError::store)?;
    Ok(!exists)
}

/// Computes the next week number for a student: the count of their existing
/// weekly reports plus one. Sequential, not gap-aware.
///
/// # Errors
///
/// Returns `NotFound` if the student does not resolve.
pub fn next_week_number(
    persistence: &mut Persistence,
    student_id: i64,
) -> Result<i32, EngineError> {
    resolve_student(persistence, student_id)?;

    let count = persistence
        .count_weekly_reports_for_student(student_id)
        .map_err(EngineError::store)?;
    let count = i32::try_from(count).map_err(|_| EngineError::Internal {
        message: format!("weekly report count {count} exceeds the week number range"),
    })?;
    Ok(count + 1)
}

/// Records the teacher's approval decision on a report.
///
/// The flag is independent of the mentor's; either one makes the report
/// approved overall.
///
/// # Errors
///
/// Returns `NotFound` if the report does not exist.
pub fn review_report_by_teacher(
    persistence: &mut Persistence,
    report_id: i64,
    approved: bool,
    feedback: Option<String>,
) -> Result<Report, EngineError> {
    let _ = get_report(persistence, report_id)?;
    apply(
        persistence,
        report_id,
        ReportChangeset {
            is_approved_by_teacher: Some(i32::from(approved)),
            feedback,
            ..ReportChangeset::default()
        },
    )
}

/// Records the mentor's approval decision on a report.
///
/// # Errors
///
/// Returns `NotFound` if the report does not exist.
pub fn review_report_by_mentor(
    persistence: &mut Persistence,
    report_id: i64,
    approved: bool,
    feedback: Option<String>,
) -> Result<Report, EngineError> {
    let _ = get_report(persistence, report_id)?;
    apply(
        persistence,
        report_id,
        ReportChangeset {
            is_approved_by_mentor: Some(i32::from(approved)),
            feedback,
            ..ReportChangeset::default()
        },
    )
}

/// Moves a report to a new review status, optionally recording feedback and
/// a grade. Entering APPROVED or REJECTED stamps the review time.
///
/// # Errors
///
/// Returns `NotFound` if the report does not exist, or `InvalidArgument` on
/// an unparseable status or an out-of-scale grade.
pub fn update_report_status(
    persistence: &mut Persistence,
    report_id: i64,
    request: &UpdateReportStatusRequest,
) -> Result<Report, EngineError> {
    let status = ReportStatus::from_str(&request.status).map_err(translate_domain_error)?;
    if let Some(grade) = request.grade {
        validate_score(grade).map_err(translate_domain_error)?;
    }
    let _ = get_report(persistence, report_id)?;

    let reviewed_at = if status.is_reviewed() {
        Some(now_timestamp()?)
    } else {
        None
    };

    apply(
        persistence,
        report_id,
        ReportChangeset {
            status: Some(status.as_str().to_string()),
            reviewed_at,
            grade: request.grade,
            feedback: request.feedback.clone(),
            ..ReportChangeset::default()
        },
    )
}

fn apply(
    persistence: &mut Persistence,
    report_id: i64,
    changeset: ReportChangeset,
) -> Result<Report, EngineError> {
    persistence
        .update_report(report_id, &changeset)
        .map_err(|e| EngineError::lookup("Report", report_id, e))?;
    info!(report_id, "Report updated");

    get_report(persistence, report_id)
}
