// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report queries.
//!
//! Reports reach their student through the owning internship, so the
//! per-student queries filter on a subquery over the internships table.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::data_models::ReportRow;
use crate::diesel_schema::{internships, reports};
use crate::error::PersistenceError;
use intern_track_domain::{Report, ReportType};

/// Gets a report by id.
///
/// # Errors
///
/// Returns `NotFound` if the report does not exist, or `DecodeFailed` if the
/// stored row is invalid.
pub fn get_report(conn: &mut SqliteConnection, report_id: i64) -> Result<Report, PersistenceError> {
    reports::table
        .find(report_id)
        .first::<ReportRow>(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Report {report_id} not found"))
            }
            other => other.into(),
        })?
        .into_domain()
}

/// Returns whether a weekly report already exists for a student and week.
///
/// This is the advisory duplicate check behind `can_submit_weekly_report`;
/// report creation itself does not re-run it.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn weekly_report_exists(
    conn: &mut SqliteConnection,
    student_id: i64,
    week_number: i32,
) -> Result<bool, PersistenceError> {
    let student_internships = internships::table
        .filter(internships::student_id.eq(student_id))
        .select(internships::internship_id);

    diesel::select(exists(
        reports::table
            .filter(reports::internship_id.eq_any(student_internships))
            .filter(reports::report_type.eq(ReportType::Weekly.as_str()))
            .filter(reports::week_number.eq(week_number)),
    ))
    .get_result(conn)
    .map_err(Into::into)
}

/// Counts the weekly reports a student has filed across all their
/// internships. The next week number is this count plus one.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_weekly_reports_for_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<i64, PersistenceError> {
    let student_internships = internships::table
        .filter(internships::student_id.eq(student_id))
        .select(internships::internship_id);

    reports::table
        .filter(reports::internship_id.eq_any(student_internships))
        .filter(reports::report_type.eq(ReportType::Weekly.as_str()))
        .count()
        .get_result(conn)
        .map_err(Into::into)
}
