// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report mutation operations.

use diesel::prelude::*;

use crate::data_models::{NewReport, ReportChangeset};
use crate::diesel_schema::reports;
use crate::error::PersistenceError;

use super::last_insert_rowid;

/// Inserts a new report and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_report(
    conn: &mut SqliteConnection,
    record: &NewReport,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(reports::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}

/// Applies a partial update to a report's review state.
///
/// The caller must ensure the changeset writes at least one column.
///
/// # Errors
///
/// Returns `NotFound` if the report does not exist, or another error if the
/// update fails.
pub fn update_report(
    conn: &mut SqliteConnection,
    report_id: i64,
    changeset: &ReportChangeset,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(reports::table.filter(reports::report_id.eq(report_id)))
        .set(changeset)
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Report {report_id} not found"
        )));
    }
    Ok(())
}
