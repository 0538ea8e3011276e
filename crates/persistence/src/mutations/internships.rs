// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Internship mutation operations.

use diesel::prelude::*;

use crate::data_models::{InternshipChangeset, NewInternship};
use crate::diesel_schema::{contracts, evaluations, internships, progress_records, reports, tasks};
use crate::error::PersistenceError;

use super::last_insert_rowid;

/// Inserts a new internship and returns its id.
///
/// # Errors
///
/// Returns `UniqueViolation` if the code is already taken, or another error
/// if the insert fails.
pub fn insert_internship(
    conn: &mut SqliteConnection,
    record: &NewInternship,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(internships::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}

/// Applies a partial update to an internship.
///
/// The caller must ensure the changeset writes at least one column.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist, or another error if
/// the update fails.
pub fn update_internship(
    conn: &mut SqliteConnection,
    internship_id: i64,
    changeset: &InternshipChangeset,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(
        internships::table.filter(internships::internship_id.eq(internship_id)),
    )
    .set(changeset)
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Internship {internship_id} not found"
        )));
    }
    Ok(())
}

/// Deletes an internship together with its reports, evaluations, tasks, and
/// progress rows. Bound contracts are detached rather than deleted, since a
/// contract may outlive the placement.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist, or another error if
/// a delete fails.
pub fn delete_internship_cascade(
    conn: &mut SqliteConnection,
    internship_id: i64,
) -> Result<(), PersistenceError> {
    diesel::delete(reports::table.filter(reports::internship_id.eq(internship_id)))
        .execute(conn)?;
    diesel::delete(evaluations::table.filter(evaluations::internship_id.eq(internship_id)))
        .execute(conn)?;
    diesel::delete(tasks::table.filter(tasks::internship_id.eq(internship_id))).execute(conn)?;
    diesel::delete(
        progress_records::table.filter(progress_records::internship_id.eq(internship_id)),
    )
    .execute(conn)?;

    diesel::update(contracts::table.filter(contracts::internship_id.eq(internship_id)))
        .set(contracts::internship_id.eq(None::<i64>))
        .execute(conn)?;

    let deleted = diesel::delete(
        internships::table.filter(internships::internship_id.eq(internship_id)),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Internship {internship_id} not found"
        )));
    }
    Ok(())
}
