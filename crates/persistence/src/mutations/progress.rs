// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Progress record mutation operations.

use diesel::prelude::*;

use crate::data_models::{NewProgress, ProgressChangeset};
use crate::diesel_schema::progress_records;
use crate::error::PersistenceError;

use super::last_insert_rowid;

/// Inserts a new progress row and returns its id.
///
/// # Errors
///
/// Returns `UniqueViolation` if a row for the (internship, week) pair
/// already exists, or another error if the insert fails.
pub fn insert_progress(
    conn: &mut SqliteConnection,
    record: &NewProgress,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(progress_records::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}

/// Overwrites the mutable fields of an existing progress row.
///
/// The caller must ensure the changeset writes at least one column.
///
/// # Errors
///
/// Returns `NotFound` if the row does not exist, or another error if the
/// update fails.
pub fn update_progress(
    conn: &mut SqliteConnection,
    progress_id: i64,
    changeset: &ProgressChangeset,
) -> Result<(), PersistenceError> {
    let updated =
        diesel::update(progress_records::table.filter(progress_records::progress_id.eq(progress_id)))
            .set(changeset)
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Progress record {progress_id} not found"
        )));
    }
    Ok(())
}
