// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Internship queries.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::data_models::InternshipRow;
use crate::diesel_schema::internships;
use crate::error::PersistenceError;
use intern_track_domain::Internship;

/// Gets an internship by id.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist, or `DecodeFailed`
/// if the stored row is invalid.
pub fn get_internship(
    conn: &mut SqliteConnection,
    internship_id: i64,
) -> Result<Internship, PersistenceError> {
    internships::table
        .find(internship_id)
        .first::<InternshipRow>(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Internship {internship_id} not found"))
            }
            other => other.into(),
        })?
        .into_domain()
}

/// Returns whether an internship exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn internship_exists(
    conn: &mut SqliteConnection,
    internship_id: i64,
) -> Result<bool, PersistenceError> {
    diesel::select(exists(
        internships::table.filter(internships::internship_id.eq(internship_id)),
    ))
    .get_result(conn)
    .map_err(Into::into)
}

/// Returns whether an internship code is already taken.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn internship_code_exists(
    conn: &mut SqliteConnection,
    code: &str,
) -> Result<bool, PersistenceError> {
    diesel::select(exists(
        internships::table.filter(internships::code.eq(code)),
    ))
    .get_result(conn)
    .map_err(Into::into)
}

/// Lists the ids of all internships supervised by a mentor.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn internship_ids_for_mentor(
    conn: &mut SqliteConnection,
    mentor_id: i64,
) -> Result<Vec<i64>, PersistenceError> {
    internships::table
        .filter(internships::mentor_id.eq(mentor_id))
        .select(internships::internship_id)
        .load::<i64>(conn)
        .map_err(Into::into)
}
