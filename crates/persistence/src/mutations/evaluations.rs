// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluation mutation operations.

use diesel::prelude::*;

use crate::data_models::NewEvaluation;
use crate::diesel_schema::evaluations;
use crate::error::PersistenceError;

use super::last_insert_rowid;

/// Inserts a new evaluation and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_evaluation(
    conn: &mut SqliteConnection,
    record: &NewEvaluation,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(evaluations::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}
