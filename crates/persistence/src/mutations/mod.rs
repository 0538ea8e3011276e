// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations.
//!
//! All functions are monomorphic over `&mut SqliteConnection`. Transaction
//! scoping is the `Persistence` adapter's job; functions here assume they run
//! inside one.

pub mod contracts;
pub mod evaluations;
pub mod internships;
pub mod progress;
pub mod refs;
pub mod reports;
pub mod tasks;

use diesel::prelude::*;

use crate::error::PersistenceError;

/// Retrieves the id assigned to the most recent insert on this connection.
pub(crate) fn last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    diesel::select(diesel::dsl::sql::<diesel::sql_types::BigInt>(
        "last_insert_rowid()",
    ))
    .get_result::<i64>(conn)
    .map_err(Into::into)
}
