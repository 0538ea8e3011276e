// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contract mutation operations.

use diesel::prelude::*;

use crate::data_models::{ContractChangeset, NewContract};
use crate::diesel_schema::contracts;
use crate::error::PersistenceError;

use super::last_insert_rowid;

/// Inserts a new contract and returns its id.
///
/// # Errors
///
/// Returns `UniqueViolation` if the code is already taken, or another error
/// if the insert fails.
pub fn insert_contract(
    conn: &mut SqliteConnection,
    record: &NewContract,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(contracts::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}

/// Applies a partial update to a contract.
///
/// The caller must ensure the changeset writes at least one column.
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist, `UniqueViolation` if a
/// code change collides, or another error if the update fails.
pub fn update_contract(
    conn: &mut SqliteConnection,
    contract_id: i64,
    changeset: &ContractChangeset,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(contracts::table.filter(contracts::contract_id.eq(contract_id)))
        .set(changeset)
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Contract {contract_id} not found"
        )));
    }
    Ok(())
}
