// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contract queries.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::data_models::ContractRow;
use crate::diesel_schema::contracts;
use crate::error::PersistenceError;
use intern_track_domain::Contract;

/// Gets a contract by id.
///
/// # Errors
///
/// Returns `NotFound` if the contract does not exist, or `DecodeFailed`
/// if the stored row is invalid.
pub fn get_contract(
    conn: &mut SqliteConnection,
    contract_id: i64,
) -> Result<Contract, PersistenceError> {
    contracts::table
        .find(contract_id)
        .first::<ContractRow>(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Contract {contract_id} not found"))
            }
            other => other.into(),
        })?
        .into_domain()
}

/// Returns whether a contract code is already taken.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn contract_code_exists(
    conn: &mut SqliteConnection,
    code: &str,
) -> Result<bool, PersistenceError> {
    diesel::select(exists(contracts::table.filter(contracts::code.eq(code))))
        .get_result(conn)
        .map_err(Into::into)
}
