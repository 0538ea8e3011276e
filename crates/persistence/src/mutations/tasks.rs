// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Task mutation operations.

use diesel::prelude::*;

use crate::data_models::NewTask;
use crate::diesel_schema::tasks;
use crate::error::PersistenceError;

use super::last_insert_rowid;

/// Inserts a new task and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_task(conn: &mut SqliteConnection, record: &NewTask) -> Result<i64, PersistenceError> {
    diesel::insert_into(tasks::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}

/// Updates a task's status, stamping or clearing its completion timestamp.
///
/// # Errors
///
/// Returns `NotFound` if the task does not exist, or another error if the
/// update fails.
pub fn update_task_status(
    conn: &mut SqliteConnection,
    task_id: i64,
    status: &str,
    completed_at: Option<String>,
) -> Result<(), PersistenceError> {
    let updated = diesel::update(tasks::table.filter(tasks::task_id.eq(task_id)))
        .set((tasks::status.eq(status), tasks::completed_at.eq(completed_at)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Task {task_id} not found"
        )));
    }
    Ok(())
}
