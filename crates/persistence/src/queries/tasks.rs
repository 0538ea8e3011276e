// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Task queries.

use diesel::prelude::*;

use crate::data_models::TaskRow;
use crate::diesel_schema::tasks;
use crate::error::PersistenceError;
use intern_track_domain::{Task, TaskStatus};

/// Gets a task by id.
///
/// # Errors
///
/// Returns `NotFound` if the task does not exist, or `DecodeFailed` if the
/// stored row is invalid.
pub fn get_task(conn: &mut SqliteConnection, task_id: i64) -> Result<Task, PersistenceError> {
    tasks::table
        .find(task_id)
        .first::<TaskRow>(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Task {task_id} not found"))
            }
            other => other.into(),
        })?
        .into_domain()
}

/// Counts an internship's completed and total tasks.
///
/// These counters feed progress upserts by external aggregation.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn task_counts_for_internship(
    conn: &mut SqliteConnection,
    internship_id: i64,
) -> Result<(i64, i64), PersistenceError> {
    let total: i64 = tasks::table
        .filter(tasks::internship_id.eq(internship_id))
        .count()
        .get_result(conn)?;

    let completed: i64 = tasks::table
        .filter(tasks::internship_id.eq(internship_id))
        .filter(tasks::status.eq(TaskStatus::Completed.as_str()))
        .count()
        .get_result(conn)?;

    Ok((completed, total))
}
