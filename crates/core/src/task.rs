// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Task operations.
//!
//! Tasks belong to an internship and optionally to a mentor and student.
//! Completion counters are aggregated on demand and fed into progress
//! upserts by the caller; nothing here writes progress rows.

use std::str::FromStr;
use tracing::info;

use crate::clock::now_timestamp;
use crate::error::{EngineError, translate_domain_error};
use crate::parse::optional_business_date;
use crate::request_response::{CreateTaskRequest, TaskCounts};
use crate::resolver::{resolve_internship, resolve_mentor, resolve_student};
use intern_track_domain::{Task, TaskPriority, TaskStatus};
use intern_track_persistence::{NewTask, Persistence};

/// Creates a task under an internship.
///
/// # Errors
///
/// Returns `NotFound` if a referenced entity does not resolve, or
/// `InvalidArgument` on an unparseable priority or date.
pub fn create_task(
    persistence: &mut Persistence,
    request: &CreateTaskRequest,
) -> Result<Task, EngineError> {
    resolve_internship(persistence, request.internship_id)?;
    if let Some(mentor_id) = request.mentor_id {
        resolve_mentor(persistence, mentor_id)?;
    }
    if let Some(student_id) = request.student_id {
        resolve_student(persistence, student_id)?;
    }

    let priority = request
        .priority
        .as_deref()
        .map(TaskPriority::from_str)
        .transpose()
        .map_err(translate_domain_error)?
        .unwrap_or_default();

    let record = NewTask {
        internship_id: request.internship_id,
        mentor_id: request.mentor_id,
        student_id: request.student_id,
        title: request.title.clone(),
        description: request.description.clone(),
        status: TaskStatus::Pending.as_str().to_string(),
        priority: priority.as_str().to_string(),
        due_date: optional_business_date("due_date", request.due_date.as_deref())?,
    };

    let task_id = persistence.insert_task(&record).map_err(EngineError::store)?;
    info!(task_id, internship_id = request.internship_id, "Created task");

    get_task(persistence, task_id)
}

/// Gets a task by id.
///
/// # Errors
///
/// Returns `NotFound` if the task does not exist.
pub fn get_task(persistence: &mut Persistence, task_id: i64) -> Result<Task, EngineError> {
    persistence
        .get_task(task_id)
        .map_err(|e| EngineError::lookup("Task", task_id, e))
}

/// Moves a task to a new status.
///
/// Entering COMPLETED stamps the completion time; any other status clears
/// it.
///
/// # Errors
///
/// Returns `NotFound` if the task does not exist, or `InvalidArgument` on an
/// unparseable status string.
pub fn update_task_status(
    persistence: &mut Persistence,
    task_id: i64,
    status: &str,
) -> Result<Task, EngineError> {
    let parsed = TaskStatus::from_str(status).map_err(translate_domain_error)?;
    let _ = get_task(persistence, task_id)?;

    let completed_at = if parsed == TaskStatus::Completed {
        Some(now_timestamp()?)
    } else {
        None
    };

    persistence
        .update_task_status(task_id, parsed.as_str(), completed_at)
        .map_err(|e| EngineError::lookup("Task", task_id, e))?;
    info!(task_id, status = %parsed, "Task status updated");

    get_task(persistence, task_id)
}

/// Counts an internship's completed and total tasks.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not resolve.
pub fn task_counts(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<TaskCounts, EngineError> {
    resolve_internship(persistence, internship_id)?;
    let (completed, total) = persistence
        .task_counts_for_internship(internship_id)
        .map_err(EngineError::store)?;
    Ok(TaskCounts { completed, total })
}
