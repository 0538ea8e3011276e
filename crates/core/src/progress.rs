// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Progress tracking.
//!
//! At most one progress snapshot exists per (internship, week). Writes are
//! upserts keyed by week: an existing row is overwritten in place, a missing
//! one is created with defaults for omitted fields. Mentor averages follow
//! the same empty-set convention as evaluation averages: no rows, no value.

use tracing::info;

use crate::error::{EngineError, translate_domain_error};
use crate::parse::optional_business_date;
use crate::request_response::UpsertProgressRequest;
use crate::resolver::{resolve_internship, resolve_mentor};
use intern_track_domain::{
    DEFAULT_TOTAL_WEEKS, InternshipProgress, validate_progress_percent, validate_week_number,
};
use intern_track_persistence::{NewProgress, Persistence, ProgressChangeset};

/// Upserts the progress snapshot for one (internship, week).
///
/// When a row for the week exists its supplied fields are overwritten in
/// place; otherwise a new row is created, defaulting total weeks to 12 and
/// the counters and progress to zero for any field the caller omits.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not resolve, or
/// `InvalidArgument` on a non-positive week or an out-of-range progress
/// percentage.
pub fn upsert_progress_by_week(
    persistence: &mut Persistence,
    internship_id: i64,
    week: i32,
    request: &UpsertProgressRequest,
) -> Result<InternshipProgress, EngineError> {
    resolve_internship(persistence, internship_id)?;
    validate_week_number(week).map_err(translate_domain_error)?;
    if let Some(value) = request.overall_progress {
        validate_progress_percent(value).map_err(translate_domain_error)?;
    }

    let week_start_date =
        optional_business_date("week_start_date", request.week_start_date.as_deref())?;
    let week_end_date = optional_business_date("week_end_date", request.week_end_date.as_deref())?;

    let existing = persistence
        .progress_for_week(internship_id, week)
        .map_err(EngineError::store)?;

    match existing {
        Some(row) => {
            let changeset = ProgressChangeset {
                total_weeks: request.total_weeks,
                completed_tasks: request.completed_tasks,
                total_tasks: request.total_tasks,
                overall_progress: request.overall_progress,
                accomplishments: request.accomplishments.clone(),
                challenges: request.challenges.clone(),
                next_week_plan: request.next_week_plan.clone(),
                week_start_date,
                week_end_date,
            };
            if changeset.has_changes() {
                persistence
                    .update_progress(row.progress_id, &changeset)
                    .map_err(EngineError::store)?;
                info!(internship_id, week, "Updated progress snapshot");
            }
        }
        None => {
            let record = NewProgress {
                internship_id,
                current_week: week,
                total_weeks: request.total_weeks.unwrap_or(DEFAULT_TOTAL_WEEKS),
                completed_tasks: request.completed_tasks.unwrap_or(0),
                total_tasks: request.total_tasks.unwrap_or(0),
                overall_progress: request.overall_progress.unwrap_or(0.0),
                accomplishments: request.accomplishments.clone(),
                challenges: request.challenges.clone(),
                next_week_plan: request.next_week_plan.clone(),
                week_start_date,
                week_end_date,
            };
            persistence
                .insert_progress(&record)
                .map_err(EngineError::store)?;
            info!(internship_id, week, "Created progress snapshot");
        }
    }

    persistence
        .progress_for_week(internship_id, week)
        .map_err(EngineError::store)?
        .ok_or_else(|| EngineError::Internal {
            message: format!(
                "progress row for internship {internship_id} week {week} vanished after write"
            ),
        })
}

/// Gets the most recent progress snapshot (highest week) for an internship.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not resolve or it has no
/// progress rows yet.
pub fn latest_progress(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<InternshipProgress, EngineError> {
    resolve_internship(persistence, internship_id)?;
    persistence
        .latest_progress_for_internship(internship_id)
        .map_err(EngineError::store)?
        .ok_or(EngineError::NotFound {
            resource: "Progress for internship",
            id: internship_id,
        })
}

/// Averages overall progress across all progress rows of a mentor's
/// internships. An empty set yields `None`.
///
/// # Errors
///
/// Returns `NotFound` if the mentor does not resolve.
pub fn average_progress_for_mentor(
    persistence: &mut Persistence,
    mentor_id: i64,
) -> Result<Option<f64>, EngineError> {
    resolve_mentor(persistence, mentor_id)?;

    let internship_ids = persistence
        .internship_ids_for_mentor(mentor_id)
        .map_err(EngineError::store)?;
    if internship_ids.is_empty() {
        return Ok(None);
    }

    let values = persistence
        .progress_values_for_internships(&internship_ids)
        .map_err(EngineError::store)?;
    if values.is_empty() {
        return Ok(None);
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Ok(Some(mean))
}
