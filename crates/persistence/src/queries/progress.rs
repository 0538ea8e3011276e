// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Progress record queries.

use diesel::prelude::*;

use crate::data_models::ProgressRow;
use crate::diesel_schema::progress_records;
use crate::error::PersistenceError;
use intern_track_domain::InternshipProgress;

/// Gets the progress row for one (internship, week), when any.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is invalid.
pub fn progress_for_week(
    conn: &mut SqliteConnection,
    internship_id: i64,
    current_week: i32,
) -> Result<Option<InternshipProgress>, PersistenceError> {
    progress_records::table
        .filter(progress_records::internship_id.eq(internship_id))
        .filter(progress_records::current_week.eq(current_week))
        .first::<ProgressRow>(conn)
        .optional()?
        .map(ProgressRow::into_domain)
        .transpose()
}

/// Gets the progress row with the highest week for an internship.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is invalid.
pub fn latest_for_internship(
    conn: &mut SqliteConnection,
    internship_id: i64,
) -> Result<Option<InternshipProgress>, PersistenceError> {
    progress_records::table
        .filter(progress_records::internship_id.eq(internship_id))
        .order(progress_records::current_week.desc())
        .first::<ProgressRow>(conn)
        .optional()?
        .map(ProgressRow::into_domain)
        .transpose()
}

/// Loads the overall progress values of all progress rows belonging to the
/// given internships.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn progress_values_for_internships(
    conn: &mut SqliteConnection,
    internship_ids: &[i64],
) -> Result<Vec<f64>, PersistenceError> {
    progress_records::table
        .filter(progress_records::internship_id.eq_any(internship_ids.iter().copied()))
        .select(progress_records::overall_progress)
        .load::<f64>(conn)
        .map_err(Into::into)
}
