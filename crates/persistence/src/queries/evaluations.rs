// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluation queries feeding the aggregation component.

use diesel::prelude::*;

use crate::data_models::EvaluationRow;
use crate::diesel_schema::{evaluations, internships};
use crate::error::PersistenceError;
use intern_track_domain::Evaluation;

/// Gets an evaluation by id.
///
/// # Errors
///
/// Returns `NotFound` if the evaluation does not exist, or `DecodeFailed` if
/// the stored row is invalid.
pub fn get_evaluation(
    conn: &mut SqliteConnection,
    evaluation_id: i64,
) -> Result<Evaluation, PersistenceError> {
    evaluations::table
        .find(evaluation_id)
        .first::<EvaluationRow>(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Evaluation {evaluation_id} not found"))
            }
            other => other.into(),
        })?
        .into_domain()
}

/// Loads the overall scores of all evaluations for an internship, including
/// the null ones (the aggregator decides what to exclude).
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn overall_scores_for_internship(
    conn: &mut SqliteConnection,
    internship_id: i64,
) -> Result<Vec<Option<f64>>, PersistenceError> {
    evaluations::table
        .filter(evaluations::internship_id.eq(internship_id))
        .select(evaluations::overall_score)
        .load::<Option<f64>>(conn)
        .map_err(Into::into)
}

/// Loads the overall scores of all evaluations across a student's
/// internships.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn overall_scores_for_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Vec<Option<f64>>, PersistenceError> {
    let student_internships = internships::table
        .filter(internships::student_id.eq(student_id))
        .select(internships::internship_id);

    evaluations::table
        .filter(evaluations::internship_id.eq_any(student_internships))
        .select(evaluations::overall_score)
        .load::<Option<f64>>(conn)
        .map_err(Into::into)
}

/// Loads the overall scores of all evaluations authored by one evaluator
/// user.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn overall_scores_by_evaluator(
    conn: &mut SqliteConnection,
    evaluator_user_id: i64,
) -> Result<Vec<Option<f64>>, PersistenceError> {
    evaluations::table
        .filter(evaluations::evaluator_user_id.eq(evaluator_user_id))
        .select(evaluations::overall_score)
        .load::<Option<f64>>(conn)
        .map_err(Into::into)
}

/// Loads the final evaluations of an internship, most recent first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn final_evaluations_for_internship(
    conn: &mut SqliteConnection,
    internship_id: i64,
) -> Result<Vec<Evaluation>, PersistenceError> {
    let rows = evaluations::table
        .filter(evaluations::internship_id.eq(internship_id))
        .filter(evaluations::is_final_evaluation.eq(1))
        .order(evaluations::evaluation_date.desc())
        .load::<EvaluationRow>(conn)?;

    rows.into_iter().map(EvaluationRow::into_domain).collect()
}
