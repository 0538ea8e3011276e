// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluation aggregation.
//!
//! Scores live on the 0–10 scale. Averages are arithmetic means over
//! non-null scores and an empty set yields no value, never 0.0. Per-teacher
//! statistics bucket positive scores into the four score bands and count
//! completed (positive score) versus pending evaluations.

use std::collections::HashSet;
use std::str::FromStr;
use tracing::info;

use crate::clock::now_timestamp;
use crate::error::{EngineError, translate_domain_error};
use crate::parse::optional_timestamp;
use crate::request_response::{CreateEvaluationRequest, TeacherEvaluationStatistics};
use crate::resolver::{resolve_evaluator, resolve_internship, resolve_student};
use intern_track_domain::{
    Evaluation, EvaluatorType, ScoreBand, derive_overall_score, validate_score,
};
use intern_track_persistence::{NewEvaluation, Persistence};

/// Records an evaluation of an internship.
///
/// The internship is resolved, the evaluator is resolved (a teacher id maps
/// to that teacher's user account), and every supplied score is validated
/// against the scale. When no overall score is supplied it is derived as the
/// mean of the supplied component scores. The evaluation date defaults to
/// now.
///
/// # Errors
///
/// Returns `NotFound` if a referenced entity does not resolve, or
/// `InvalidArgument` on an unparseable type, an out-of-scale score, or a
/// missing evaluator reference.
pub fn create_evaluation(
    persistence: &mut Persistence,
    request: &CreateEvaluationRequest,
) -> Result<Evaluation, EngineError> {
    resolve_internship(persistence, request.internship_id)?;
    let evaluator_user_id =
        resolve_evaluator(persistence, request.teacher_id, request.evaluator_user_id)?;
    let evaluator_type =
        EvaluatorType::from_str(&request.evaluator_type).map_err(translate_domain_error)?;

    let components = [
        request.technical_score,
        request.soft_skill_score,
        request.attitude_score,
        request.communication_score,
    ];
    for score in components.into_iter().flatten() {
        validate_score(score).map_err(translate_domain_error)?;
    }
    let overall_score = match request.overall_score {
        Some(score) => {
            validate_score(score).map_err(translate_domain_error)?;
            Some(score)
        }
        None => derive_overall_score(&components),
    };

    let evaluation_date =
        match optional_timestamp("evaluation_date", request.evaluation_date.as_deref())? {
            Some(ts) => ts,
            None => now_timestamp()?,
        };

    let record = NewEvaluation {
        internship_id: request.internship_id,
        evaluator_user_id,
        evaluator_type: evaluator_type.as_str().to_string(),
        technical_score: request.technical_score,
        soft_skill_score: request.soft_skill_score,
        attitude_score: request.attitude_score,
        communication_score: request.communication_score,
        overall_score,
        is_final_evaluation: i32::from(request.is_final_evaluation),
        evaluation_date,
        strengths: request.strengths.clone(),
        weaknesses: request.weaknesses.clone(),
        recommendations: request.recommendations.clone(),
        comments: request.comments.clone(),
    };

    let evaluation_id = persistence
        .insert_evaluation(&record)
        .map_err(EngineError::store)?;
    info!(
        evaluation_id,
        internship_id = request.internship_id,
        evaluator_type = %evaluator_type,
        "Created evaluation"
    );

    get_evaluation(persistence, evaluation_id)
}

/// Gets an evaluation by id.
///
/// # Errors
///
/// Returns `NotFound` if the evaluation does not exist.
pub fn get_evaluation(
    persistence: &mut Persistence,
    evaluation_id: i64,
) -> Result<Evaluation, EngineError> {
    persistence
        .get_evaluation(evaluation_id)
        .map_err(|e| EngineError::lookup("Evaluation", evaluation_id, e))
}

/// Averages the overall scores of an internship's evaluations.
///
/// Null scores do not contribute; an empty set yields `None`.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not resolve.
pub fn average_score_for_internship(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<Option<f64>, EngineError> {
    resolve_internship(persistence, internship_id)?;
    let scores = persistence
        .overall_scores_for_internship(internship_id)
        .map_err(EngineError::store)?;
    Ok(mean_of(scores))
}

/// Averages the overall scores across all of a student's internships.
///
/// # Errors
///
/// Returns `NotFound` if the student does not resolve.
pub fn average_score_for_student(
    persistence: &mut Persistence,
    student_id: i64,
) -> Result<Option<f64>, EngineError> {
    resolve_student(persistence, student_id)?;
    let scores = persistence
        .overall_scores_for_student(student_id)
        .map_err(EngineError::store)?;
    Ok(mean_of(scores))
}

/// Computes score-band statistics over the evaluations authored by one
/// teacher.
///
/// Only evaluations with a positive overall score are bucketed; the same
/// cut-off partitions the teacher's evaluations into completed and pending.
///
/// # Errors
///
/// Returns `NotFound` if the teacher does not resolve.
pub fn teacher_statistics(
    persistence: &mut Persistence,
    teacher_id: i64,
) -> Result<TeacherEvaluationStatistics, EngineError> {
    let teacher = persistence
        .get_teacher(teacher_id)
        .map_err(|e| EngineError::lookup("Teacher", teacher_id, e))?;
    let scores = persistence
        .overall_scores_by_evaluator(teacher.user_id)
        .map_err(EngineError::store)?;

    let mut statistics = TeacherEvaluationStatistics {
        teacher_id,
        excellent: 0,
        good: 0,
        average: 0,
        poor: 0,
        completed: 0,
        pending: 0,
    };
    for score in &scores {
        match score {
            Some(score) if *score > 0.0 => {
                statistics.completed += 1;
                match ScoreBand::classify(*score) {
                    ScoreBand::Excellent => statistics.excellent += 1,
                    ScoreBand::Good => statistics.good += 1,
                    ScoreBand::Average => statistics.average += 1,
                    ScoreBand::Poor => statistics.poor += 1,
                }
            }
            _ => statistics.pending += 1,
        }
    }

    Ok(statistics)
}

/// Returns the final evaluation per evaluator type for an internship — the
/// set consulted for end-of-term statistics. When an evaluator type has
/// several final evaluations, the most recent wins.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not resolve.
pub fn final_evaluation_summary(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<Vec<Evaluation>, EngineError> {
    resolve_internship(persistence, internship_id)?;
    let finals = persistence
        .final_evaluations_for_internship(internship_id)
        .map_err(EngineError::store)?;

    // Rows arrive most recent first; keep the first per evaluator type.
    let mut seen: HashSet<EvaluatorType> = HashSet::new();
    Ok(finals
        .into_iter()
        .filter(|evaluation| seen.insert(evaluation.evaluator_type))
        .collect())
}

fn mean_of(scores: Vec<Option<f64>>) -> Option<f64> {
    let present: Vec<f64> = scores.into_iter().flatten().collect();
    if present.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = present.iter().sum::<f64>() / present.len() as f64;
    Some(mean)
}
