// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure validation rules shared by the engine's operations.

use crate::error::DomainError;

/// Inclusive lower bound of the evaluation score scale.
pub const SCORE_MIN: f64 = 0.0;

/// Inclusive upper bound of the evaluation score scale.
pub const SCORE_MAX: f64 = 10.0;

/// Validates that a score lies on the 0–10 scale.
///
/// Used for evaluation component and overall scores, report grades, and
/// internship teacher/mentor/final scores.
///
/// # Errors
///
/// Returns `DomainError::InvalidScore` if the score is out of bounds or not
/// a finite number.
pub fn validate_score(score: f64) -> Result<(), DomainError> {
    if !score.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&score) {
        return Err(DomainError::InvalidScore {
            score,
            min: SCORE_MIN,
            max: SCORE_MAX,
        });
    }
    Ok(())
}

/// Validates that a week number is a positive week index.
///
/// # Errors
///
/// Returns `DomainError::InvalidWeekNumber` if the week is less than 1.
pub fn validate_week_number(week: i32) -> Result<(), DomainError> {
    if week < 1 {
        return Err(DomainError::InvalidWeekNumber { week });
    }
    Ok(())
}

/// Validates that a progress percentage lies within 0–100.
///
/// # Errors
///
/// Returns `DomainError::InvalidProgressPercent` if the value is out of
/// bounds or not a finite number.
pub fn validate_progress_percent(value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(DomainError::InvalidProgressPercent { value });
    }
    Ok(())
}
