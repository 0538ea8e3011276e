// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluations and score classification.
//!
//! Scores live on a 0–10 scale. The score bands used for per-teacher
//! statistics are ≥9 excellent, ≥7 good, ≥5 average, below 5 poor.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role producing an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvaluatorType {
    Teacher,
    Mentor,
    Student,
    Department,
}

impl EvaluatorType {
    /// Returns the string representation of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Teacher => "TEACHER",
            Self::Mentor => "MENTOR",
            Self::Student => "STUDENT",
            Self::Department => "DEPARTMENT",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "TEACHER" => Ok(Self::Teacher),
            "MENTOR" => Ok(Self::Mentor),
            "STUDENT" => Ok(Self::Student),
            "DEPARTMENT" => Ok(Self::Department),
            _ => Err(DomainError::InvalidEvaluatorType(s.to_string())),
        }
    }
}

impl FromStr for EvaluatorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for EvaluatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Score bands used when bucketing evaluations for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl ScoreBand {
    /// Classifies an overall score into its band.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= 9.0 {
            Self::Excellent
        } else if score >= 7.0 {
            Self::Good
        } else if score >= 5.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }
}

/// Derives an overall score as the arithmetic mean of the supplied component
/// scores. Absent components do not contribute; all-absent yields `None`.
#[must_use]
pub fn derive_overall_score(components: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = components.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = present.iter().sum::<f64>() / present.len() as f64;
    Some(mean)
}

/// An assessment of an internship by one evaluator.
///
/// An internship may accumulate any number of evaluations; the final
/// evaluation per evaluator type is the one consulted for end-of-term
/// statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub evaluation_id: i64,
    pub internship_id: i64,
    /// The user who produced the evaluation.
    pub evaluator_user_id: i64,
    pub evaluator_type: EvaluatorType,
    pub technical_score: Option<f64>,
    pub soft_skill_score: Option<f64>,
    pub attitude_score: Option<f64>,
    pub communication_score: Option<f64>,
    pub overall_score: Option<f64>,
    pub is_final_evaluation: bool,
    /// RFC 3339 timestamp; defaults to the creation time.
    pub evaluation_date: String,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub recommendations: Option<String>,
    pub comments: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluator_type_round_trip() {
        for kind in [
            EvaluatorType::Teacher,
            EvaluatorType::Mentor,
            EvaluatorType::Student,
            EvaluatorType::Department,
        ] {
            assert_eq!(EvaluatorType::parse_str(kind.as_str()), Ok(kind));
        }
    }

    #[test]
    fn test_invalid_evaluator_type_string() {
        assert!(EvaluatorType::parse_str("COMPANY").is_err());
    }

    #[test]
    fn test_score_band_boundaries() {
        assert_eq!(ScoreBand::classify(10.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::classify(9.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::classify(8.9), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(7.0), ScoreBand::Good);
        assert_eq!(ScoreBand::classify(6.9), ScoreBand::Average);
        assert_eq!(ScoreBand::classify(5.0), ScoreBand::Average);
        assert_eq!(ScoreBand::classify(4.9), ScoreBand::Poor);
        assert_eq!(ScoreBand::classify(0.0), ScoreBand::Poor);
    }

    #[test]
    fn test_derive_overall_score_means_present_components() {
        let overall = derive_overall_score(&[Some(8.0), Some(9.0), None, Some(7.0)]);
        assert_eq!(overall, Some(8.0));
    }

    #[test]
    fn test_derive_overall_score_empty_components() {
        assert_eq!(derive_overall_score(&[None, None, None, None]), None);
        assert_eq!(derive_overall_score(&[]), None);
    }
}
