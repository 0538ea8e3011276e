// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Internship status tracking and transition logic.
//!
//! This module defines the internship status set and the rules that guard
//! review transitions. Approval and rejection are strict edges out of
//! `Pending`; assignment, start, and completion overwrite any prior status
//! (department-initiated force transitions). All transitions are
//! caller-initiated; the system never advances status based on time alone.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Internship status states tracking a placement through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InternshipStatus {
    /// Initial state after creation, awaiting review.
    #[default]
    Pending,
    /// Review accepted the placement request.
    Approved,
    /// Review declined the placement request.
    Rejected,
    /// Company/student/mentor/teacher references have been bound.
    Assigned,
    /// The placement is running.
    InProgress,
    /// The placement finished.
    Completed,
    /// The placement was called off.
    Cancelled,
}

impl InternshipStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Assigned => "ASSIGNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "ASSIGNED" => Ok(Self::Assigned),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidInternshipStatus(s.to_string())),
        }
    }

    /// Returns true if this status ends the lifecycle (no path back to review).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Completed)
    }

    /// Validates a review transition (approve or reject).
    ///
    /// Review transitions are only legal while the internship is `Pending`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the current status is
    /// not `Pending`.
    pub fn validate_review_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if *self == Self::Pending {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                entity: "internship",
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "review transitions require status PENDING".to_string(),
            })
        }
    }

    /// Validates a cancellation.
    ///
    /// Cancellation is refused once the lifecycle has ended.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the current status is
    /// terminal.
    pub fn validate_cancel(&self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                entity: "internship",
                from: self.as_str().to_string(),
                to: Self::Cancelled.as_str().to_string(),
                reason: "cannot cancel from terminal state".to_string(),
            });
        }
        Ok(())
    }
}

impl FromStr for InternshipStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for InternshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The root aggregate of the placement workflow.
///
/// An internship links a student to a company/mentor/teacher for a bounded
/// period. Reports, evaluations, tasks, and progress records belong to it and
/// are removed with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub internship_id: i64,
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    pub mentor_id: Option<i64>,
    pub company_id: Option<i64>,
    pub batch_id: Option<i64>,
    /// Unique placement code, generated when the caller supplies none.
    pub code: String,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: InternshipStatus,
    pub working_hours_per_week: Option<f64>,
    pub salary: Option<f64>,
    pub final_score: Option<f64>,
    pub teacher_score: Option<f64>,
    pub mentor_score: Option<f64>,
    pub teacher_comment: Option<String>,
    pub mentor_comment: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            InternshipStatus::Pending,
            InternshipStatus::Approved,
            InternshipStatus::Rejected,
            InternshipStatus::Assigned,
            InternshipStatus::InProgress,
            InternshipStatus::Completed,
            InternshipStatus::Cancelled,
        ];

        for status in statuses {
            let s = status.as_str();
            match InternshipStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = InternshipStatus::parse_str("RUNNING");
        assert!(result.is_err());
    }

    #[test]
    fn test_lowercase_status_string_is_rejected() {
        let result = InternshipStatus::parse_str("pending");
        assert!(result.is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!InternshipStatus::Pending.is_terminal());
        assert!(!InternshipStatus::Approved.is_terminal());
        assert!(!InternshipStatus::Assigned.is_terminal());
        assert!(!InternshipStatus::InProgress.is_terminal());
        assert!(!InternshipStatus::Cancelled.is_terminal());
        assert!(InternshipStatus::Rejected.is_terminal());
        assert!(InternshipStatus::Completed.is_terminal());
    }

    #[test]
    fn test_review_transition_from_pending() {
        let current = InternshipStatus::Pending;

        assert!(
            current
                .validate_review_transition(InternshipStatus::Approved)
                .is_ok()
        );
        assert!(
            current
                .validate_review_transition(InternshipStatus::Rejected)
                .is_ok()
        );
    }

    #[test]
    fn test_review_transition_rejected_off_pending() {
        let non_pending = vec![
            InternshipStatus::Approved,
            InternshipStatus::Rejected,
            InternshipStatus::Assigned,
            InternshipStatus::InProgress,
            InternshipStatus::Completed,
            InternshipStatus::Cancelled,
        ];

        for current in non_pending {
            let result = current.validate_review_transition(InternshipStatus::Approved);
            assert!(matches!(
                result,
                Err(DomainError::InvalidStatusTransition { .. })
            ));
        }
    }

    #[test]
    fn test_cancel_refused_from_terminal_states() {
        assert!(InternshipStatus::Completed.validate_cancel().is_err());
        assert!(InternshipStatus::Rejected.validate_cancel().is_err());
    }

    #[test]
    fn test_cancel_allowed_from_active_states() {
        assert!(InternshipStatus::Pending.validate_cancel().is_ok());
        assert!(InternshipStatus::Approved.validate_cancel().is_ok());
        assert!(InternshipStatus::Assigned.validate_cancel().is_ok());
        assert!(InternshipStatus::InProgress.validate_cancel().is_ok());
    }
}
