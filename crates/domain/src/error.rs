// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Internship status string is not a member of the status set.
    InvalidInternshipStatus(String),
    /// Contract status string is not a member of the status set.
    InvalidContractStatus(String),
    /// Payment status string is not a member of the status set.
    InvalidPaymentStatus(String),
    /// Approval status string is not a member of the status set.
    InvalidApprovalStatus(String),
    /// Report status string is not a member of the status set.
    InvalidReportStatus(String),
    /// Report type string is not a member of the type set.
    InvalidReportType(String),
    /// Evaluator type string is not a member of the type set.
    InvalidEvaluatorType(String),
    /// Task status string is not a member of the status set.
    InvalidTaskStatus(String),
    /// Task priority string is not a member of the priority set.
    InvalidTaskPriority(String),
    /// A status transition precondition was violated.
    InvalidStatusTransition {
        /// The entity whose status was being transitioned.
        entity: &'static str,
        /// The current status.
        from: String,
        /// The attempted status.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
    /// A score lies outside the declared scale.
    InvalidScore {
        /// The offending score.
        score: f64,
        /// The inclusive lower bound of the scale.
        min: f64,
        /// The inclusive upper bound of the scale.
        max: f64,
    },
    /// A week number is not a positive week index.
    InvalidWeekNumber {
        /// The offending week number.
        week: i32,
    },
    /// A progress percentage lies outside 0–100.
    InvalidProgressPercent {
        /// The offending value.
        value: f64,
    },
    /// A supplied student contradicts the internship's bound student.
    StudentMismatch {
        /// The student id supplied by the caller.
        supplied: i64,
        /// The student id bound to the internship.
        bound: i64,
    },
    /// Failed to parse a calendar date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a timestamp from a string.
    TimestampParseError {
        /// The invalid timestamp string.
        timestamp_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to format a timestamp for persistence.
    TimestampFormatError {
        /// The formatting error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInternshipStatus(status) => {
                write!(f, "Invalid internship status: '{status}'")
            }
            Self::InvalidContractStatus(status) => {
                write!(f, "Invalid contract status: '{status}'")
            }
            Self::InvalidPaymentStatus(status) => {
                write!(f, "Invalid payment status: '{status}'")
            }
            Self::InvalidApprovalStatus(status) => {
                write!(f, "Invalid approval status: '{status}'")
            }
            Self::InvalidReportStatus(status) => {
                write!(f, "Invalid report status: '{status}'")
            }
            Self::InvalidReportType(kind) => write!(f, "Invalid report type: '{kind}'"),
            Self::InvalidEvaluatorType(kind) => write!(f, "Invalid evaluator type: '{kind}'"),
            Self::InvalidTaskStatus(status) => write!(f, "Invalid task status: '{status}'"),
            Self::InvalidTaskPriority(priority) => {
                write!(f, "Invalid task priority: '{priority}'")
            }
            Self::InvalidStatusTransition {
                entity,
                from,
                to,
                reason,
            } => {
                write!(
                    f,
                    "Invalid {entity} status transition from '{from}' to '{to}': {reason}"
                )
            }
            Self::InvalidScore { score, min, max } => {
                write!(f, "Score {score} is outside the scale {min}–{max}")
            }
            Self::InvalidWeekNumber { week } => {
                write!(f, "Invalid week number: {week}. Must be 1 or greater")
            }
            Self::InvalidProgressPercent { value } => {
                write!(
                    f,
                    "Invalid progress percentage: {value}. Must be between 0 and 100"
                )
            }
            Self::StudentMismatch { supplied, bound } => {
                write!(
                    f,
                    "Student {supplied} does not match the internship's student {bound}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimestampParseError {
                timestamp_string,
                error,
            } => {
                write!(f, "Failed to parse timestamp '{timestamp_string}': {error}")
            }
            Self::TimestampFormatError { error } => {
                write!(f, "Failed to format timestamp: {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
