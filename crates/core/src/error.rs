// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the workflow engine.
//!
//! Every engine operation fails synchronously with one of these kinds; none
//! are retried internally, and a failed operation leaves prior state
//! unchanged. The excluded request layer translates the kinds into
//! user-facing responses.

use intern_track_domain::DomainError;
use intern_track_persistence::PersistenceError;

/// Engine-level errors.
///
/// These are distinct from domain/persistence errors and represent the
/// engine's contract with its callers.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A referenced id did not resolve.
    NotFound {
        /// The kind of resource that was not found.
        resource: &'static str,
        /// The id that failed to resolve.
        id: i64,
    },
    /// A status precondition was violated.
    InvalidTransition {
        /// The entity whose status was being transitioned.
        entity: &'static str,
        /// The current status.
        from: String,
        /// The attempted status.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
    /// Malformed input: a bad enum, number, date, or a supplied relationship
    /// that contradicts an existing one.
    InvalidArgument {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A uniqueness violation on a generated or caller-supplied code.
    Conflict {
        /// The kind of resource whose code collided.
        resource: &'static str,
        /// The colliding code.
        code: String,
    },
    /// An internal store fault surfaced through the engine.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => write!(f, "{resource} {id} not found"),
            Self::InvalidTransition {
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
            Self::InvalidArgument { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Conflict { resource, code } => {
                write!(f, "{resource} code '{code}' is already in use")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Maps a persistence failure from a lookup of one specific record.
    pub(crate) fn lookup(resource: &'static str, id: i64, err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound(_) => Self::NotFound { resource, id },
            other => Self::store(other),
        }
    }

    /// Maps a persistence failure from an insert or update guarded by a
    /// unique code.
    pub(crate) fn code_write(resource: &'static str, code: &str, err: PersistenceError) -> Self {
        match err {
            PersistenceError::UniqueViolation(_) => Self::Conflict {
                resource,
                code: code.to_string(),
            },
            other => Self::store(other),
        }
    }

    /// Maps an unexpected persistence failure.
    pub(crate) fn store(err: PersistenceError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an engine error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly to callers.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> EngineError {
    match err {
        DomainError::InvalidInternshipStatus(msg)
        | DomainError::InvalidContractStatus(msg)
        | DomainError::InvalidPaymentStatus(msg)
        | DomainError::InvalidApprovalStatus(msg)
        | DomainError::InvalidReportStatus(msg)
        | DomainError::InvalidTaskStatus(msg) => EngineError::InvalidArgument {
            field: String::from("status"),
            message: format!("'{msg}' is not a member of the status set"),
        },
        DomainError::InvalidReportType(msg) => EngineError::InvalidArgument {
            field: String::from("report_type"),
            message: format!("'{msg}' is not a member of the type set"),
        },
        DomainError::InvalidEvaluatorType(msg) => EngineError::InvalidArgument {
            field: String::from("evaluator_type"),
            message: format!("'{msg}' is not a member of the type set"),
        },
        DomainError::InvalidTaskPriority(msg) => EngineError::InvalidArgument {
            field: String::from("priority"),
            message: format!("'{msg}' is not a member of the priority set"),
        },
        DomainError::InvalidStatusTransition {
            entity,
            from,
            to,
            reason,
        } => EngineError::InvalidTransition {
            entity,
            from,
            to,
            reason,
        },
        DomainError::InvalidScore { score, min, max } => EngineError::InvalidArgument {
            field: String::from("score"),
            message: format!("Score {score} is outside the scale {min}–{max}"),
        },
        DomainError::InvalidWeekNumber { week } => EngineError::InvalidArgument {
            field: String::from("week_number"),
            message: format!("Invalid week number: {week}. Must be 1 or greater"),
        },
        DomainError::InvalidProgressPercent { value } => EngineError::InvalidArgument {
            field: String::from("overall_progress"),
            message: format!("Invalid progress percentage: {value}. Must be between 0 and 100"),
        },
        DomainError::StudentMismatch { supplied, bound } => EngineError::InvalidArgument {
            field: String::from("student_id"),
            message: format!("Student {supplied} does not match the internship's student {bound}"),
        },
        DomainError::DateParseError { date_string, error } => EngineError::InvalidArgument {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::TimestampParseError {
            timestamp_string,
            error,
        } => EngineError::InvalidArgument {
            field: String::from("timestamp"),
            message: format!("Failed to parse timestamp '{timestamp_string}': {error}"),
        },
        DomainError::TimestampFormatError { error } => EngineError::Internal {
            message: format!("Failed to format timestamp: {error}"),
        },
    }
}
