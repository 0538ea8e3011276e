// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rule validation for the internship tracking system.
//!
//! This crate owns the entities of the placement workflow (internships,
//! contracts, reports, evaluations, progress records, tasks), their status
//! state machines, and the pure validation rules that guard them. It performs
//! no I/O; the persistence and engine crates build on top of it.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod contract;
mod dates;
mod error;
mod evaluation;
mod internship;
mod progress;
mod report;
mod task;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use contract::{ApprovalStatus, Contract, ContractStatus, PaymentStatus};
pub use dates::{format_date, format_timestamp, parse_date, parse_timestamp};
pub use error::DomainError;
pub use evaluation::{Evaluation, EvaluatorType, ScoreBand, derive_overall_score};
pub use internship::{Internship, InternshipStatus};
pub use progress::{DEFAULT_TOTAL_WEEKS, InternshipProgress};
pub use report::{Report, ReportStatus, ReportType};
pub use task::{Task, TaskPriority, TaskStatus};
pub use validation::{
    SCORE_MAX, SCORE_MIN, validate_progress_percent, validate_score, validate_week_number,
};
