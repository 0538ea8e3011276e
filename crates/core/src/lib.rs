// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow engine for the internship tracking system.
//!
//! This crate coordinates the four dependent record kinds of a placement —
//! assignment, contract, reports, evaluations — through their status state
//! machines. Operations take already-authenticated, already-authorized
//! primitive arguments; the engine performs existence and precondition
//! checks only. Every operation is synchronous: it resolves referenced ids,
//! validates the transition, performs a single persisting write, and
//! re-reads the result. Failures are `EngineError`s and leave prior state
//! unchanged.
//!
//! HTTP routing, authentication, pagination, file handling, and outbound
//! email live in an excluded request layer that consumes this crate.

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
#![allow(clippy::multiple_crate_versions)]

mod assignment;
mod clock;
mod codes;
mod contract;
mod error;
mod evaluation;
mod internship;
mod parse;
mod progress;
mod report;
mod request_response;
mod resolver;
mod task;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use assignment::assign_internship;
pub use codes::{
    CONTRACT_CODE_PREFIX, CodeGenerator, INTERNSHIP_CODE_PREFIX, SequenceCodeGenerator,
};
pub use contract::{
    activate_contract, approve_contract, create_contract, expire_contract, get_contract,
    reject_contract, send_contract, sign_contract, terminate_contract, update_contract_code,
    update_contract_status, update_payment_status,
};
pub use error::{EngineError, translate_domain_error};
pub use evaluation::{
    average_score_for_internship, average_score_for_student, create_evaluation,
    final_evaluation_summary, get_evaluation, teacher_statistics,
};
pub use internship::{
    approve_internship, cancel_internship, complete_internship, create_internship,
    delete_internship, get_internship, reject_internship, start_internship, update_internship,
};
pub use progress::{average_progress_for_mentor, latest_progress, upsert_progress_by_week};
pub use report::{
    can_submit_weekly_report, create_report, get_report, next_week_number,
    review_report_by_mentor, review_report_by_teacher, update_report_status,
};
pub use request_response::{
    AssignInternshipRequest, CreateContractRequest, CreateEvaluationRequest,
    CreateInternshipRequest, CreateReportRequest, CreateTaskRequest, InternshipPatch, TaskCounts,
    TeacherEvaluationStatistics, UpdateReportStatusRequest, UpsertProgressRequest,
};
pub use resolver::{
    resolve_batch, resolve_company, resolve_evaluator, resolve_internship, resolve_mentor,
    resolve_student, resolve_teacher,
};
pub use task::{create_task, get_task, task_counts, update_task_status};
