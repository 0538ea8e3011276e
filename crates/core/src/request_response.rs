// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response structs for the engine's operations.
//!
//! These are the shapes the excluded request layer deserializes into. Enum
//! inputs arrive as strings and are parsed against the fixed enum sets;
//! business dates arrive as ISO calendar dates, timestamps as RFC 3339.

use serde::{Deserialize, Serialize};

/// Request to create an internship. Only the student is required.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateInternshipRequest {
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    pub mentor_id: Option<i64>,
    pub company_id: Option<i64>,
    pub batch_id: Option<i64>,
    /// Unique placement code; generated when absent.
    pub code: Option<String>,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    /// ISO calendar date.
    pub start_date: Option<String>,
    /// ISO calendar date.
    pub end_date: Option<String>,
    pub working_hours_per_week: Option<f64>,
    pub salary: Option<f64>,
    pub notes: Option<String>,
}

/// Explicit partial update of an internship.
///
/// Only the supplied fields are written; everything else is left untouched.
/// This is distinct from a full-replace update.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InternshipPatch {
    /// Parsed against the internship status set; applied unconditionally.
    pub status: Option<String>,
    pub teacher_comment: Option<String>,
    pub teacher_score: Option<f64>,
    pub mentor_comment: Option<String>,
    pub mentor_score: Option<f64>,
    pub final_score: Option<f64>,
    pub notes: Option<String>,
}

/// References to bind during assignment. Unsupplied references are left
/// intact on the internship.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssignInternshipRequest {
    pub company_id: Option<i64>,
    pub student_id: Option<i64>,
    pub mentor_id: Option<i64>,
    pub teacher_id: Option<i64>,
}

/// Request to create a contract, standalone or bound to an internship.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateContractRequest {
    pub internship_id: Option<i64>,
    /// Unique contract code; generated when absent.
    pub code: Option<String>,
    pub title: Option<String>,
    pub terms: Option<String>,
    pub amount: Option<f64>,
    /// Teacher originating a support contract, when any.
    pub created_by_teacher_id: Option<i64>,
}

/// Request to create a report for an internship.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateReportRequest {
    pub internship_id: i64,
    /// Optional; must match the internship's student when supplied.
    pub student_id: Option<i64>,
    pub title: String,
    /// One of WEEKLY, MONTHLY, FINAL.
    pub report_type: String,
    /// Required for weekly reports.
    pub week_number: Option<i32>,
    /// ISO calendar date; defaults to today.
    pub report_date: Option<String>,
    /// RFC 3339; defaults to now.
    pub submitted_at: Option<String>,
    pub comments: Option<String>,
}

/// Request to move a report to a new review status.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateReportStatusRequest {
    /// One of PENDING, APPROVED, REJECTED, DRAFT.
    pub status: String,
    pub feedback: Option<String>,
    pub grade: Option<f64>,
}

/// Request to record an evaluation.
///
/// The evaluator is either a teacher (resolved to that teacher's user) or an
/// explicit user id.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateEvaluationRequest {
    pub internship_id: i64,
    pub teacher_id: Option<i64>,
    pub evaluator_user_id: Option<i64>,
    /// One of TEACHER, MENTOR, STUDENT, DEPARTMENT.
    pub evaluator_type: String,
    pub technical_score: Option<f64>,
    pub soft_skill_score: Option<f64>,
    pub attitude_score: Option<f64>,
    pub communication_score: Option<f64>,
    /// Derived from the component scores when absent.
    pub overall_score: Option<f64>,
    pub is_final_evaluation: bool,
    /// RFC 3339; defaults to now.
    pub evaluation_date: Option<String>,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub recommendations: Option<String>,
    pub comments: Option<String>,
}

/// Per-teacher evaluation statistics.
///
/// Score bands cover only evaluations with a positive overall score;
/// `completed` and `pending` partition the teacher's evaluations by whether
/// a positive score exists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeacherEvaluationStatistics {
    pub teacher_id: i64,
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub poor: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Data for a progress upsert. Omitted fields default on insert and are left
/// untouched on update.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpsertProgressRequest {
    pub total_weeks: Option<i32>,
    pub completed_tasks: Option<i32>,
    pub total_tasks: Option<i32>,
    /// Overall completion in percent, 0–100.
    pub overall_progress: Option<f64>,
    pub accomplishments: Option<String>,
    pub challenges: Option<String>,
    pub next_week_plan: Option<String>,
    /// ISO calendar date.
    pub week_start_date: Option<String>,
    /// ISO calendar date.
    pub week_end_date: Option<String>,
}

/// Request to create a task under an internship.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateTaskRequest {
    pub internship_id: i64,
    pub mentor_id: Option<i64>,
    pub student_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    /// One of LOW, MEDIUM, HIGH, URGENT; defaults to MEDIUM.
    pub priority: Option<String>,
    /// ISO calendar date.
    pub due_date: Option<String>,
}

/// Completed/total task counters for an internship, fed into progress
/// upserts by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskCounts {
    pub completed: i64,
    pub total: i64,
}
