// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs bridging the relational store and the domain entities.
//!
//! Each workflow table has a `*Row` struct matching its column order, a
//! `New*` struct for inserts, and where partial updates exist an
//! `*Changeset` struct whose `None` fields are left untouched. Statuses and
//! dates are stored as text; decoding them back into domain types can fail
//! only on a corrupted store and surfaces as `DecodeFailed`.

use diesel::prelude::*;
use std::str::FromStr;
use time::Date;

use crate::diesel_schema::{
    batches, companies, contracts, evaluations, internships, mentors, progress_records, reports,
    students, tasks, teachers, users,
};
use crate::error::PersistenceError;
use intern_track_domain::{
    ApprovalStatus, Contract, ContractStatus, Evaluation, EvaluatorType, Internship,
    InternshipProgress, InternshipStatus, PaymentStatus, Report, ReportStatus, ReportType, Task,
    TaskPriority, TaskStatus, parse_date,
};

fn decode_date(column: &str, value: Option<String>) -> Result<Option<Date>, PersistenceError> {
    value
        .map(|s| {
            parse_date(&s).map_err(|e| PersistenceError::DecodeFailed(format!("{column}: {e}")))
        })
        .transpose()
}

fn decode_status<T: FromStr>(column: &str, value: &str) -> Result<T, PersistenceError>
where
    T::Err: std::fmt::Display,
{
    T::from_str(value).map_err(|e| PersistenceError::DecodeFailed(format!("{column}: {e}")))
}

/// Stored representation of a user account.
#[derive(Debug, Clone, Queryable)]
pub struct UserRecord {
    pub user_id: i64,
    pub display_name: String,
    pub email: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub display_name: String,
    pub email: Option<String>,
    pub role: String,
}

/// Stored representation of a student.
#[derive(Debug, Clone, Queryable)]
pub struct StudentRecord {
    pub student_id: i64,
    pub user_id: Option<i64>,
    pub full_name: String,
    pub email: Option<String>,
    pub student_number: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub struct NewStudent {
    pub user_id: Option<i64>,
    pub full_name: String,
    pub email: Option<String>,
    pub student_number: Option<String>,
}

/// Stored representation of a teacher. The `user_id` is the account the
/// evaluation path resolves when an evaluation arrives by teacher id.
#[derive(Debug, Clone, Queryable)]
pub struct TeacherRecord {
    pub teacher_id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = teachers)]
pub struct NewTeacher {
    pub user_id: i64,
    pub full_name: String,
    pub department: Option<String>,
}

/// Stored representation of a mentor.
#[derive(Debug, Clone, Queryable)]
pub struct MentorRecord {
    pub mentor_id: i64,
    pub company_id: Option<i64>,
    pub full_name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = mentors)]
pub struct NewMentor {
    pub company_id: Option<i64>,
    pub full_name: String,
    pub email: Option<String>,
}

/// Stored representation of a company.
#[derive(Debug, Clone, Queryable)]
pub struct CompanyRecord {
    pub company_id: i64,
    pub name: String,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = companies)]
pub struct NewCompany {
    pub name: String,
    pub city: Option<String>,
}

/// Stored representation of a cohort batch.
#[derive(Debug, Clone, Queryable)]
pub struct BatchRecord {
    pub batch_id: i64,
    pub name: String,
    pub registration_start: Option<String>,
    pub registration_end: Option<String>,
    pub execution_start: Option<String>,
    pub execution_end: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = batches)]
pub struct NewBatch {
    pub name: String,
    pub registration_start: Option<String>,
    pub registration_end: Option<String>,
    pub execution_start: Option<String>,
    pub execution_end: Option<String>,
}

/// Full internship row in table column order.
#[derive(Debug, Clone, Queryable)]
pub struct InternshipRow {
    pub internship_id: i64,
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    pub mentor_id: Option<i64>,
    pub company_id: Option<i64>,
    pub batch_id: Option<i64>,
    pub code: String,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
    pub working_hours_per_week: Option<f64>,
    pub salary: Option<f64>,
    pub final_score: Option<f64>,
    pub teacher_score: Option<f64>,
    pub mentor_score: Option<f64>,
    pub teacher_comment: Option<String>,
    pub mentor_comment: Option<String>,
    pub notes: Option<String>,
}

impl InternshipRow {
    /// Decodes the row into the domain entity.
    ///
    /// # Errors
    ///
    /// Returns `DecodeFailed` if a stored status or date is invalid.
    pub fn into_domain(self) -> Result<Internship, PersistenceError> {
        Ok(Internship {
            internship_id: self.internship_id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            mentor_id: self.mentor_id,
            company_id: self.company_id,
            batch_id: self.batch_id,
            code: self.code,
            job_title: self.job_title,
            job_description: self.job_description,
            start_date: decode_date("internships.start_date", self.start_date)?,
            end_date: decode_date("internships.end_date", self.end_date)?,
            status: decode_status::<InternshipStatus>("internships.status", &self.status)?,
            working_hours_per_week: self.working_hours_per_week,
            salary: self.salary,
            final_score: self.final_score,
            teacher_score: self.teacher_score,
            mentor_score: self.mentor_score,
            teacher_comment: self.teacher_comment,
            mentor_comment: self.mentor_comment,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = internships)]
pub struct NewInternship {
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    pub mentor_id: Option<i64>,
    pub company_id: Option<i64>,
    pub batch_id: Option<i64>,
    pub code: String,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
    pub working_hours_per_week: Option<f64>,
    pub salary: Option<f64>,
    pub notes: Option<String>,
}

/// Partial update of an internship; `None` fields are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = internships)]
pub struct InternshipChangeset {
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub mentor_id: Option<i64>,
    pub company_id: Option<i64>,
    pub batch_id: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub final_score: Option<f64>,
    pub teacher_score: Option<f64>,
    pub mentor_score: Option<f64>,
    pub teacher_comment: Option<String>,
    pub mentor_comment: Option<String>,
    pub notes: Option<String>,
}

impl InternshipChangeset {
    /// Returns true if applying the changeset would write at least one column.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.student_id.is_some()
            || self.teacher_id.is_some()
            || self.mentor_id.is_some()
            || self.company_id.is_some()
            || self.batch_id.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.status.is_some()
            || self.final_score.is_some()
            || self.teacher_score.is_some()
            || self.mentor_score.is_some()
            || self.teacher_comment.is_some()
            || self.mentor_comment.is_some()
            || self.notes.is_some()
    }
}

/// Full contract row in table column order.
#[derive(Debug, Clone, Queryable)]
pub struct ContractRow {
    pub contract_id: i64,
    pub internship_id: Option<i64>,
    pub code: String,
    pub title: Option<String>,
    pub terms: Option<String>,
    pub amount: Option<f64>,
    pub status: String,
    pub payment_status: String,
    pub approval_status: String,
    pub signed_date: Option<String>,
    pub payment_date: Option<String>,
    pub approval_date: Option<String>,
    pub approved_by_teacher_id: Option<i64>,
    pub created_by_teacher_id: Option<i64>,
}

impl ContractRow {
    /// Decodes the row into the domain entity.
    ///
    /// # Errors
    ///
    /// Returns `DecodeFailed` if a stored status or date is invalid.
    pub fn into_domain(self) -> Result<Contract, PersistenceError> {
        Ok(Contract {
            contract_id: self.contract_id,
            internship_id: self.internship_id,
            code: self.code,
            title: self.title,
            terms: self.terms,
            amount: self.amount,
            status: decode_status::<ContractStatus>("contracts.status", &self.status)?,
            payment_status: decode_status::<PaymentStatus>(
                "contracts.payment_status",
                &self.payment_status,
            )?,
            approval_status: decode_status::<ApprovalStatus>(
                "contracts.approval_status",
                &self.approval_status,
            )?,
            signed_date: decode_date("contracts.signed_date", self.signed_date)?,
            payment_date: decode_date("contracts.payment_date", self.payment_date)?,
            approval_date: decode_date("contracts.approval_date", self.approval_date)?,
            approved_by_teacher_id: self.approved_by_teacher_id,
            created_by_teacher_id: self.created_by_teacher_id,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contracts)]
pub struct NewContract {
    pub internship_id: Option<i64>,
    pub code: String,
    pub title: Option<String>,
    pub terms: Option<String>,
    pub amount: Option<f64>,
    pub status: String,
    pub payment_status: String,
    pub approval_status: String,
    pub created_by_teacher_id: Option<i64>,
}

/// Partial update of a contract; `None` fields are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = contracts)]
pub struct ContractChangeset {
    pub code: Option<String>,
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub approval_status: Option<String>,
    pub signed_date: Option<String>,
    pub payment_date: Option<String>,
    pub approval_date: Option<String>,
    pub approved_by_teacher_id: Option<i64>,
}

impl ContractChangeset {
    /// Returns true if applying the changeset would write at least one column.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.code.is_some()
            || self.status.is_some()
            || self.payment_status.is_some()
            || self.approval_status.is_some()
            || self.signed_date.is_some()
            || self.payment_date.is_some()
            || self.approval_date.is_some()
            || self.approved_by_teacher_id.is_some()
    }
}

/// Full report row in table column order.
#[derive(Debug, Clone, Queryable)]
pub struct ReportRow {
    pub report_id: i64,
    pub internship_id: i64,
    pub title: String,
    pub report_type: String,
    pub week_number: Option<i32>,
    pub status: String,
    pub report_date: Option<String>,
    pub submitted_at: Option<String>,
    pub reviewed_at: Option<String>,
    pub grade: Option<f64>,
    pub is_approved_by_teacher: i32,
    pub is_approved_by_mentor: i32,
    pub feedback: Option<String>,
    pub comments: Option<String>,
}

impl ReportRow {
    /// Decodes the row into the domain entity.
    ///
    /// # Errors
    ///
    /// Returns `DecodeFailed` if a stored status, type, or date is invalid.
    pub fn into_domain(self) -> Result<Report, PersistenceError> {
        Ok(Report {
            report_id: self.report_id,
            internship_id: self.internship_id,
            title: self.title,
            report_type: decode_status::<ReportType>("reports.report_type", &self.report_type)?,
            week_number: self.week_number,
            status: decode_status::<ReportStatus>("reports.status", &self.status)?,
            report_date: decode_date("reports.report_date", self.report_date)?,
            submitted_at: self.submitted_at,
            reviewed_at: self.reviewed_at,
            grade: self.grade,
            is_approved_by_teacher: self.is_approved_by_teacher != 0,
            is_approved_by_mentor: self.is_approved_by_mentor != 0,
            feedback: self.feedback,
            comments: self.comments,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reports)]
pub struct NewReport {
    pub internship_id: i64,
    pub title: String,
    pub report_type: String,
    pub week_number: Option<i32>,
    pub status: String,
    pub report_date: Option<String>,
    pub submitted_at: Option<String>,
    pub comments: Option<String>,
}

/// Partial update of a report's review state; `None` fields are untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = reports)]
pub struct ReportChangeset {
    pub status: Option<String>,
    pub reviewed_at: Option<String>,
    pub grade: Option<f64>,
    pub is_approved_by_teacher: Option<i32>,
    pub is_approved_by_mentor: Option<i32>,
    pub feedback: Option<String>,
}

impl ReportChangeset {
    /// Returns true if applying the changeset would write at least one column.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.status.is_some()
            || self.reviewed_at.is_some()
            || self.grade.is_some()
            || self.is_approved_by_teacher.is_some()
            || self.is_approved_by_mentor.is_some()
            || self.feedback.is_some()
    }
}

/// Full evaluation row in table column order.
#[derive(Debug, Clone, Queryable)]
pub struct EvaluationRow {
    pub evaluation_id: i64,
    pub internship_id: i64,
    pub evaluator_user_id: i64,
    pub evaluator_type: String,
    pub technical_score: Option<f64>,
    pub soft_skill_score: Option<f64>,
    pub attitude_score: Option<f64>,
    pub communication_score: Option<f64>,
    pub overall_score: Option<f64>,
    pub is_final_evaluation: i32,
    pub evaluation_date: String,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub recommendations: Option<String>,
    pub comments: Option<String>,
}

impl EvaluationRow {
    /// Decodes the row into the domain entity.
    ///
    /// # Errors
    ///
    /// Returns `DecodeFailed` if the stored evaluator type is invalid.
    pub fn into_domain(self) -> Result<Evaluation, PersistenceError> {
        Ok(Evaluation {
            evaluation_id: self.evaluation_id,
            internship_id: self.internship_id,
            evaluator_user_id: self.evaluator_user_id,
            evaluator_type: decode_status::<EvaluatorType>(
                "evaluations.evaluator_type",
                &self.evaluator_type,
            )?,
            technical_score: self.technical_score,
            soft_skill_score: self.soft_skill_score,
            attitude_score: self.attitude_score,
            communication_score: self.communication_score,
            overall_score: self.overall_score,
            is_final_evaluation: self.is_final_evaluation != 0,
            evaluation_date: self.evaluation_date,
            strengths: self.strengths,
            weaknesses: self.weaknesses,
            recommendations: self.recommendations,
            comments: self.comments,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = evaluations)]
pub struct NewEvaluation {
    pub internship_id: i64,
    pub evaluator_user_id: i64,
    pub evaluator_type: String,
    pub technical_score: Option<f64>,
    pub soft_skill_score: Option<f64>,
    pub attitude_score: Option<f64>,
    pub communication_score: Option<f64>,
    pub overall_score: Option<f64>,
    pub is_final_evaluation: i32,
    pub evaluation_date: String,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub recommendations: Option<String>,
    pub comments: Option<String>,
}

/// Full progress row in table column order.
#[derive(Debug, Clone, Queryable)]
pub struct ProgressRow {
    pub progress_id: i64,
    pub internship_id: i64,
    pub current_week: i32,
    pub total_weeks: i32,
    pub completed_tasks: i32,
    pub total_tasks: i32,
    pub overall_progress: f64,
    pub accomplishments: Option<String>,
    pub challenges: Option<String>,
    pub next_week_plan: Option<String>,
    pub week_start_date: Option<String>,
    pub week_end_date: Option<String>,
}

impl ProgressRow {
    /// Decodes the row into the domain entity.
    ///
    /// # Errors
    ///
    /// Returns `DecodeFailed` if a stored date is invalid.
    pub fn into_domain(self) -> Result<InternshipProgress, PersistenceError> {
        Ok(InternshipProgress {
            progress_id: self.progress_id,
            internship_id: self.internship_id,
            current_week: self.current_week,
            total_weeks: self.total_weeks,
            completed_tasks: self.completed_tasks,
            total_tasks: self.total_tasks,
            overall_progress: self.overall_progress,
            accomplishments: self.accomplishments,
            challenges: self.challenges,
            next_week_plan: self.next_week_plan,
            week_start_date: decode_date("progress_records.week_start_date", self.week_start_date)?,
            week_end_date: decode_date("progress_records.week_end_date", self.week_end_date)?,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = progress_records)]
pub struct NewProgress {
    pub internship_id: i64,
    pub current_week: i32,
    pub total_weeks: i32,
    pub completed_tasks: i32,
    pub total_tasks: i32,
    pub overall_progress: f64,
    pub accomplishments: Option<String>,
    pub challenges: Option<String>,
    pub next_week_plan: Option<String>,
    pub week_start_date: Option<String>,
    pub week_end_date: Option<String>,
}

/// Partial update of a progress row; `None` fields are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = progress_records)]
pub struct ProgressChangeset {
    pub total_weeks: Option<i32>,
    pub completed_tasks: Option<i32>,
    pub total_tasks: Option<i32>,
    pub overall_progress: Option<f64>,
    pub accomplishments: Option<String>,
    pub challenges: Option<String>,
    pub next_week_plan: Option<String>,
    pub week_start_date: Option<String>,
    pub week_end_date: Option<String>,
}

impl ProgressChangeset {
    /// Returns true if applying the changeset would write at least one column.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.total_weeks.is_some()
            || self.completed_tasks.is_some()
            || self.total_tasks.is_some()
            || self.overall_progress.is_some()
            || self.accomplishments.is_some()
            || self.challenges.is_some()
            || self.next_week_plan.is_some()
            || self.week_start_date.is_some()
            || self.week_end_date.is_some()
    }
}

/// Full task row in table column order.
#[derive(Debug, Clone, Queryable)]
pub struct TaskRow {
    pub task_id: i64,
    pub internship_id: i64,
    pub mentor_id: Option<i64>,
    pub student_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<String>,
    pub completed_at: Option<String>,
}

impl TaskRow {
    /// Decodes the row into the domain entity.
    ///
    /// # Errors
    ///
    /// Returns `DecodeFailed` if a stored status, priority, or date is
    /// invalid.
    pub fn into_domain(self) -> Result<Task, PersistenceError> {
        Ok(Task {
            task_id: self.task_id,
            internship_id: self.internship_id,
            mentor_id: self.mentor_id,
            student_id: self.student_id,
            title: self.title,
            description: self.description,
            status: decode_status::<TaskStatus>("tasks.status", &self.status)?,
            priority: decode_status::<TaskPriority>("tasks.priority", &self.priority)?,
            due_date: decode_date("tasks.due_date", self.due_date)?,
            completed_at: self.completed_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTask {
    pub internship_id: i64,
    pub mentor_id: Option<i64>,
    pub student_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<String>,
}
