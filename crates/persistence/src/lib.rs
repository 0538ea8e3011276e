// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the internship tracking system.
//!
//! This crate provides database persistence for the workflow aggregates
//! (internships, contracts, reports, evaluations, progress records, tasks)
//! and the reference entities the engine resolves. It is built on Diesel
//! over `SQLite`.
//!
//! ## Storage model
//!
//! Each entity is a flat row plus typed references to other entities' ids.
//! Business dates are stored as ISO calendar-date text, audit timestamps as
//! RFC 3339 text. The schema is embedded and applied at connect time, so
//! in-memory test databases come up ready to use.
//!
//! ## Transaction scoping
//!
//! Every mutating adapter method runs in a single `SQLite` immediate
//! transaction. Reads run outside transactions and re-read current state on
//! every call; there is no in-process caching. Concurrent writers racing on
//! the same row are last-writer-wins; the engine does not use optimistic
//! locking.

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

use diesel::prelude::*;
use tracing::{debug, info};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod schema;

#[cfg(test)]
mod tests;

pub use data_models::{
    BatchRecord, CompanyRecord, ContractChangeset, ContractRow, EvaluationRow,
    InternshipChangeset, InternshipRow, MentorRecord, NewBatch, NewCompany, NewContract,
    NewEvaluation, NewInternship, NewMentor, NewProgress, NewReport, NewStudent, NewTask,
    NewTeacher, NewUser, ProgressChangeset, ProgressRow, ReportChangeset, ReportRow,
    StudentRecord, TaskRow, TeacherRecord, UserRecord,
};
pub use error::PersistenceError;

use intern_track_domain::{Contract, Evaluation, Internship, InternshipProgress, Report, Task};

/// Adapter owning the `SQLite` connection.
///
/// One `Persistence` value serves one caller at a time; the excluded request
/// layer decides how connections are shared.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Opens an in-memory database with the schema applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema initialization fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        Self::open(":memory:")
    }

    /// Opens (and if necessary creates) a database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema initialization fails.
    pub fn open(database_path: &str) -> Result<Self, PersistenceError> {
        let mut conn = SqliteConnection::establish(database_path)?;
        schema::initialize_schema(&mut conn)?;
        info!(database_path, "Opened database");
        Ok(Self { conn })
    }

    fn write_tx<T>(
        &mut self,
        f: impl FnOnce(&mut SqliteConnection) -> Result<T, PersistenceError>,
    ) -> Result<T, PersistenceError> {
        self.conn.immediate_transaction(f)
    }

    // ------------------------------------------------------------------
    // Reference entities
    // ------------------------------------------------------------------

    /// Inserts a user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_user(&mut self, record: &NewUser) -> Result<i64, PersistenceError> {
        self.write_tx(|conn| mutations::refs::insert_user(conn, record))
    }

    /// Inserts a student.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_student(&mut self, record: &NewStudent) -> Result<i64, PersistenceError> {
        self.write_tx(|conn| mutations::refs::insert_student(conn, record))
    }

    /// Inserts a teacher.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_teacher(&mut self, record: &NewTeacher) -> Result<i64, PersistenceError> {
        self.write_tx(|conn| mutations::refs::insert_teacher(conn, record))
    }

    /// Inserts a mentor.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_mentor(&mut self, record: &NewMentor) -> Result<i64, PersistenceError> {
        self.write_tx(|conn| mutations::refs::insert_mentor(conn, record))
    }

    /// Inserts a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_company(&mut self, record: &NewCompany) -> Result<i64, PersistenceError> {
        self.write_tx(|conn| mutations::refs::insert_company(conn, record))
    }

    /// Inserts a cohort batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_batch(&mut self, record: &NewBatch) -> Result<i64, PersistenceError> {
        self.write_tx(|conn| mutations::refs::insert_batch(conn, record))
    }

    /// Returns whether a user exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn user_exists(&mut self, user_id: i64) -> Result<bool, PersistenceError> {
        queries::refs::user_exists(&mut self.conn, user_id)
    }

    /// Returns whether a student exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn student_exists(&mut self, student_id: i64) -> Result<bool, PersistenceError> {
        queries::refs::student_exists(&mut self.conn, student_id)
    }

    /// Returns whether a teacher exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn teacher_exists(&mut self, teacher_id: i64) -> Result<bool, PersistenceError> {
        queries::refs::teacher_exists(&mut self.conn, teacher_id)
    }

    /// Returns whether a mentor exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn mentor_exists(&mut self, mentor_id: i64) -> Result<bool, PersistenceError> {
        queries::refs::mentor_exists(&mut self.conn, mentor_id)
    }

    /// Returns whether a company exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn company_exists(&mut self, company_id: i64) -> Result<bool, PersistenceError> {
        queries::refs::company_exists(&mut self.conn, company_id)
    }

    /// Returns whether a batch exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn batch_exists(&mut self, batch_id: i64) -> Result<bool, PersistenceError> {
        queries::refs::batch_exists(&mut self.conn, batch_id)
    }

    /// Gets a teacher record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the teacher does not exist.
    pub fn get_teacher(&mut self, teacher_id: i64) -> Result<TeacherRecord, PersistenceError> {
        queries::refs::get_teacher(&mut self.conn, teacher_id)
    }

    // ------------------------------------------------------------------
    // Internships
    // ------------------------------------------------------------------

    /// Inserts a new internship and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `UniqueViolation` on a code collision, or another error if
    /// the insert fails.
    pub fn insert_internship(&mut self, record: &NewInternship) -> Result<i64, PersistenceError> {
        let internship_id = self.write_tx(|conn| mutations::internships::insert_internship(conn, record))?;
        info!(internship_id, code = %record.code, "Inserted internship");
        Ok(internship_id)
    }

    /// Gets an internship by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the internship does not exist.
    pub fn get_internship(&mut self, internship_id: i64) -> Result<Internship, PersistenceError> {
        queries::internships::get_internship(&mut self.conn, internship_id)
    }

    /// Returns whether an internship exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn internship_exists(&mut self, internship_id: i64) -> Result<bool, PersistenceError> {
        queries::internships::internship_exists(&mut self.conn, internship_id)
    }

    /// Returns whether an internship code is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn internship_code_exists(&mut self, code: &str) -> Result<bool, PersistenceError> {
        queries::internships::internship_code_exists(&mut self.conn, code)
    }

    /// Lists the ids of all internships supervised by a mentor.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn internship_ids_for_mentor(
        &mut self,
        mentor_id: i64,
    ) -> Result<Vec<i64>, PersistenceError> {
        queries::internships::internship_ids_for_mentor(&mut self.conn, mentor_id)
    }

    /// Applies a partial update to an internship in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the internship does not exist, or another error
    /// if the update fails.
    pub fn update_internship(
        &mut self,
        internship_id: i64,
        changeset: &InternshipChangeset,
    ) -> Result<(), PersistenceError> {
        self.write_tx(|conn| mutations::internships::update_internship(conn, internship_id, changeset))?;
        debug!(internship_id, "Updated internship");
        Ok(())
    }

    /// Deletes an internship and its dependent records in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the internship does not exist, or another error
    /// if a delete fails.
    pub fn delete_internship(&mut self, internship_id: i64) -> Result<(), PersistenceError> {
        self.write_tx(|conn| mutations::internships::delete_internship_cascade(conn, internship_id))?;
        info!(internship_id, "Deleted internship and dependent records");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Contracts
    // ------------------------------------------------------------------

    /// Inserts a new contract and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `UniqueViolation` on a code collision, or another error if
    /// the insert fails.
    pub fn insert_contract(&mut self, record: &NewContract) -> Result<i64, PersistenceError> {
        let contract_id = self.write_tx(|conn| mutations::contracts::insert_contract(conn, record))?;
        info!(contract_id, code = %record.code, "Inserted contract");
        Ok(contract_id)
    }

    /// Gets a contract by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the contract does not exist.
    pub fn get_contract(&mut self, contract_id: i64) -> Result<Contract, PersistenceError> {
        queries::contracts::get_contract(&mut self.conn, contract_id)
    }

    /// Returns whether a contract code is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn contract_code_exists(&mut self, code: &str) -> Result<bool, PersistenceError> {
        queries::contracts::contract_code_exists(&mut self.conn, code)
    }

    /// Applies a partial update to a contract in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the contract does not exist, `UniqueViolation`
    /// on a code collision, or another error if the update fails.
    pub fn update_contract(
        &mut self,
        contract_id: i64,
        changeset: &ContractChangeset,
    ) -> Result<(), PersistenceError> {
        self.write_tx(|conn| mutations::contracts::update_contract(conn, contract_id, changeset))?;
        debug!(contract_id, "Updated contract");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reports
    // ------------------------------------------------------------------

    /// Inserts a new report and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_report(&mut self, record: &NewReport) -> Result<i64, PersistenceError> {
        let report_id = self.write_tx(|conn| mutations::reports::insert_report(conn, record))?;
        info!(report_id, internship_id = record.internship_id, "Inserted report");
        Ok(report_id)
    }

    /// Gets a report by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the report does not exist.
    pub fn get_report(&mut self, report_id: i64) -> Result<Report, PersistenceError> {
        queries::reports::get_report(&mut self.conn, report_id)
    }

    /// Returns whether a weekly report exists for a student and week.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn weekly_report_exists(
        &mut self,
        student_id: i64,
        week_number: i32,
    ) -> Result<bool, PersistenceError> {
        queries::reports::weekly_report_exists(&mut self.conn, student_id, week_number)
    }

    /// Counts the weekly reports a student has filed.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_weekly_reports_for_student(
        &mut self,
        student_id: i64,
    ) -> Result<i64, PersistenceError> {
        queries::reports::count_weekly_reports_for_student(&mut self.conn, student_id)
    }

    /// Applies a partial update to a report's review state in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the report does not exist, or another error if
    /// the update fails.
    pub fn update_report(
        &mut self,
        report_id: i64,
        changeset: &ReportChangeset,
    ) -> Result<(), PersistenceError> {
        self.write_tx(|conn| mutations::reports::update_report(conn, report_id, changeset))?;
        debug!(report_id, "Updated report");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Evaluations
    // ------------------------------------------------------------------

    /// Inserts a new evaluation and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_evaluation(&mut self, record: &NewEvaluation) -> Result<i64, PersistenceError> {
        let evaluation_id = self.write_tx(|conn| mutations::evaluations::insert_evaluation(conn, record))?;
        info!(
            evaluation_id,
            internship_id = record.internship_id,
            "Inserted evaluation"
        );
        Ok(evaluation_id)
    }

    /// Gets an evaluation by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the evaluation does not exist.
    pub fn get_evaluation(&mut self, evaluation_id: i64) -> Result<Evaluation, PersistenceError> {
        queries::evaluations::get_evaluation(&mut self.conn, evaluation_id)
    }

    /// Loads all overall scores for an internship's evaluations.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn overall_scores_for_internship(
        &mut self,
        internship_id: i64,
    ) -> Result<Vec<Option<f64>>, PersistenceError> {
        queries::evaluations::overall_scores_for_internship(&mut self.conn, internship_id)
    }

    /// Loads all overall scores across a student's internships.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn overall_scores_for_student(
        &mut self,
        student_id: i64,
    ) -> Result<Vec<Option<f64>>, PersistenceError> {
        queries::evaluations::overall_scores_for_student(&mut self.conn, student_id)
    }

    /// Loads all overall scores authored by one evaluator user.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn overall_scores_by_evaluator(
        &mut self,
        evaluator_user_id: i64,
    ) -> Result<Vec<Option<f64>>, PersistenceError> {
        queries::evaluations::overall_scores_by_evaluator(&mut self.conn, evaluator_user_id)
    }

    /// Loads the final evaluations of an internship, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn final_evaluations_for_internship(
        &mut self,
        internship_id: i64,
    ) -> Result<Vec<Evaluation>, PersistenceError> {
        queries::evaluations::final_evaluations_for_internship(&mut self.conn, internship_id)
    }

    // ------------------------------------------------------------------
    // Progress records
    // ------------------------------------------------------------------

    /// Gets the progress row for one (internship, week), when any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn progress_for_week(
        &mut self,
        internship_id: i64,
        current_week: i32,
    ) -> Result<Option<InternshipProgress>, PersistenceError> {
        queries::progress::progress_for_week(&mut self.conn, internship_id, current_week)
    }

    /// Gets the progress row with the highest week for an internship.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn latest_progress_for_internship(
        &mut self,
        internship_id: i64,
    ) -> Result<Option<InternshipProgress>, PersistenceError> {
        queries::progress::latest_for_internship(&mut self.conn, internship_id)
    }

    /// Loads overall progress values for a set of internships.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn progress_values_for_internships(
        &mut self,
        internship_ids: &[i64],
    ) -> Result<Vec<f64>, PersistenceError> {
        queries::progress::progress_values_for_internships(&mut self.conn, internship_ids)
    }

    /// Inserts a new progress row and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `UniqueViolation` if the (internship, week) pair already has a
    /// row, or another error if the insert fails.
    pub fn insert_progress(&mut self, record: &NewProgress) -> Result<i64, PersistenceError> {
        let progress_id = self.write_tx(|conn| mutations::progress::insert_progress(conn, record))?;
        debug!(
            progress_id,
            internship_id = record.internship_id,
            current_week = record.current_week,
            "Inserted progress record"
        );
        Ok(progress_id)
    }

    /// Overwrites the mutable fields of an existing progress row in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the row does not exist, or another error if the
    /// update fails.
    pub fn update_progress(
        &mut self,
        progress_id: i64,
        changeset: &ProgressChangeset,
    ) -> Result<(), PersistenceError> {
        self.write_tx(|conn| mutations::progress::update_progress(conn, progress_id, changeset))?;
        debug!(progress_id, "Updated progress record");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    /// Inserts a new task and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_task(&mut self, record: &NewTask) -> Result<i64, PersistenceError> {
        let task_id = self.write_tx(|conn| mutations::tasks::insert_task(conn, record))?;
        debug!(task_id, internship_id = record.internship_id, "Inserted task");
        Ok(task_id)
    }

    /// Gets a task by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the task does not exist.
    pub fn get_task(&mut self, task_id: i64) -> Result<Task, PersistenceError> {
        queries::tasks::get_task(&mut self.conn, task_id)
    }

    /// Counts an internship's completed and total tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn task_counts_for_internship(
        &mut self,
        internship_id: i64,
    ) -> Result<(i64, i64), PersistenceError> {
        queries::tasks::task_counts_for_internship(&mut self.conn, internship_id)
    }

    /// Updates a task's status in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the task does not exist, or another error if the
    /// update fails.
    pub fn update_task_status(
        &mut self,
        task_id: i64,
        status: &str,
        completed_at: Option<String>,
    ) -> Result<(), PersistenceError> {
        self.write_tx(|conn| mutations::tasks::update_task_status(conn, task_id, status, completed_at))?;
        debug!(task_id, status, "Updated task status");
        Ok(())
    }
}
