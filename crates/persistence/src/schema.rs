// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Embedded schema bootstrap.
//!
//! The schema is applied at connect time with `CREATE TABLE IF NOT EXISTS`
//! DDL so that in-memory test databases and fresh files come up ready to use.

use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use tracing::info;

use crate::error::PersistenceError;

/// Initializes the database schema.
///
/// # Errors
///
/// Returns an error if schema creation fails.
pub fn initialize_schema(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    info!("Initializing database schema");

    conn.batch_execute("PRAGMA foreign_keys = ON")
        .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;

    conn.batch_execute(
        "
        -- Reference entities resolved by the workflow engine
        CREATE TABLE IF NOT EXISTS users (
            user_id INTEGER PRIMARY KEY AUTOINCREMENT,
            display_name TEXT NOT NULL,
            email TEXT,
            role TEXT NOT NULL DEFAULT 'USER'
        );

        CREATE TABLE IF NOT EXISTS students (
            student_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            full_name TEXT NOT NULL,
            email TEXT,
            student_number TEXT,
            FOREIGN KEY(user_id) REFERENCES users(user_id)
        );

        CREATE TABLE IF NOT EXISTS teachers (
            teacher_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            full_name TEXT NOT NULL,
            department TEXT,
            FOREIGN KEY(user_id) REFERENCES users(user_id)
        );

        CREATE TABLE IF NOT EXISTS companies (
            company_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT
        );

        CREATE TABLE IF NOT EXISTS mentors (
            mentor_id INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id INTEGER,
            full_name TEXT NOT NULL,
            email TEXT,
            FOREIGN KEY(company_id) REFERENCES companies(company_id)
        );

        CREATE TABLE IF NOT EXISTS batches (
            batch_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            registration_start TEXT,
            registration_end TEXT,
            execution_start TEXT,
            execution_end TEXT
        );

        -- Workflow aggregates
        CREATE TABLE IF NOT EXISTS internships (
            internship_id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id INTEGER NOT NULL,
            teacher_id INTEGER,
            mentor_id INTEGER,
            company_id INTEGER,
            batch_id INTEGER,
            code TEXT NOT NULL UNIQUE,
            job_title TEXT,
            job_description TEXT,
            start_date TEXT,
            end_date TEXT,
            status TEXT NOT NULL DEFAULT 'PENDING',
            working_hours_per_week DOUBLE,
            salary DOUBLE,
            final_score DOUBLE,
            teacher_score DOUBLE,
            mentor_score DOUBLE,
            teacher_comment TEXT,
            mentor_comment TEXT,
            notes TEXT,
            FOREIGN KEY(student_id) REFERENCES students(student_id),
            FOREIGN KEY(teacher_id) REFERENCES teachers(teacher_id),
            FOREIGN KEY(mentor_id) REFERENCES mentors(mentor_id),
            FOREIGN KEY(company_id) REFERENCES companies(company_id),
            FOREIGN KEY(batch_id) REFERENCES batches(batch_id)
        );

        CREATE TABLE IF NOT EXISTS contracts (
            contract_id INTEGER PRIMARY KEY AUTOINCREMENT,
            internship_id INTEGER,
            code TEXT NOT NULL UNIQUE,
            title TEXT,
            terms TEXT,
            amount DOUBLE,
            status TEXT NOT NULL DEFAULT 'DRAFT',
            payment_status TEXT NOT NULL DEFAULT 'PENDING',
            approval_status TEXT NOT NULL DEFAULT 'PENDING',
            signed_date TEXT,
            payment_date TEXT,
            approval_date TEXT,
            approved_by_teacher_id INTEGER,
            created_by_teacher_id INTEGER,
            FOREIGN KEY(internship_id) REFERENCES internships(internship_id),
            FOREIGN KEY(approved_by_teacher_id) REFERENCES teachers(teacher_id),
            FOREIGN KEY(created_by_teacher_id) REFERENCES teachers(teacher_id)
        );

        CREATE TABLE IF NOT EXISTS reports (
            report_id INTEGER PRIMARY KEY AUTOINCREMENT,
            internship_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            report_type TEXT NOT NULL,
            week_number INTEGER,
            status TEXT NOT NULL DEFAULT 'PENDING',
            report_date TEXT,
            submitted_at TEXT,
            reviewed_at TEXT,
            grade DOUBLE,
            is_approved_by_teacher INTEGER NOT NULL DEFAULT 0 CHECK(is_approved_by_teacher IN (0, 1)),
            is_approved_by_mentor INTEGER NOT NULL DEFAULT 0 CHECK(is_approved_by_mentor IN (0, 1)),
            feedback TEXT,
            comments TEXT,
            FOREIGN KEY(internship_id) REFERENCES internships(internship_id)
        );

        CREATE INDEX IF NOT EXISTS idx_reports_by_internship
            ON reports(internship_id);

        CREATE TABLE IF NOT EXISTS evaluations (
            evaluation_id INTEGER PRIMARY KEY AUTOINCREMENT,
            internship_id INTEGER NOT NULL,
            evaluator_user_id INTEGER NOT NULL,
            evaluator_type TEXT NOT NULL,
            technical_score DOUBLE,
            soft_skill_score DOUBLE,
            attitude_score DOUBLE,
            communication_score DOUBLE,
            overall_score DOUBLE,
            is_final_evaluation INTEGER NOT NULL DEFAULT 0 CHECK(is_final_evaluation IN (0, 1)),
            evaluation_date TEXT NOT NULL,
            strengths TEXT,
            weaknesses TEXT,
            recommendations TEXT,
            comments TEXT,
            FOREIGN KEY(internship_id) REFERENCES internships(internship_id),
            FOREIGN KEY(evaluator_user_id) REFERENCES users(user_id)
        );

        CREATE INDEX IF NOT EXISTS idx_evaluations_by_internship
            ON evaluations(internship_id);

        CREATE INDEX IF NOT EXISTS idx_evaluations_by_evaluator
            ON evaluations(evaluator_user_id);

        CREATE TABLE IF NOT EXISTS progress_records (
            progress_id INTEGER PRIMARY KEY AUTOINCREMENT,
            internship_id INTEGER NOT NULL,
            current_week INTEGER NOT NULL,
            total_weeks INTEGER NOT NULL DEFAULT 12,
            completed_tasks INTEGER NOT NULL DEFAULT 0,
            total_tasks INTEGER NOT NULL DEFAULT 0,
            overall_progress DOUBLE NOT NULL DEFAULT 0,
            accomplishments TEXT,
            challenges TEXT,
            next_week_plan TEXT,
            week_start_date TEXT,
            week_end_date TEXT,
            UNIQUE(internship_id, current_week),
            FOREIGN KEY(internship_id) REFERENCES internships(internship_id)
        );

        CREATE TABLE IF NOT EXISTS tasks (
            task_id INTEGER PRIMARY KEY AUTOINCREMENT,
            internship_id INTEGER NOT NULL,
            mentor_id INTEGER,
            student_id INTEGER,
            title TEXT NOT NULL,
            description TEXT,
            status TEXT NOT NULL DEFAULT 'PENDING',
            priority TEXT NOT NULL DEFAULT 'MEDIUM',
            due_date TEXT,
            completed_at TEXT,
            FOREIGN KEY(internship_id) REFERENCES internships(internship_id),
            FOREIGN KEY(mentor_id) REFERENCES mentors(mentor_id),
            FOREIGN KEY(student_id) REFERENCES students(student_id)
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_by_internship
            ON tasks(internship_id);
        ",
    )
    .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;

    Ok(())
}
