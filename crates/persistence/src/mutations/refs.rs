// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inserts for the reference entities.
//!
//! These are used by the excluded request layer's administration paths and
//! by tests; the engine itself only resolves them.

use diesel::prelude::*;

use crate::data_models::{NewBatch, NewCompany, NewMentor, NewStudent, NewTeacher, NewUser};
use crate::diesel_schema::{batches, companies, mentors, students, teachers, users};
use crate::error::PersistenceError;

use super::last_insert_rowid;

/// Inserts a user and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_user(conn: &mut SqliteConnection, record: &NewUser) -> Result<i64, PersistenceError> {
    diesel::insert_into(users::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}

/// Inserts a student and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_student(
    conn: &mut SqliteConnection,
    record: &NewStudent,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(students::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}

/// Inserts a teacher and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_teacher(
    conn: &mut SqliteConnection,
    record: &NewTeacher,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(teachers::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}

/// Inserts a mentor and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_mentor(
    conn: &mut SqliteConnection,
    record: &NewMentor,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(mentors::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}

/// Inserts a company and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_company(
    conn: &mut SqliteConnection,
    record: &NewCompany,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(companies::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}

/// Inserts a batch and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_batch(
    conn: &mut SqliteConnection,
    record: &NewBatch,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(batches::table)
        .values(record)
        .execute(conn)?;
    last_insert_rowid(conn)
}
