// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Existence checks and lookups for the reference entities the engine
//! resolves before mutating an aggregate.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::data_models::TeacherRecord;
use crate::diesel_schema::{batches, companies, mentors, students, teachers, users};
use crate::error::PersistenceError;

/// Returns whether a user exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn user_exists(conn: &mut SqliteConnection, user_id: i64) -> Result<bool, PersistenceError> {
    diesel::select(exists(users::table.filter(users::user_id.eq(user_id))))
        .get_result(conn)
        .map_err(Into::into)
}

/// Returns whether a student exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn student_exists(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<bool, PersistenceError> {
    diesel::select(exists(
        students::table.filter(students::student_id.eq(student_id)),
    ))
    .get_result(conn)
    .map_err(Into::into)
}

/// Returns whether a teacher exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn teacher_exists(
    conn: &mut SqliteConnection,
    teacher_id: i64,
) -> Result<bool, PersistenceError> {
    diesel::select(exists(
        teachers::table.filter(teachers::teacher_id.eq(teacher_id)),
    ))
    .get_result(conn)
    .map_err(Into::into)
}

/// Returns whether a mentor exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn mentor_exists(
    conn: &mut SqliteConnection,
    mentor_id: i64,
) -> Result<bool, PersistenceError> {
    diesel::select(exists(
        mentors::table.filter(mentors::mentor_id.eq(mentor_id)),
    ))
    .get_result(conn)
    .map_err(Into::into)
}

/// Returns whether a company exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn company_exists(
    conn: &mut SqliteConnection,
    company_id: i64,
) -> Result<bool, PersistenceError> {
    diesel::select(exists(
        companies::table.filter(companies::company_id.eq(company_id)),
    ))
    .get_result(conn)
    .map_err(Into::into)
}

/// Returns whether a batch exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn batch_exists(conn: &mut SqliteConnection, batch_id: i64) -> Result<bool, PersistenceError> {
    diesel::select(exists(batches::table.filter(batches::batch_id.eq(batch_id))))
        .get_result(conn)
        .map_err(Into::into)
}

/// Gets a teacher record, including the user account it points at.
///
/// # Errors
///
/// Returns `NotFound` if the teacher does not exist.
pub fn get_teacher(
    conn: &mut SqliteConnection,
    teacher_id: i64,
) -> Result<TeacherRecord, PersistenceError> {
    teachers::table
        .find(teacher_id)
        .first::<TeacherRecord>(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => {
                PersistenceError::NotFound(format!("Teacher {teacher_id} not found"))
            }
            other => other.into(),
        })
}
