// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier resolution.
//!
//! Every operation that references another aggregate resolves the referenced
//! id before mutating anything; a miss fails the whole operation with
//! `NotFound` and no partial write. These are read-only checks and create no
//! records.

use crate::error::EngineError;
use intern_track_persistence::Persistence;

/// Validates that a student exists.
///
/// # Errors
///
/// Returns `NotFound` if the student does not exist.
pub fn resolve_student(persistence: &mut Persistence, student_id: i64) -> Result<(), EngineError> {
    if persistence
        .student_exists(student_id)
        .map_err(EngineError::store)?
    {
        Ok(())
    } else {
        Err(EngineError::NotFound {
            resource: "Student",
            id: student_id,
        })
    }
}

/// Validates that a teacher exists.
///
/// # Errors
///
/// Returns `NotFound` if the teacher does not exist.
pub fn resolve_teacher(persistence: &mut Persistence, teacher_id: i64) -> Result<(), EngineError> {
    if persistence
        .teacher_exists(teacher_id)
        .map_err(EngineError::store)?
    {
        Ok(())
    } else {
        Err(EngineError::NotFound {
            resource: "Teacher",
            id: teacher_id,
        })
    }
}

/// Validates that a mentor exists.
///
/// # Errors
///
/// Returns `NotFound` if the mentor does not exist.
pub fn resolve_mentor(persistence: &mut Persistence, mentor_id: i64) -> Result<(), EngineError> {
    if persistence
        .mentor_exists(mentor_id)
        .map_err(EngineError::store)?
    {
        Ok(())
    } else {
        Err(EngineError::NotFound {
            resource: "Mentor",
            id: mentor_id,
        })
    }
}

/// Validates that a company exists.
///
/// # Errors
///
/// Returns `NotFound` if the company does not exist.
pub fn resolve_company(persistence: &mut Persistence, company_id: i64) -> Result<(), EngineError> {
    if persistence
        .company_exists(company_id)
        .map_err(EngineError::store)?
    {
        Ok(())
    } else {
        Err(EngineError::NotFound {
            resource: "Company",
            id: company_id,
        })
    }
}

/// Validates that a batch exists.
///
/// # Errors
///
/// Returns `NotFound` if the batch does not exist.
pub fn resolve_batch(persistence: &mut Persistence, batch_id: i64) -> Result<(), EngineError> {
    if persistence
        .batch_exists(batch_id)
        .map_err(EngineError::store)?
    {
        Ok(())
    } else {
        Err(EngineError::NotFound {
            resource: "Batch",
            id: batch_id,
        })
    }
}

/// Validates that an internship exists.
///
/// # Errors
///
/// Returns `NotFound` if the internship does not exist.
pub fn resolve_internship(
    persistence: &mut Persistence,
    internship_id: i64,
) -> Result<(), EngineError> {
    if persistence
        .internship_exists(internship_id)
        .map_err(EngineError::store)?
    {
        Ok(())
    } else {
        Err(EngineError::NotFound {
            resource: "Internship",
            id: internship_id,
        })
    }
}

/// Resolves the evaluating user: a teacher id resolves to that teacher's
/// user account, otherwise an explicit user id is validated directly.
///
/// # Errors
///
/// Returns `NotFound` if the referenced teacher or user does not exist, or
/// `InvalidArgument` if neither reference was supplied.
pub fn resolve_evaluator(
    persistence: &mut Persistence,
    teacher_id: Option<i64>,
    evaluator_user_id: Option<i64>,
) -> Result<i64, EngineError> {
    if let Some(teacher_id) = teacher_id {
        let teacher = persistence
            .get_teacher(teacher_id)
            .map_err(|e| EngineError::lookup("Teacher", teacher_id, e))?;
        return Ok(teacher.user_id);
    }

    if let Some(user_id) = evaluator_user_id {
        if persistence.user_exists(user_id).map_err(EngineError::store)? {
            return Ok(user_id);
        }
        return Err(EngineError::NotFound {
            resource: "User",
            id: user_id,
        });
    }

    Err(EngineError::InvalidArgument {
        field: String::from("evaluator"),
        message: String::from("either teacher_id or evaluator_user_id must be supplied"),
    })
}
