// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment resolution.
//!
//! Binds company/student/mentor/teacher references to an internship in one
//! write and pushes it into ASSIGNED. Resolution happens strictly before the
//! write: a single dangling id fails the whole operation with no partial
//! assignment persisted. The operation is idempotent.

use tracing::info;

use crate::error::EngineError;
use crate::internship::get_internship;
use crate::request_response::AssignInternshipRequest;
use crate::resolver::{
    resolve_company, resolve_internship, resolve_mentor, resolve_student, resolve_teacher,
};
use intern_track_domain::{Internship, InternshipStatus};
use intern_track_persistence::{InternshipChangeset, Persistence};

/// Binds the supplied references to an internship and sets its status to
/// ASSIGNED, regardless of the prior status. References not supplied are
/// left intact.
///
/// # Errors
///
/// Returns `NotFound` if the internship or any supplied reference does not
/// resolve; nothing is persisted in that case.
pub fn assign_internship(
    persistence: &mut Persistence,
    internship_id: i64,
    request: &AssignInternshipRequest,
) -> Result<Internship, EngineError> {
    resolve_internship(persistence, internship_id)?;

    // Resolve-then-apply: every supplied reference must resolve before the
    // single persisting write.
    if let Some(student_id) = request.student_id {
        resolve_student(persistence, student_id)?;
    }
    if let Some(teacher_id) = request.teacher_id {
        resolve_teacher(persistence, teacher_id)?;
    }
    if let Some(mentor_id) = request.mentor_id {
        resolve_mentor(persistence, mentor_id)?;
    }
    if let Some(company_id) = request.company_id {
        resolve_company(persistence, company_id)?;
    }

    let changeset = InternshipChangeset {
        student_id: request.student_id,
        teacher_id: request.teacher_id,
        mentor_id: request.mentor_id,
        company_id: request.company_id,
        status: Some(InternshipStatus::Assigned.as_str().to_string()),
        ..InternshipChangeset::default()
    };

    persistence
        .update_internship(internship_id, &changeset)
        .map_err(|e| EngineError::lookup("Internship", internship_id, e))?;
    info!(
        internship_id,
        student_id = request.student_id,
        teacher_id = request.teacher_id,
        mentor_id = request.mentor_id,
        company_id = request.company_id,
        "Assigned internship"
    );

    get_internship(persistence, internship_id)
}
