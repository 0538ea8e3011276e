// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for engine tests: an in-memory store, a deterministic
//! code generator, and seed data.

use crate::codes::SequenceCodeGenerator;
use crate::internship::create_internship;
use crate::request_response::CreateInternshipRequest;
use intern_track_domain::Internship;
use intern_track_persistence::{
    NewBatch, NewCompany, NewMentor, NewStudent, NewTeacher, NewUser, Persistence,
};
use time::OffsetDateTime;

pub fn create_test_store() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_test_codes() -> SequenceCodeGenerator {
    SequenceCodeGenerator::new()
}

pub fn today_date() -> time::Date {
    OffsetDateTime::now_utc().date()
}

pub fn seed_student(store: &mut Persistence, name: &str) -> i64 {
    store
        .create_student(&NewStudent {
            user_id: None,
            full_name: name.to_string(),
            email: None,
            student_number: None,
        })
        .unwrap()
}

pub fn seed_teacher(store: &mut Persistence, name: &str) -> i64 {
    let user_id = store
        .create_user(&NewUser {
            display_name: name.to_string(),
            email: None,
            role: String::from("TEACHER"),
        })
        .unwrap();
    store
        .create_teacher(&NewTeacher {
            user_id,
            full_name: name.to_string(),
            department: None,
        })
        .unwrap()
}

pub fn seed_mentor(store: &mut Persistence, name: &str) -> i64 {
    store
        .create_mentor(&NewMentor {
            company_id: None,
            full_name: name.to_string(),
            email: None,
        })
        .unwrap()
}

pub fn seed_company(store: &mut Persistence, name: &str) -> i64 {
    store
        .create_company(&NewCompany {
            name: name.to_string(),
            city: None,
        })
        .unwrap()
}

pub fn seed_batch(store: &mut Persistence, name: &str) -> i64 {
    store
        .create_batch(&NewBatch {
            name: name.to_string(),
            registration_start: None,
            registration_end: None,
            execution_start: None,
            execution_end: None,
        })
        .unwrap()
}

pub fn seed_user(store: &mut Persistence, name: &str) -> i64 {
    store
        .create_user(&NewUser {
            display_name: name.to_string(),
            email: None,
            role: String::from("USER"),
        })
        .unwrap()
}

/// Creates a PENDING internship for the given student through the engine.
pub fn seed_internship(
    store: &mut Persistence,
    codes: &SequenceCodeGenerator,
    student_id: i64,
) -> Internship {
    create_internship(
        store,
        codes,
        &CreateInternshipRequest {
            student_id,
            ..CreateInternshipRequest::default()
        },
    )
    .unwrap()
}
