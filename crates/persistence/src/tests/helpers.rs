// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for store tests.

use crate::data_models::{NewInternship, NewMentor, NewStudent, NewTeacher, NewUser};
use crate::Persistence;
use intern_track_domain::InternshipStatus;

pub fn create_test_store() -> Persistence {
    Persistence::new_in_memory().unwrap()
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

pub fn new_internship(student_id: i64, code: &str) -> NewInternship {
    NewInternship {
        student_id,
        teacher_id: None,
        mentor_id: None,
        company_id: None,
        batch_id: None,
        code: code.to_string(),
        job_title: None,
        job_description: None,
        start_date: None,
        end_date: None,
        status: InternshipStatus::Pending.as_str().to_string(),
        working_hours_per_week: None,
        salary: None,
        notes: None,
    }
}
