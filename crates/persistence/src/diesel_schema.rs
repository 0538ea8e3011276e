// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    users (user_id) {
        user_id -> BigInt,
        display_name -> Text,
        email -> Nullable<Text>,
        role -> Text,
    }
}

diesel::table! {
    students (student_id) {
        student_id -> BigInt,
        user_id -> Nullable<BigInt>,
        full_name -> Text,
        email -> Nullable<Text>,
        student_number -> Nullable<Text>,
    }
}

diesel::table! {
    teachers (teacher_id) {
        teacher_id -> BigInt,
        user_id -> BigInt,
        full_name -> Text,
        department -> Nullable<Text>,
    }
}

diesel::table! {
    mentors (mentor_id) {
        mentor_id -> BigInt,
        company_id -> Nullable<BigInt>,
        full_name -> Text,
        email -> Nullable<Text>,
    }
}

diesel::table! {
    companies (company_id) {
        company_id -> BigInt,
        name -> Text,
        city -> Nullable<Text>,
    }
}

diesel::table! {
    batches (batch_id) {
        batch_id -> BigInt,
        name -> Text,
        registration_start -> Nullable<Text>,
        registration_end -> Nullable<Text>,
        execution_start -> Nullable<Text>,
        execution_end -> Nullable<Text>,
    }
}

diesel::table! {
    internships (internship_id) {
        internship_id -> BigInt,
        student_id -> BigInt,
        teacher_id -> Nullable<BigInt>,
        mentor_id -> Nullable<BigInt>,
        company_id -> Nullable<BigInt>,
        batch_id -> Nullable<BigInt>,
        code -> Text,
        job_title -> Nullable<Text>,
        job_description -> Nullable<Text>,
        start_date -> Nullable<Text>,
        end_date -> Nullable<Text>,
        status -> Text,
        working_hours_per_week -> Nullable<Double>,
        salary -> Nullable<Double>,
        final_score -> Nullable<Double>,
        teacher_score -> Nullable<Double>,
        mentor_score -> Nullable<Double>,
        teacher_comment -> Nullable<Text>,
        mentor_comment -> Nullable<Text>,
        notes -> Nullable<Text>,
    }
}

diesel::table! {
    contracts (contract_id) {
        contract_id -> BigInt,
        internship_id -> Nullable<BigInt>,
        code -> Text,
        title -> Nullable<Text>,
        terms -> Nullable<Text>,
        amount -> Nullable<Double>,
        status -> Text,
        payment_status -> Text,
        approval_status -> Text,
        signed_date -> Nullable<Text>,
        payment_date -> Nullable<Text>,
        approval_date -> Nullable<Text>,
        approved_by_teacher_id -> Nullable<BigInt>,
        created_by_teacher_id -> Nullable<BigInt>,
    }
}

diesel::table! {
    reports (report_id) {
        report_id -> BigInt,
        internship_id -> BigInt,
        title -> Text,
        report_type -> Text,
        week_number -> Nullable<Integer>,
        status -> Text,
        report_date -> Nullable<Text>,
        submitted_at -> Nullable<Text>,
        reviewed_at -> Nullable<Text>,
        grade -> Nullable<Double>,
        is_approved_by_teacher -> Integer,
        is_approved_by_mentor -> Integer,
        feedback -> Nullable<Text>,
        comments -> Nullable<Text>,
    }
}

diesel::table! {
    evaluations (evaluation_id) {
        evaluation_id -> BigInt,
        internship_id -> BigInt,
        evaluator_user_id -> BigInt,
        evaluator_type -> Text,
        technical_score -> Nullable<Double>,
        soft_skill_score -> Nullable<Double>,
        attitude_score -> Nullable<Double>,
        communication_score -> Nullable<Double>,
        overall_score -> Nullable<Double>,
        is_final_evaluation -> Integer,
        evaluation_date -> Text,
        strengths -> Nullable<Text>,
        weaknesses -> Nullable<Text>,
        recommendations -> Nullable<Text>,
        comments -> Nullable<Text>,
    }
}

diesel::table! {
    progress_records (progress_id) {
        progress_id -> BigInt,
        internship_id -> BigInt,
        current_week -> Integer,
        total_weeks -> Integer,
        completed_tasks -> Integer,
        total_tasks -> Integer,
        overall_progress -> Double,
        accomplishments -> Nullable<Text>,
        challenges -> Nullable<Text>,
        next_week_plan -> Nullable<Text>,
        week_start_date -> Nullable<Text>,
        week_end_date -> Nullable<Text>,
    }
}

diesel::table! {
    tasks (task_id) {
        task_id -> BigInt,
        internship_id -> BigInt,
        mentor_id -> Nullable<BigInt>,
        student_id -> Nullable<BigInt>,
        title -> Text,
        description -> Nullable<Text>,
        status -> Text,
        priority -> Text,
        due_date -> Nullable<Text>,
        completed_at -> Nullable<Text>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    users,
    students,
    teachers,
    mentors,
    companies,
    batches,
    internships,
    contracts,
    reports,
    evaluations,
    progress_records,
    tasks,
);
