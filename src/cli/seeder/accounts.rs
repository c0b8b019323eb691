//! Row-level writes for identity and profile records.
//!
//! All functions take a bare connection so they run inside whatever
//! transaction the caller holds.

use attendance_models::{NewStaffProfile, NewStudent, NewUser, UserId, UserRole};
use sqlx::PgConnection;
use std::collections::HashSet;

use super::models::SeedProfile;

/// Returns which of `usernames` already have an identity record.
pub async fn existing_usernames(
    conn: &mut PgConnection,
    usernames: &[&str],
) -> Result<HashSet<String>, sqlx::Error> {
    let found: Vec<String> =
        sqlx::query_scalar("SELECT username FROM users WHERE username = ANY($1)")
            .bind(usernames)
            .fetch_all(&mut *conn)
            .await?;

    Ok(found.into_iter().collect())
}

/// Inserts an identity and returns its generated id.
pub async fn insert_identity(
    conn: &mut PgConnection,
    user: &NewUser,
) -> Result<UserId, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password, full_name, role)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.full_name)
    .bind(user.role)
    .fetch_one(&mut *conn)
    .await
}

/// Inserts the profile owned by `user_id`.
pub async fn insert_profile(
    conn: &mut PgConnection,
    user_id: UserId,
    profile: &SeedProfile,
) -> Result<(), sqlx::Error> {
    match profile {
        SeedProfile::Student(student) => insert_student(conn, user_id, student).await,
        SeedProfile::Teacher(staff) => {
            insert_staff(conn, UserRole::Teacher, user_id, staff).await
        }
        SeedProfile::Counsellor(staff) => {
            insert_staff(conn, UserRole::Counsellor, user_id, staff).await
        }
    }
}

async fn insert_student(
    conn: &mut PgConnection,
    user_id: UserId,
    student: &NewStudent,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO students
            (user_id, roll_number, registration_number, course, semester, branch, phone, face_registered)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(user_id)
    .bind(&student.roll_number)
    .bind(&student.registration_number)
    .bind(&student.course)
    .bind(student.semester)
    .bind(&student.branch)
    .bind(&student.phone)
    .bind(student.face_registered)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

async fn insert_staff(
    conn: &mut PgConnection,
    role: UserRole,
    user_id: UserId,
    staff: &NewStaffProfile,
) -> Result<(), sqlx::Error> {
    // Table name comes from a closed enum, never from input.
    let statement = format!(
        "INSERT INTO {} (user_id, employee_id, department, phone) VALUES ($1, $2, $3, $4)",
        role.profile_table()
    );

    sqlx::query(&statement)
        .bind(user_id)
        .bind(&staff.employee_id)
        .bind(&staff.department)
        .bind(&staff.phone)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
