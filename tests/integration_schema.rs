use attendance_db::{drop_schema, ensure_schema, rebuild_schema, schema_exists};
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_ensure_schema_is_idempotent(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    assert!(!schema_exists(&mut conn).await.unwrap());

    ensure_schema(&mut conn).await.unwrap();
    ensure_schema(&mut conn).await.unwrap();

    assert!(schema_exists(&mut conn).await.unwrap());
}

#[sqlx::test(migrations = false)]
async fn test_ensure_schema_keeps_existing_rows(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    ensure_schema(&mut conn).await.unwrap();
    sqlx::query(
        "INSERT INTO users (username, email, password, full_name, role)
         VALUES ('keep', 'keep@example.com', 'x', 'Keep Me', 'TEACHER')",
    )
    .execute(&mut *conn)
    .await
    .unwrap();

    ensure_schema(&mut conn).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *conn)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = false)]
async fn test_drop_schema_removes_tables(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    ensure_schema(&mut conn).await.unwrap();

    drop_schema(&mut conn).await.unwrap();

    assert!(!schema_exists(&mut conn).await.unwrap());
    // Dropping an absent schema is fine too.
    drop_schema(&mut conn).await.unwrap();
}

#[sqlx::test(migrations = false)]
async fn test_rebuild_schema_empties_tables(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    ensure_schema(&mut conn).await.unwrap();
    sqlx::query(
        "INSERT INTO users (username, email, password, full_name, role)
         VALUES ('gone', 'gone@example.com', 'x', 'Gone', 'COUNSELLOR')",
    )
    .execute(&mut *conn)
    .await
    .unwrap();

    rebuild_schema(&mut conn).await.unwrap();

    assert!(schema_exists(&mut conn).await.unwrap());
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *conn)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = false)]
async fn test_schema_rejects_invalid_role_and_semester(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    ensure_schema(&mut conn).await.unwrap();

    let bad_role = sqlx::query(
        "INSERT INTO users (username, email, password, full_name, role)
         VALUES ('admin', 'admin@example.com', 'x', 'Admin', 'ADMIN')",
    )
    .execute(&mut *conn)
    .await;
    assert!(bad_role.is_err());

    let user_id: uuid::Uuid = sqlx::query_scalar(
        "INSERT INTO users (username, email, password, full_name, role)
         VALUES ('s', 's@example.com', 'x', 'S', 'STUDENT') RETURNING id",
    )
    .fetch_one(&mut *conn)
    .await
    .unwrap();
    let bad_semester = sqlx::query(
        "INSERT INTO students (user_id, roll_number, registration_number, course, semester, branch)
         VALUES ($1, 'R', 'G', 'C', 0, 'B')",
    )
    .bind(user_id)
    .execute(&mut *conn)
    .await;
    assert!(bad_semester.is_err());
}

#[sqlx::test(migrations = false)]
async fn test_failed_rebuild_keeps_previous_schema_and_rows(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    ensure_schema(&mut conn).await.unwrap();
    sqlx::query(
        "INSERT INTO users (username, email, password, full_name, role)
         VALUES ('survivor', 'survivor@example.com', 'x', 'Survivor', 'TEACHER')",
    )
    .execute(&mut *conn)
    .await
    .unwrap();

    // Make every CREATE TABLE fail so the rebuild dies after its drops.
    sqlx::query(
        "CREATE FUNCTION block_create_table() RETURNS event_trigger
         LANGUAGE plpgsql AS $$
         BEGIN
             RAISE EXCEPTION 'table creation blocked';
         END;
         $$",
    )
    .execute(&mut *conn)
    .await
    .unwrap();
    sqlx::query(
        "CREATE EVENT TRIGGER block_create_table ON ddl_command_start
         WHEN TAG IN ('CREATE TABLE')
         EXECUTE FUNCTION block_create_table()",
    )
    .execute(&mut *conn)
    .await
    .unwrap();

    assert!(rebuild_schema(&mut conn).await.is_err());

    sqlx::query("DROP EVENT TRIGGER block_create_table")
        .execute(&mut *conn)
        .await
        .unwrap();

    assert!(schema_exists(&mut conn).await.unwrap());
    let usernames: Vec<String> = sqlx::query_scalar("SELECT username FROM users")
        .fetch_all(&mut *conn)
        .await
        .unwrap();
    assert_eq!(usernames, vec!["survivor".to_string()]);
}
