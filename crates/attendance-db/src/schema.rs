//! Schema Initializer and teardown.
//!
//! Tables are declared here in dependency order. Creation is
//! `CREATE TABLE IF NOT EXISTS`, so [`ensure_schema`] is a no-op on an
//! existing schema and safe on every start. There is no migration history:
//! the declared tables are the schema.

use sqlx::{Connection, PgConnection};
use tracing::{debug, info};

/// Tables in creation order; drop order is the reverse.
pub const TABLES: [&str; 4] = ["users", "students", "teachers", "counsellors"];

const CREATE_STATEMENTS: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        username VARCHAR(80) NOT NULL UNIQUE,
        email VARCHAR(120) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        full_name VARCHAR(120) NOT NULL,
        role VARCHAR(20) NOT NULL CHECK (role IN ('STUDENT', 'TEACHER', 'COUNSELLOR')),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS students (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL UNIQUE REFERENCES users (id) ON DELETE CASCADE,
        roll_number VARCHAR(50) NOT NULL UNIQUE,
        registration_number VARCHAR(50) NOT NULL UNIQUE,
        course VARCHAR(100) NOT NULL,
        semester INTEGER NOT NULL CHECK (semester > 0),
        branch VARCHAR(100) NOT NULL,
        phone VARCHAR(20),
        face_registered BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS teachers (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL UNIQUE REFERENCES users (id) ON DELETE CASCADE,
        employee_id VARCHAR(50) NOT NULL UNIQUE,
        department VARCHAR(100) NOT NULL,
        phone VARCHAR(20),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS counsellors (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL UNIQUE REFERENCES users (id) ON DELETE CASCADE,
        employee_id VARCHAR(50) NOT NULL UNIQUE,
        department VARCHAR(100) NOT NULL,
        phone VARCHAR(20),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Creates every declared table that does not already exist.
pub async fn ensure_schema(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    for (table, statement) in TABLES.iter().zip(CREATE_STATEMENTS) {
        debug!(table, "Ensuring table exists");
        sqlx::query(statement).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Drops every declared table and all rows in them. Irreversible.
pub async fn drop_schema(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    for table in TABLES.iter().rev() {
        debug!(table, "Dropping table");
        let statement = format!("DROP TABLE IF EXISTS {table} CASCADE");
        sqlx::query(&statement).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Drops and recreates the schema in a single transaction.
///
/// Postgres DDL is transactional, so if recreation fails the old tables and
/// their rows are still there afterwards.
pub async fn rebuild_schema(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    let mut tx = conn.begin().await?;
    drop_schema(&mut *tx).await?;
    ensure_schema(&mut *tx).await?;
    tx.commit().await?;

    info!("Schema dropped and recreated");
    Ok(())
}

/// Reports whether every declared table is present.
pub async fn schema_exists(conn: &mut PgConnection) -> Result<bool, sqlx::Error> {
    let present: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM information_schema.tables
         WHERE table_schema = current_schema() AND table_name::text = ANY($1)",
    )
    .bind(&TABLES[..])
    .fetch_one(&mut *conn)
    .await?;

    Ok(present == TABLES.len() as i64)
}
