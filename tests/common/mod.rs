use attendance::SetupContext;
use attendance_config::{DatabaseConfig, SetupConfig, StorageConfig};
use sqlx::PgPool;
use std::path::Path;
use uuid::Uuid;

/// Lowest bcrypt cost, keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

/// Builds a context over the test pool with storage directories under `root`.
pub fn test_context(pool: PgPool, root: &Path) -> SetupContext {
    let config = SetupConfig {
        database: DatabaseConfig::new("postgres://managed-by-sqlx-test"),
        storage: StorageConfig {
            upload_dir: root.join("uploads"),
            face_storage_dir: root.join("student_faces"),
        },
        bcrypt_cost: TEST_BCRYPT_COST,
    };
    SetupContext::new(pool, config)
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Row counts for users, students, teachers, counsellors.
pub async fn table_counts(pool: &PgPool) -> [i64; 4] {
    [
        count_rows(pool, "users").await,
        count_rows(pool, "students").await,
        count_rows(pool, "teachers").await,
        count_rows(pool, "counsellors").await,
    ]
}

/// Inserts an identity outside the baseline set.
#[allow(dead_code)]
pub async fn create_extra_user(pool: &PgPool, username: &str, email: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO users (username, email, password, full_name, role)
         VALUES ($1, $2, 'not-a-hash', 'Extra User', 'STUDENT')
         RETURNING id",
    )
    .bind(username)
    .bind(email)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn usernames(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar("SELECT username FROM users ORDER BY username")
        .fetch_all(pool)
        .await
        .unwrap()
}
