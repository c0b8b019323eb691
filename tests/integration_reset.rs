mod common;

use attendance::cli::reset::{ResetOutcome, reset_database};
use attendance::cli::setup::setup_database;
use common::{create_extra_user, table_counts, test_context, usernames};
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_declined_reset_changes_nothing(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let ctx = test_context(pool.clone(), dir.path());
    setup_database(&ctx).await.unwrap();
    create_extra_user(&pool, "extra", "extra@example.com").await;

    let snapshot: Vec<(String, String)> =
        sqlx::query_as("SELECT id::text, password FROM users ORDER BY username")
            .fetch_all(&pool)
            .await
            .unwrap();
    let counts = table_counts(&pool).await;

    for response in ["no", "", "y", "yes please"] {
        let outcome = reset_database(&ctx, response).await.unwrap();
        assert_eq!(outcome, ResetOutcome::Cancelled);
    }

    let after: Vec<(String, String)> =
        sqlx::query_as("SELECT id::text, password FROM users ORDER BY username")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(after, snapshot);
    assert_eq!(table_counts(&pool).await, counts);
}

#[sqlx::test(migrations = false)]
async fn test_confirmed_reset_restores_only_baseline(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let ctx = test_context(pool.clone(), dir.path());
    setup_database(&ctx).await.unwrap();
    create_extra_user(&pool, "extra", "extra@example.com").await;
    let old_student_id: String =
        sqlx::query_scalar("SELECT id::text FROM users WHERE username = 'student1'")
            .fetch_one(&pool)
            .await
            .unwrap();

    let outcome = reset_database(&ctx, "YES\n").await.unwrap();

    let ResetOutcome::Completed(report) = outcome else {
        panic!("confirmed reset must complete");
    };
    assert_eq!(report.seed.created.len(), 3);
    assert_eq!(
        usernames(&pool).await,
        vec!["counsellor1", "student1", "teacher1"]
    );
    assert_eq!(table_counts(&pool).await, [3, 1, 1, 1]);

    let new_student_id: String =
        sqlx::query_scalar("SELECT id::text FROM users WHERE username = 'student1'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_ne!(new_student_id, old_student_id);
}

#[sqlx::test(migrations = false)]
async fn test_reset_on_empty_database_bootstraps(pool: PgPool) {
    let dir = tempfile::tempdir().unwrap();
    let ctx = test_context(pool.clone(), dir.path());

    let outcome = reset_database(&ctx, "yes").await.unwrap();

    assert!(matches!(outcome, ResetOutcome::Completed(_)));
    assert_eq!(table_counts(&pool).await, [3, 1, 1, 1]);
    assert!(dir.path().join("student_faces").is_dir());
}
