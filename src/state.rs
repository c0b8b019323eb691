use attendance_config::SetupConfig;
use attendance_core::SetupError;
use sqlx::PgPool;

/// Everything a bootstrap step needs, passed explicitly to each operation.
#[derive(Clone, Debug)]
pub struct SetupContext {
    pub db: PgPool,
    pub config: SetupConfig,
}

impl SetupContext {
    pub fn new(db: PgPool, config: SetupConfig) -> Self {
        Self { db, config }
    }

    /// Opens the database pool described by `config`.
    pub async fn connect(config: SetupConfig) -> Result<Self, SetupError> {
        let db = attendance_db::connect(&config.database)
            .await
            .map_err(SetupError::Connection)?;
        Ok(Self::new(db, config))
    }
}
