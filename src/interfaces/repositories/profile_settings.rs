use async_trait::async_trait;

use crate::{
    entities::profile_setting::ProfileSetting,
    errors::AppError,
    repositories::sqlx_repo::SqlxSettingsRepo,
};

#[async_trait]
pub trait ProfileSettingsRepository: Send + Sync {
    async fn get_setting(&self, key: &str) -> Result<ProfileSetting, AppError>;
    async fn get_all_settings(&self) -> Result<Vec<ProfileSetting>, AppError>;
    /// Upsert: inserts the key or overwrites its value.
    async fn set_setting(&self, key: &str, value: &str) -> Result<ProfileSetting, AppError>;
}

impl SqlxSettingsRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSettingsRepo { pool }
    }
}

#[async_trait]
impl ProfileSettingsRepository for SqlxSettingsRepo {
    async fn get_setting(&self, key: &str) -> Result<ProfileSetting, AppError> {
        let setting = sqlx::query_as::<_, ProfileSetting>(
            r#"SELECT * FROM profile_settings WHERE key = $1"#
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Setting '{}' not found", key)))?;

        Ok(setting)
    }

    async fn get_all_settings(&self) -> Result<Vec<ProfileSetting>, AppError> {
        let settings = sqlx::query_as::<_, ProfileSetting>(
            r#"SELECT * FROM profile_settings ORDER BY key"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(settings)
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<ProfileSetting, AppError> {
        let setting = sqlx::query_as::<_, ProfileSetting>(
            r#"
            INSERT INTO profile_settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()
            RETURNING *
            "#
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await?;

        Ok(setting)
    }
}
