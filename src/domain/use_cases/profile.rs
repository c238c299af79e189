use validator::Validate;

use crate::{
    entities::profile_setting::{
        BatchSettingsReport, ProfileSetting, SettingFailure, SettingUpsert,
    },
    errors::AppError,
    repositories::profile_settings::ProfileSettingsRepository,
};

pub struct ProfileSettingsHandler<R>
where
    R: ProfileSettingsRepository,
{
    pub settings_repo: R,
}

impl<R> ProfileSettingsHandler<R>
where
    R: ProfileSettingsRepository,
{
    pub fn new(settings_repo: R) -> Self {
        ProfileSettingsHandler { settings_repo }
    }

    pub async fn get_setting(&self, key: &str) -> Result<ProfileSetting, AppError> {
        self.settings_repo.get_setting(key).await
    }

    pub async fn get_all_settings(&self) -> Result<Vec<ProfileSetting>, AppError> {
        self.settings_repo.get_all_settings().await
    }

    /// Upserts a single key.
    pub async fn set_setting(&self, key: &str, value: &str) -> Result<ProfileSetting, AppError> {
        let upsert = SettingUpsert {
            key: key.to_string(),
            value: value.to_string(),
        };
        upsert.validate()?;

        self.settings_repo.set_setting(&upsert.key, &upsert.value).await
    }

    /// Applies each upsert independently; a failing key is reported and
    /// does not roll back keys that already succeeded.
    pub async fn set_batch(&self, settings: Vec<SettingUpsert>) -> Result<BatchSettingsReport, AppError> {
        let mut updated = Vec::new();
        let mut errors = Vec::new();

        for upsert in settings {
            if let Err(e) = upsert.validate() {
                errors.push(SettingFailure {
                    key: upsert.key,
                    error: AppError::from(e).to_string(),
                });
                continue;
            }

            match self.settings_repo.set_setting(&upsert.key, &upsert.value).await {
                Ok(setting) => updated.push(setting),
                Err(e) => errors.push(SettingFailure {
                    key: upsert.key,
                    error: e.to_string(),
                }),
            }
        }

        Ok(BatchSettingsReport { updated, errors })
    }
}
