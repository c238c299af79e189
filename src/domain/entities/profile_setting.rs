use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProfileSetting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SetSettingRequest {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SettingUpsert {
    #[validate(length(min = 1, max = 100, message = "Key must be 1-100 characters"))]
    pub key: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchSettingsRequest {
    pub settings: Vec<SettingUpsert>,
}

/// Per-key failure from a batch update; successes are not listed.
#[derive(Debug, Serialize)]
pub struct SettingFailure {
    pub key: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct BatchSettingsReport {
    pub updated: Vec<ProfileSetting>,
    pub errors: Vec<SettingFailure>,
}

impl BatchSettingsReport {
    pub fn all_succeeded(&self) -> bool {
        self.errors.is_empty()
    }
}
