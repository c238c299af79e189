use chrono::Utc;
use mockall::mock;
use mockall::predicate::eq;

use portfolio_cms::entities::profile_setting::{ProfileSetting, SettingUpsert};
use portfolio_cms::errors::AppError;
use portfolio_cms::repositories::profile_settings::ProfileSettingsRepository;
use portfolio_cms::use_cases::profile::ProfileSettingsHandler;

mock! {
    pub SettingsRepo {}

    #[async_trait::async_trait]
    impl ProfileSettingsRepository for SettingsRepo {
        async fn get_setting(&self, key: &str) -> Result<ProfileSetting, AppError>;
        async fn get_all_settings(&self) -> Result<Vec<ProfileSetting>, AppError>;
        async fn set_setting(&self, key: &str, value: &str) -> Result<ProfileSetting, AppError>;
    }
}

fn setting(key: &str, value: &str) -> ProfileSetting {
    ProfileSetting {
        key: key.to_string(),
        value: value.to_string(),
        updated_at: Utc::now(),
    }
}

fn upserts(pairs: &[(&str, &str)]) -> Vec<SettingUpsert> {
    pairs
        .iter()
        .map(|(key, value)| SettingUpsert {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect()
}

#[tokio::test]
async fn batch_with_all_valid_keys_reports_no_errors() {
    let mut repo = MockSettingsRepo::new();
    repo.expect_set_setting()
        .times(2)
        .returning(|key, value| Ok(setting(key, value)));

    let handler = ProfileSettingsHandler::new(repo);
    let report = handler
        .set_batch(upserts(&[("bio", "Rust developer"), ("email", "me@example.com")]))
        .await
        .unwrap();

    assert!(report.all_succeeded());
    assert_eq!(report.updated.len(), 2);
}

#[tokio::test]
async fn batch_keeps_applying_after_a_failed_key() {
    let mut repo = MockSettingsRepo::new();
    repo.expect_set_setting()
        .with(eq("bio"), eq("updated"))
        .times(1)
        .returning(|key, value| Ok(setting(key, value)));
    repo.expect_set_setting()
        .with(eq("avatar"), eq("x"))
        .times(1)
        .returning(|_, _| Err(AppError::InternalError("storage unavailable".into())));
    repo.expect_set_setting()
        .with(eq("tagline"), eq("builder"))
        .times(1)
        .returning(|key, value| Ok(setting(key, value)));

    let handler = ProfileSettingsHandler::new(repo);
    let report = handler
        .set_batch(upserts(&[
            ("bio", "updated"),
            ("avatar", "x"),
            ("tagline", "builder"),
        ]))
        .await
        .unwrap();

    assert!(!report.all_succeeded());
    assert_eq!(report.updated.len(), 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].key, "avatar");
}

#[tokio::test]
async fn batch_rejects_empty_key_without_touching_storage() {
    let mut repo = MockSettingsRepo::new();
    repo.expect_set_setting()
        .with(eq("bio"), eq("kept"))
        .times(1)
        .returning(|key, value| Ok(setting(key, value)));

    let handler = ProfileSettingsHandler::new(repo);
    let report = handler
        .set_batch(upserts(&[("", "dropped"), ("bio", "kept")]))
        .await
        .unwrap();

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].key, "");
    assert_eq!(report.updated.len(), 1);
}

#[tokio::test]
async fn single_set_validates_key_length() {
    let mut repo = MockSettingsRepo::new();
    repo.expect_set_setting().never();

    let long_key = "k".repeat(101);
    let handler = ProfileSettingsHandler::new(repo);
    let result = handler.set_setting(&long_key, "value").await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}
