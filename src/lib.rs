mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::db;

use repositories::sqlx_repo::{
    SqlxMessageRepo, SqlxProjectRepo, SqlxSettingsRepo, SqlxSkillRepo, SqlxVisitRepo,
};
use use_cases::{
    analytics::SkillAnalyticsHandler, messages::MessageHandler, profile::ProfileSettingsHandler,
    projects::FeaturedProjectHandler, skills::SkillHandler, visitors::VisitorAnalyticsHandler,
};

pub type AppSkillHandler = SkillHandler<SqlxSkillRepo>;
pub type AppSkillAnalyticsHandler = SkillAnalyticsHandler<SqlxSkillRepo>;
pub type AppProjectHandler = FeaturedProjectHandler<SqlxProjectRepo>;
pub type AppMessageHandler = MessageHandler<SqlxMessageRepo>;
pub type AppSettingsHandler = ProfileSettingsHandler<SqlxSettingsRepo>;
pub type AppVisitorHandler = VisitorAnalyticsHandler<SqlxVisitRepo>;

pub struct AppState {
    pub db_pool: sqlx::PgPool,
    pub skill_handler: AppSkillHandler,
    pub skill_analytics_handler: AppSkillAnalyticsHandler,
    pub project_handler: AppProjectHandler,
    pub message_handler: AppMessageHandler,
    pub settings_handler: AppSettingsHandler,
    pub visitor_handler: AppVisitorHandler,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let skill_repo = SqlxSkillRepo::new(pool.clone());

        AppState {
            skill_handler: SkillHandler::new(skill_repo.clone()),
            skill_analytics_handler: SkillAnalyticsHandler::new(skill_repo),
            project_handler: FeaturedProjectHandler::new(SqlxProjectRepo::new(pool.clone())),
            message_handler: MessageHandler::new(SqlxMessageRepo::new(pool.clone())),
            settings_handler: ProfileSettingsHandler::new(SqlxSettingsRepo::new(pool.clone())),
            visitor_handler: VisitorAnalyticsHandler::new(SqlxVisitRepo::new(pool.clone())),
            db_pool: pool,
        }
    }
}
