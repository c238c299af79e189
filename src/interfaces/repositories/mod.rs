pub mod featured_projects;
pub mod messages;
pub mod profile_settings;
pub mod skills;
pub mod sqlx_repo;
pub mod visits;
