pub mod analytics;
pub mod featured_projects;
pub mod json_error;
pub mod messages;
pub mod profile;
pub mod skills;
pub mod system;
