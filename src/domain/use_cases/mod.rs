pub mod analytics;
pub mod messages;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod visitors;
