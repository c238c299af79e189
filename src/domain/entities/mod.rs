pub mod featured_project;
pub mod message;
pub mod profile_setting;
pub mod reorder;
pub mod skill;
pub mod visit;
