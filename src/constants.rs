use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Skill counts at which a category is considered fully covered.
pub const FRONTEND_SKILL_TARGET: i64 = 5;
pub const BACKEND_SKILL_TARGET: i64 = 5;
pub const DEVOPS_SKILL_TARGET: i64 = 3;

/// Category weights for the overall seniority score. Must sum to 1.0.
pub const FRONTEND_WEIGHT: f64 = 0.35;
pub const BACKEND_WEIGHT: f64 = 0.35;
pub const DEVOPS_WEIGHT: f64 = 0.30;

pub const SENIOR_CUTOFF: f64 = 85.0;
pub const MID_LEVEL_CUTOFF: f64 = 60.0;

pub const TOP_SKILLS_LIMIT: i64 = 5;

pub const RECENT_VISITORS_LIMIT: i64 = 10;
