use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    BACKEND_SKILL_TARGET, BACKEND_WEIGHT, DEVOPS_SKILL_TARGET, DEVOPS_WEIGHT,
    FRONTEND_SKILL_TARGET, FRONTEND_WEIGHT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Devops,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Devops,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Devops => "devops",
        }
    }

    /// Skill count at which this category scores 100.
    pub fn target(&self) -> i64 {
        match self {
            SkillCategory::Frontend => FRONTEND_SKILL_TARGET,
            SkillCategory::Backend => BACKEND_SKILL_TARGET,
            SkillCategory::Devops => DEVOPS_SKILL_TARGET,
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            SkillCategory::Frontend => FRONTEND_WEIGHT,
            SkillCategory::Backend => BACKEND_WEIGHT,
            SkillCategory::Devops => DEVOPS_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub proficiency: i16,
    pub to_study: bool,
    pub study_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewSkill {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    pub category: SkillCategory,

    #[serde(default, rename = "order")]
    pub sort_order: Option<i32>,

    #[validate(range(min = 1, max = 100, message = "Proficiency must be between 1 and 100"))]
    #[serde(default)]
    pub proficiency: Option<i16>,

    #[serde(default)]
    pub to_study: bool,

    #[serde(default, deserialize_with = "coerce_notes")]
    pub study_notes: String,
}

/// Fully-resolved row values, order already assigned.
#[derive(Debug)]
pub struct SkillInsert {
    pub name: String,
    pub category: SkillCategory,
    pub sort_order: i32,
    pub proficiency: i16,
    pub to_study: bool,
    pub study_notes: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub category: Option<SkillCategory>,

    #[serde(default, rename = "order")]
    pub sort_order: Option<i32>,

    #[validate(range(min = 1, max = 100, message = "Proficiency must be between 1 and 100"))]
    pub proficiency: Option<i16>,

    pub to_study: Option<bool>,

    // Absent means "leave as is"; present-but-null still coerces to "".
    #[serde(default, deserialize_with = "coerce_notes_patch")]
    pub study_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderSkillsRequest {
    pub skills: Vec<crate::entities::reorder::OrderUpdate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStudyNotesRequest {
    #[serde(default, deserialize_with = "coerce_notes")]
    pub study_notes: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProficiencyRequest {
    #[validate(range(min = 1, max = 100, message = "Proficiency must be between 1 and 100"))]
    pub proficiency: i16,
}

/// Stored notes are never NULL: a missing, null or non-string value
/// becomes an empty string before validation.
fn coerce_notes<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        _ => String::new(),
    })
}

fn coerce_notes_patch<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    coerce_notes(deserializer).map(Some)
}
