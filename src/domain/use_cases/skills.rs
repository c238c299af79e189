use std::collections::BTreeMap;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        reorder::{OrderUpdate, ReorderOutcome, ReorderReport},
        skill::{
            NewSkill, Skill, SkillCategory, SkillInsert, UpdateProficiencyRequest,
            UpdateSkillRequest, UpdateStudyNotesRequest,
        },
    },
    errors::AppError,
    repositories::skills::SkillRepository,
};

const DEFAULT_PROFICIENCY: i16 = 100;

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillHandler { skill_repo }
    }

    /// Lists all skills ordered by (category, order).
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    /// Groups skills by category. Categories without skills are absent
    /// from the map rather than present with an empty list.
    pub async fn grouped_by_category(
        &self,
    ) -> Result<BTreeMap<SkillCategory, Vec<Skill>>, AppError> {
        let skills = self.skill_repo.list_skills().await?;

        let mut grouped: BTreeMap<SkillCategory, Vec<Skill>> = BTreeMap::new();
        for skill in skills {
            grouped.entry(skill.category).or_default().push(skill);
        }

        Ok(grouped)
    }

    /// Creates a skill. When no order is given it is appended to the end
    /// of its category: max(order in category) + 1, or 1 for an empty one.
    pub async fn create_skill(&self, request: NewSkill) -> Result<Skill, AppError> {
        request.validate()?;

        let sort_order = match request.sort_order {
            Some(order) => order,
            None => self
                .skill_repo
                .max_order_in_category(request.category)
                .await?
                .map_or(1, |max| max + 1),
        };

        let insert = SkillInsert {
            name: request.name,
            category: request.category,
            sort_order,
            proficiency: request.proficiency.unwrap_or(DEFAULT_PROFICIENCY),
            to_study: request.to_study,
            study_notes: request.study_notes,
        };

        self.skill_repo.insert_skill(&insert).await
    }

    /// Applies a partial update; validation runs before any mutation.
    pub async fn update_skill(
        &self,
        id: &Uuid,
        request: UpdateSkillRequest,
    ) -> Result<Skill, AppError> {
        request.validate()?;

        self.skill_repo.update_skill(id, &request).await
    }

    /// Applies each order update independently and reports per-item
    /// outcomes. A failing item does not roll back earlier ones.
    pub async fn reorder_skills(&self, updates: Vec<OrderUpdate>) -> Result<ReorderReport, AppError> {
        let mut outcomes = Vec::with_capacity(updates.len());

        for update in updates {
            let outcome = match self
                .skill_repo
                .set_skill_order(&update.id, update.sort_order)
                .await
            {
                Ok(()) => ReorderOutcome {
                    id: update.id,
                    ok: true,
                    error: None,
                },
                Err(e) => ReorderOutcome {
                    id: update.id,
                    ok: false,
                    error: Some(e.to_string()),
                },
            };
            outcomes.push(outcome);
        }

        Ok(ReorderReport::from_outcomes(outcomes))
    }

    /// Flips the to_study flag and returns the updated skill.
    pub async fn toggle_study(&self, id: &Uuid) -> Result<Skill, AppError> {
        self.skill_repo.toggle_study(id).await
    }

    pub async fn update_study_notes(
        &self,
        id: &Uuid,
        request: UpdateStudyNotesRequest,
    ) -> Result<Skill, AppError> {
        self.skill_repo.update_study_notes(id, &request.study_notes).await
    }

    pub async fn update_proficiency(
        &self,
        id: &Uuid,
        request: UpdateProficiencyRequest,
    ) -> Result<Skill, AppError> {
        request.validate()?;

        self.skill_repo.update_proficiency(id, request.proficiency).await
    }

    /// Skills flagged for study, ordered by (category, order).
    pub async fn study_list(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.study_list().await
    }

    pub async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        self.skill_repo.delete_skill(id).await
    }
}
