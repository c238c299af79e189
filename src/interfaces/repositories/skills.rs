use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::skill::{Skill, SkillCategory, SkillInsert, UpdateSkillRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Skill, AppError>;
    /// Highest sort_order currently used in the category, None when empty.
    async fn max_order_in_category(&self, category: SkillCategory) -> Result<Option<i32>, AppError>;
    async fn insert_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError>;
    async fn update_skill(&self, id: &Uuid, patch: &UpdateSkillRequest) -> Result<Skill, AppError>;
    async fn set_skill_order(&self, id: &Uuid, sort_order: i32) -> Result<(), AppError>;
    async fn toggle_study(&self, id: &Uuid) -> Result<Skill, AppError>;
    async fn update_study_notes(&self, id: &Uuid, notes: &str) -> Result<Skill, AppError>;
    async fn update_proficiency(&self, id: &Uuid, proficiency: i16) -> Result<Skill, AppError>;
    async fn study_list(&self) -> Result<Vec<Skill>, AppError>;
    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;
    async fn count_by_category(&self) -> Result<Vec<(SkillCategory, i64)>, AppError>;
    async fn top_skills(&self, limit: i64) -> Result<Vec<Skill>, AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT * FROM skills ORDER BY category, sort_order, id"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn get_skill_by_id(&self, id: &Uuid) -> Result<Skill, AppError> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"SELECT * FROM skills WHERE id = $1"#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".into()))?;

        Ok(skill)
    }

    async fn max_order_in_category(&self, category: SkillCategory) -> Result<Option<i32>, AppError> {
        let max: Option<i32> = sqlx::query_scalar(
            r#"SELECT MAX(sort_order) FROM skills WHERE category = $1"#
        )
        .bind(category)
        .fetch_one(&self.pool)
        .await?;

        Ok(max)
    }

    async fn insert_skill(&self, skill: &SkillInsert) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, category, sort_order, proficiency, to_study, study_notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#
        )
        .bind(&skill.name)
        .bind(skill.category)
        .bind(skill.sort_order)
        .bind(skill.proficiency)
        .bind(skill.to_study)
        .bind(&skill.study_notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_skill(&self, id: &Uuid, patch: &UpdateSkillRequest) -> Result<Skill, AppError> {
        let updated = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                sort_order = COALESCE($4, sort_order),
                proficiency = COALESCE($5, proficiency),
                to_study = COALESCE($6, to_study),
                study_notes = COALESCE($7, study_notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(&patch.name)
        .bind(patch.category)
        .bind(patch.sort_order)
        .bind(patch.proficiency)
        .bind(patch.to_study)
        .bind(&patch.study_notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".into()))?;

        Ok(updated)
    }

    async fn set_skill_order(&self, id: &Uuid, sort_order: i32) -> Result<(), AppError> {
        sqlx::query(
            r#"UPDATE skills SET sort_order = $2, updated_at = NOW() WHERE id = $1"#
        )
        .bind(id)
        .bind(sort_order)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)
        .map(|result| {
            if result.rows_affected() == 0 {
                Err(AppError::NotFound("Skill not found".into()))
            } else {
                Ok(())
            }
        })?
    }

    async fn toggle_study(&self, id: &Uuid) -> Result<Skill, AppError> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills SET to_study = NOT to_study, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".into()))?;

        Ok(skill)
    }

    async fn update_study_notes(&self, id: &Uuid, notes: &str) -> Result<Skill, AppError> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills SET study_notes = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".into()))?;

        Ok(skill)
    }

    async fn update_proficiency(&self, id: &Uuid, proficiency: i16) -> Result<Skill, AppError> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills SET proficiency = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(proficiency)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".into()))?;

        Ok(skill)
    }

    async fn study_list(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT * FROM skills WHERE to_study = TRUE ORDER BY category, sort_order, id"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query(r#"DELETE FROM skills WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound("Skill not found".into()))
                } else {
                    Ok(())
                }
            })?
    }

    async fn count_by_category(&self) -> Result<Vec<(SkillCategory, i64)>, AppError> {
        let counts = sqlx::query_as::<_, (SkillCategory, i64)>(
            r#"SELECT category, COUNT(*) FROM skills GROUP BY category ORDER BY category"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }

    async fn top_skills(&self, limit: i64) -> Result<Vec<Skill>, AppError> {
        // Single global ranking over sort_order; category and id only break ties.
        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT * FROM skills ORDER BY sort_order, category, id LIMIT $1"#
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }
}
