use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::featured_project::{FeaturedProject, UpdateFeaturedProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

/// Fully-resolved row values for a new project, order already assigned.
#[derive(Debug)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

#[async_trait]
pub trait FeaturedProjectRepository: Send + Sync {
    async fn list_projects(&self, active_only: bool) -> Result<Vec<FeaturedProject>, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<FeaturedProject, AppError>;
    /// Highest sort_order across all projects, None when there are none.
    async fn max_order(&self) -> Result<Option<i32>, AppError>;
    async fn insert_project(&self, project: &ProjectInsert) -> Result<FeaturedProject, AppError>;
    async fn update_project(
        &self,
        id: &Uuid,
        patch: &UpdateFeaturedProjectRequest,
    ) -> Result<FeaturedProject, AppError>;
    async fn set_project_order(&self, id: &Uuid, sort_order: i32) -> Result<(), AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl FeaturedProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, active_only: bool) -> Result<Vec<FeaturedProject>, AppError> {
        let projects = sqlx::query_as::<_, FeaturedProject>(
            r#"
            SELECT * FROM featured_projects
            WHERE ($1::boolean IS FALSE OR is_active = TRUE)
            ORDER BY sort_order, id
            "#
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<FeaturedProject, AppError> {
        let project = sqlx::query_as::<_, FeaturedProject>(
            r#"SELECT * FROM featured_projects WHERE id = $1"#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Featured project not found".into()))?;

        Ok(project)
    }

    async fn max_order(&self) -> Result<Option<i32>, AppError> {
        let max: Option<i32> = sqlx::query_scalar(
            r#"SELECT MAX(sort_order) FROM featured_projects"#
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(max)
    }

    async fn insert_project(&self, project: &ProjectInsert) -> Result<FeaturedProject, AppError> {
        let created = sqlx::query_as::<_, FeaturedProject>(
            r#"
            INSERT INTO featured_projects (
                title, description, image_url, project_url, github_url,
                technologies, sort_order, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.project_url)
        .bind(&project.github_url)
        .bind(&project.technologies)
        .bind(project.sort_order)
        .bind(project.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_project(
        &self,
        id: &Uuid,
        patch: &UpdateFeaturedProjectRequest,
    ) -> Result<FeaturedProject, AppError> {
        let updated = sqlx::query_as::<_, FeaturedProject>(
            r#"
            UPDATE featured_projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                project_url = COALESCE($5, project_url),
                github_url = COALESCE($6, github_url),
                technologies = COALESCE($7, technologies),
                sort_order = COALESCE($8, sort_order),
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(&patch.image_url)
        .bind(&patch.project_url)
        .bind(&patch.github_url)
        .bind(&patch.technologies)
        .bind(patch.sort_order)
        .bind(patch.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Featured project not found".into()))?;

        Ok(updated)
    }

    async fn set_project_order(&self, id: &Uuid, sort_order: i32) -> Result<(), AppError> {
        sqlx::query(
            r#"UPDATE featured_projects SET sort_order = $2, updated_at = NOW() WHERE id = $1"#
        )
        .bind(id)
        .bind(sort_order)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)
        .map(|result| {
            if result.rows_affected() == 0 {
                Err(AppError::NotFound("Featured project not found".into()))
            } else {
                Ok(())
            }
        })?
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query(r#"DELETE FROM featured_projects WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound("Featured project not found".into()))
                } else {
                    Ok(())
                }
            })?
    }
}
