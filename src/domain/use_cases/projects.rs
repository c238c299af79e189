use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        featured_project::{FeaturedProject, NewFeaturedProject, UpdateFeaturedProjectRequest},
        reorder::{OrderUpdate, ReorderOutcome, ReorderReport},
    },
    errors::AppError,
    repositories::featured_projects::{FeaturedProjectRepository, ProjectInsert},
};

pub struct FeaturedProjectHandler<R>
where
    R: FeaturedProjectRepository,
{
    pub project_repo: R,
}

impl<R> FeaturedProjectHandler<R>
where
    R: FeaturedProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        FeaturedProjectHandler { project_repo }
    }

    /// Lists projects in display order, optionally only active ones.
    pub async fn list_projects(&self, active_only: bool) -> Result<Vec<FeaturedProject>, AppError> {
        self.project_repo.list_projects(active_only).await
    }

    /// Creates a project; order is global, appended to the end when omitted.
    pub async fn create_project(
        &self,
        request: NewFeaturedProject,
    ) -> Result<FeaturedProject, AppError> {
        request.validate()?;

        let sort_order = match request.sort_order {
            Some(order) => order,
            None => self.project_repo.max_order().await?.map_or(1, |max| max + 1),
        };

        let insert = ProjectInsert {
            title: request.title,
            description: request.description,
            image_url: request.image_url,
            project_url: request.project_url,
            github_url: request.github_url,
            technologies: request.technologies,
            sort_order,
            is_active: request.is_active,
        };

        self.project_repo.insert_project(&insert).await
    }

    pub async fn update_project(
        &self,
        id: &Uuid,
        request: UpdateFeaturedProjectRequest,
    ) -> Result<FeaturedProject, AppError> {
        request.validate()?;

        self.project_repo.update_project(id, &request).await
    }

    /// Same non-atomic batch semantics as skill reordering.
    pub async fn reorder_projects(
        &self,
        updates: Vec<OrderUpdate>,
    ) -> Result<ReorderReport, AppError> {
        let mut outcomes = Vec::with_capacity(updates.len());

        for update in updates {
            let outcome = match self
                .project_repo
                .set_project_order(&update.id, update.sort_order)
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

    pub async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        self.project_repo.delete_project(id).await
    }
}
