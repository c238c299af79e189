use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::featured_project::{
        NewFeaturedProject, ReorderProjectsRequest, UpdateFeaturedProjectRequest,
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state, query))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let active_only = query.get("active").map_or(false, |v| v == "true");

    let projects = state.project_handler.list_projects(active_only).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": projects })))
}

#[instrument(skip(state, data))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<NewFeaturedProject>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.create_project(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Featured project created",
        "data": project
    })))
}

#[instrument(skip(state, data))]
pub async fn update_project(
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<UpdateFeaturedProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .update_project(&project_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Featured project updated",
        "data": project
    })))
}

#[instrument(skip(state, data))]
pub async fn reorder_projects(
    state: web::Data<AppState>,
    data: web::Json<ReorderProjectsRequest>,
) -> Result<impl Responder, AppError> {
    let report = state
        .project_handler
        .reorder_projects(data.into_inner().projects)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Applied {} of {} order updates", report.applied, report.applied + report.failed),
        "data": report
    })))
}

#[instrument(skip(state))]
pub async fn delete_project(
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&project_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
