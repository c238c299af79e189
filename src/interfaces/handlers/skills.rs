use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::skill::{
        NewSkill, ReorderSkillsRequest, UpdateProficiencyRequest, UpdateSkillRequest,
        UpdateStudyNotesRequest,
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.list_skills().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": skills })))
}

#[instrument(skip(state))]
pub async fn grouped_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let grouped = state.skill_handler.grouped_by_category().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": grouped })))
}

#[instrument(skip(state))]
pub async fn study_list(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.study_list().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": skills })))
}

#[instrument(skip(state, data))]
pub async fn create_skill(
    state: web::Data<AppState>,
    data: web::Json<NewSkill>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.create_skill(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Skill created",
        "data": skill
    })))
}

#[instrument(skip(state, data))]
pub async fn update_skill(
    skill_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<UpdateSkillRequest>,
) -> Result<impl Responder, AppError> {
    let skill = state
        .skill_handler
        .update_skill(&skill_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Skill updated",
        "data": skill
    })))
}

#[instrument(skip(state, data))]
pub async fn reorder_skills(
    state: web::Data<AppState>,
    data: web::Json<ReorderSkillsRequest>,
) -> Result<impl Responder, AppError> {
    let report = state
        .skill_handler
        .reorder_skills(data.into_inner().skills)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Applied {} of {} order updates", report.applied, report.applied + report.failed),
        "data": report
    })))
}

#[instrument(skip(state))]
pub async fn toggle_study(
    skill_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.toggle_study(&skill_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Study flag toggled",
        "data": skill
    })))
}

#[instrument(skip(state, data))]
pub async fn update_study_notes(
    skill_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<UpdateStudyNotesRequest>,
) -> Result<impl Responder, AppError> {
    let skill = state
        .skill_handler
        .update_study_notes(&skill_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Study notes updated",
        "data": skill
    })))
}

#[instrument(skip(state, data))]
pub async fn update_proficiency(
    skill_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProficiencyRequest>,
) -> Result<impl Responder, AppError> {
    let skill = state
        .skill_handler
        .update_proficiency(&skill_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Proficiency updated",
        "data": skill
    })))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    skill_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.delete_skill(&skill_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
