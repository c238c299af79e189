use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::profile_setting::{BatchSettingsRequest, SetSettingRequest},
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_all_settings(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let settings = state.settings_handler.get_all_settings().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": settings })))
}

#[instrument(skip(state))]
pub async fn get_setting(
    key: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let setting = state.settings_handler.get_setting(&key).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": setting })))
}

#[instrument(skip(state, data))]
pub async fn set_setting(
    key: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<SetSettingRequest>,
) -> Result<impl Responder, AppError> {
    let setting = state.settings_handler.set_setting(&key, &data.value).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Setting saved",
        "data": setting
    })))
}

/// 200 when every key succeeded, 207 with a per-key error list otherwise.
#[instrument(skip(state, data))]
pub async fn set_batch(
    state: web::Data<AppState>,
    data: web::Json<BatchSettingsRequest>,
) -> Result<impl Responder, AppError> {
    let report = state
        .settings_handler
        .set_batch(data.into_inner().settings)
        .await?;

    let response = if report.all_succeeded() {
        HttpResponse::Ok().json(serde_json::json!({
            "message": "All settings saved",
            "data": report.updated
        }))
    } else {
        HttpResponse::build(StatusCode::MULTI_STATUS).json(serde_json::json!({
            "message": "Some settings failed to save",
            "data": report.updated,
            "errors": report.errors
        }))
    };

    Ok(response)
}
