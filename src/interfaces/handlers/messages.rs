use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{entities::message::NewMessage, errors::AppError, AppState};

#[instrument(skip(state, data))]
pub async fn create_message(
    state: web::Data<AppState>,
    data: web::Json<NewMessage>,
) -> Result<impl Responder, AppError> {
    let message = state.message_handler.create_message(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Your message has been received.",
        "data": message
    })))
}

#[instrument(skip(state))]
pub async fn list_messages(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let response = state.message_handler.list_messages().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": response })))
}

#[instrument(skip(state))]
pub async fn mark_read(
    message_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message = state.message_handler.mark_read(&message_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Message marked as read",
        "data": message
    })))
}
