use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::visit::AnalyticsQuery, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn skill_analytics(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let analytics = state.skill_analytics_handler.skill_analytics().await?;

    Ok(HttpResponse::Ok().json(analytics))
}

#[instrument(skip(state, query))]
pub async fn visitor_analytics(
    state: web::Data<AppState>,
    query: web::Query<AnalyticsQuery>,
) -> Result<impl Responder, AppError> {
    let analytics = state.visitor_handler.visitor_analytics(query.period).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "data": analytics })))
}
