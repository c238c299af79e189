use actix_web::web;
use crate::handlers::analytics;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/skill-analytics")
            .route(web::get().to(analytics::skill_analytics))
    );

    cfg.service(
        web::resource("/analytics")
            .route(web::get().to(analytics::visitor_analytics))
    );
}
