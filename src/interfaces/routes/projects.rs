use actix_web::web;
use crate::handlers::featured_projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/featured-projects")
            .service(
                web::resource("")
                    .route(web::get().to(featured_projects::list_projects))
                    .route(web::post().to(featured_projects::create_project))
            )
            .service(
                web::resource("/reorder")
                    .route(web::post().to(featured_projects::reorder_projects))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::put().to(featured_projects::update_project))
                    .route(web::delete().to(featured_projects::delete_project))
            )
    );
}
