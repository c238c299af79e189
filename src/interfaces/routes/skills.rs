use actix_web::web;
use crate::handlers::skills;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(
                web::resource("")
                    .route(web::get().to(skills::list_skills))
                    .route(web::post().to(skills::create_skill))
            )
            .service(
                web::resource("/grouped")
                    .route(web::get().to(skills::grouped_skills))
            )
            .service(
                web::resource("/study-list")
                    .route(web::get().to(skills::study_list))
            )
            .service(
                web::resource("/reorder")
                    .route(web::post().to(skills::reorder_skills))
            )
            .service(
                web::resource("/{skill_id}")
                    .route(web::put().to(skills::update_skill))
                    .route(web::delete().to(skills::delete_skill))
            )
            .service(
                web::resource("/{skill_id}/toggle-study")
                    .route(web::put().to(skills::toggle_study))
            )
            .service(
                web::resource("/{skill_id}/notes")
                    .route(web::put().to(skills::update_study_notes))
            )
            .service(
                web::resource("/{skill_id}/proficiency")
                    .route(web::put().to(skills::update_proficiency))
            )
    );
}
