use actix_web::web;
use crate::handlers::profile;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile-settings")
            .service(
                web::resource("")
                    .route(web::get().to(profile::get_all_settings))
            )
            .service(
                web::resource("/batch")
                    .route(web::post().to(profile::set_batch))
            )
            .service(
                web::resource("/{key}")
                    .route(web::get().to(profile::get_setting))
                    .route(web::put().to(profile::set_setting))
            )
    );
}
