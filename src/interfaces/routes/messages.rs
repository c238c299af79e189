use actix_web::web;
use crate::handlers::messages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/messages")
            .service(
                web::resource("")
                    .route(web::get().to(messages::list_messages))
                    .route(web::post().to(messages::create_message))
            )
            .service(
                web::resource("/{message_id}/read")
                    .route(web::put().to(messages::mark_read))
            )
    );
}
