use actix_web::web;

use crate::handlers::system::{health_check, home};

mod analytics;
mod messages;
mod profile;
mod projects;
mod skills;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(skills::config_routes)
            .configure(analytics::config_routes)
            .configure(projects::config_routes)
            .configure(messages::config_routes)
            .configure(profile::config_routes)
    );
}
