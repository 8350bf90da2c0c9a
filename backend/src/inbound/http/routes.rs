//! Route table for the HTTP adapter.

use actix_web::web;

use super::{directory, health, members, sessions};

/// Register every page, fragment and probe endpoint.
///
/// Handlers expect `web::Data<HttpState>` and `web::Data<HealthState>` in
/// app data and a session middleware around them.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(directory::index)
        .service(members::show)
        .service(members::edit_description)
        .service(members::edit_profile)
        .service(members::update_description)
        .service(members::update_profile)
        .service(sessions::new_session)
        .service(sessions::create_session)
        .service(sessions::destroy_session)
        .service(health::up)
        .service(health::ready)
        .service(health::live);
}
