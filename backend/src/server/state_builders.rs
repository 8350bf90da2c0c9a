//! Builders for shared handler state.

use actix_web::web;

use backend::inbound::http::state::HttpState;

use super::ServerConfig;

/// Wire the domain services over the configured member store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::from_repository(config.members.clone()))
}
