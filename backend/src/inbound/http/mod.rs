//! HTTP inbound adapter serving pages and partial-update fragments.

pub mod directory;
pub mod error;
pub mod health;
pub mod members;
pub mod negotiation;
pub mod response;
pub mod routes;
pub mod session;
pub mod session_config;
pub mod sessions;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::ApiResult;
