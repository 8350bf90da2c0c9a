//! Backend entry-point: loads configuration, seeds the member store and
//! serves the directory.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::{DefaultClock, DefaultEnv};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use backend::outbound::persistence::InMemoryMemberRepository;
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Settings come from the environment and config files only.
    let program = || std::env::args_os().take(1);
    let server_settings = ServerSettings::load_from_iter(program())
        .map_err(|e| std::io::Error::other(format!("server settings: {e}")))?;
    let bind_addr = server_settings.bind_addr()?;

    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(|e| std::io::Error::other(format!("session settings: {e}")))?;
    info!(
        fingerprint = %session.key_fingerprint(),
        cookie_secure = session.cookie_secure,
        "session key loaded"
    );

    let members = Arc::new(InMemoryMemberRepository::new(Arc::new(DefaultClock)));
    #[cfg(feature = "example-data")]
    seed(&members, program()).await?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
        members,
    );
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await
}

#[cfg(feature = "example-data")]
async fn seed(
    members: &InMemoryMemberRepository,
    args: impl IntoIterator<Item = std::ffi::OsString>,
) -> std::io::Result<()> {
    use backend::example_data::{ExampleDataSettings, seed_example_data_on_startup};
    use mockable::Clock;

    let settings = ExampleDataSettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("example data settings: {e}")))?;
    let today = DefaultClock.utc().date_naive();
    seed_example_data_on_startup(&settings, members, today)
        .await
        .map_err(std::io::Error::other)?;
    Ok(())
}
