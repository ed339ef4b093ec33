use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing::info;

use common::types::ServiceKind;
use common::utils::logging::init_logging_default;
use configs::Settings;

use crate::routes;
use crate::state::AppState;

/// Public entry: resolve settings, build the app for `kind` and run the HTTP
/// server until shutdown.
pub async fn run(kind: ServiceKind) -> anyhow::Result<()> {
    dotenv().ok();
    let settings = Settings::get(kind)?;
    let level = if settings.debug { "debug" } else { settings.log_level.as_str() };
    init_logging_default(level);

    let state = AppState::new(kind, settings.clone());
    let app = routes::build_router(kind, state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    info!(%addr, service = kind.app_name(), "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
