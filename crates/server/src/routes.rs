use std::sync::atomic::Ordering;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::{DatabaseHealth, Health, ServiceInfo, ServiceKind};
use service::provision;

use crate::errors::ApiError;
use crate::state::AppState;

mod accessories;
mod activities;
mod pets;

/// `GET /` — service identity banner.
async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: state.kind.app_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

/// `GET /health` — connectivity check that doubles as the provisioner.
///
/// The first successful call walks the container through Unverified to
/// Ready, creating schema and sample data when missing; later calls only
/// verify connectivity.
async fn health(State(state): State<AppState>) -> Result<Json<Health>, ApiError> {
    let db = state.db_or_provision().await?;

    let mut message = None;
    if !state.ready.load(Ordering::Acquire) {
        let report =
            provision::ensure_ready(state.kind, db, &state.settings.container_name).await?;
        state.ready.store(true, Ordering::Release);
        if report.created {
            message = Some(format!(
                "container {} created and seeded",
                state.settings.container_name
            ));
        }
    }

    Ok(Json(Health {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: DatabaseHealth {
            status: "connected".to_string(),
            database: state.settings.database_name.clone(),
            container: state.settings.container_name.clone(),
            message,
        },
    }))
}

/// Build the full application router for one service kind.
pub fn build_router(kind: ServiceKind, state: AppState) -> Router {
    let api = match kind {
        ServiceKind::Pets => pets::router(),
        ServiceKind::Activities => activities::router(),
        ServiceKind::Accessories => accessories::router(),
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new().level(Level::INFO).include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
