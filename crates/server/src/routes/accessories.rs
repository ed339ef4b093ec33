use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use common::pagination::ListPage;
use models::accessory::{self, AccessoryCreate, AccessoryUpdate};
use service::{accessory_service, errors::ServiceError};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AccessoryListParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "lowStockOnly", default)]
    pub low_stock_only: bool,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

async fn list(
    State(state): State<AppState>,
    Query(params): Query<AccessoryListParams>,
) -> Result<Json<Vec<accessory::Model>>, ApiError> {
    let db = state.db().await?;
    let filters = accessory_service::AccessoryFilters {
        search: params.search,
        kind: params.kind,
        low_stock_only: params.low_stock_only,
    };
    let page = ListPage::new(params.limit, params.offset)
        .map_err(|e| ServiceError::Validation(e.to_string()))?;
    Ok(Json(
        accessory_service::list_accessories(db, &filters, page).await?,
    ))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<AccessoryCreate>,
) -> Result<(StatusCode, Json<accessory::Model>), ApiError> {
    let db = state.db().await?;
    let created = accessory_service::create_accessory(db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<accessory::Model>, ApiError> {
    let db = state.db().await?;
    let found = accessory_service::get_accessory(db, &id)
        .await?
        .ok_or_else(|| ServiceError::not_found("accessory", &id))?;
    Ok(Json(found))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<AccessoryUpdate>,
) -> Result<Json<accessory::Model>, ApiError> {
    let db = state.db().await?;
    Ok(Json(
        accessory_service::update_accessory(db, &id, patch).await?,
    ))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let db = state.db().await?;
    accessory_service::delete_accessory(db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/accessories", get(list).post(create))
        .route(
            "/api/accessories/:id",
            get(get_one).patch(update).delete(remove),
        )
}
