use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use common::pagination::ListPage;
use models::activity::{self, ActivityCreate};
use service::{activity_service, errors::ServiceError};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ActivityListParams {
    #[serde(rename = "petId")]
    pub pet_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

async fn list(
    State(state): State<AppState>,
    Query(params): Query<ActivityListParams>,
) -> Result<Json<Vec<activity::Model>>, ApiError> {
    let db = state.db().await?;
    let filters = activity_service::ActivityFilters {
        pet_id: params.pet_id,
        kind: params.kind,
        from: params.from,
        to: params.to,
    };
    let page = ListPage::new(params.limit, params.offset)
        .map_err(|e| ServiceError::Validation(e.to_string()))?;
    Ok(Json(
        activity_service::list_activities(db, &filters, page).await?,
    ))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<ActivityCreate>,
) -> Result<(StatusCode, Json<activity::Model>), ApiError> {
    let db = state.db().await?;
    let created = activity_service::create_activity(db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<activity::Model>, ApiError> {
    let db = state.db().await?;
    let found = activity_service::get_activity(db, &id)
        .await?
        .ok_or_else(|| ServiceError::not_found("activity", &id))?;
    Ok(Json(found))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let db = state.db().await?;
    activity_service::delete_activity(db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Activities are immutable; there is no PATCH route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/activities", get(list).post(create))
        .route("/api/activities/:id", get(get_one).delete(remove))
}
