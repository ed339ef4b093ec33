use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use common::pagination::ListPage;
use models::pet::{self, PetCreate, PetUpdate};
use service::{errors::ServiceError, pet_service};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PetListParams {
    pub search: Option<String>,
    pub species: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

async fn list(
    State(state): State<AppState>,
    Query(params): Query<PetListParams>,
) -> Result<Json<Vec<pet::Model>>, ApiError> {
    let db = state.db().await?;
    let filters = pet_service::PetFilters {
        search: params.search,
        species: params.species,
    };
    let page = ListPage::new(params.limit, params.offset)
        .map_err(|e| ServiceError::Validation(e.to_string()))?;
    Ok(Json(pet_service::list_pets(db, &filters, page).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<PetCreate>,
) -> Result<(StatusCode, Json<pet::Model>), ApiError> {
    let db = state.db().await?;
    let created = pet_service::create_pet(db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<pet::Model>, ApiError> {
    let db = state.db().await?;
    let found = pet_service::get_pet(db, &id)
        .await?
        .ok_or_else(|| ServiceError::not_found("pet", &id))?;
    Ok(Json(found))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<PetUpdate>,
) -> Result<Json<pet::Model>, ApiError> {
    let db = state.db().await?;
    Ok(Json(pet_service::update_pet(db, &id, patch).await?))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let db = state.db().await?;
    pet_service::delete_pet(db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pets", get(list).post(create))
        .route("/api/pets/:id", get(get_one).patch(update).delete(remove))
}
