use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::ApiError;
use crate::models::{Building, BuildingUpdate};
use crate::server::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Building>> {
    Json(state.store.list_buildings().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(mut building): Json<Building>,
) -> Result<(StatusCode, Json<Building>), ApiError> {
    building.id = Uuid::new_v4();
    let created = state.store.create_building(building).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Building>, ApiError> {
    Ok(Json(state.store.get_building(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(updates): Json<BuildingUpdate>,
) -> Result<Json<Building>, ApiError> {
    Ok(Json(state.store.update_building(id, updates).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_building(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
