use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use crate::models::{RoomType, RoomTypeUpdate};
use crate::server::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<RoomType>> {
    Json(state.store.list_room_types().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(room_type): Json<RoomType>,
) -> Result<(StatusCode, Json<RoomType>), ApiError> {
    let created = state.store.create_room_type(room_type).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RoomType>, ApiError> {
    Ok(Json(state.store.get_room_type(&name).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(updates): Json<RoomTypeUpdate>,
) -> Result<Json<RoomType>, ApiError> {
    Ok(Json(state.store.update_room_type(&name, updates).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_room_type(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
