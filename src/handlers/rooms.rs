use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::ApiError;
use crate::models::{Room, RoomUpdate};
use crate::server::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Room>> {
    Json(state.store.list_rooms().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(mut room): Json<Room>,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    room.id = Uuid::new_v4();
    let created = state.store.create_room(room).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Room>, ApiError> {
    Ok(Json(state.store.get_room(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(updates): Json<RoomUpdate>,
) -> Result<Json<Room>, ApiError> {
    Ok(Json(state.store.update_room(id, updates).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_room(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
