use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::ApiError;
use crate::models::{Schedule, ScheduleUpdate};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    name: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Schedule>>, ApiError> {
    match params.name {
        Some(name) => Ok(Json(vec![state.store.get_schedule_by_name(&name).await?])),
        None => Ok(Json(state.store.list_schedules().await)),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(mut schedule): Json<Schedule>,
) -> Result<(StatusCode, Json<Schedule>), ApiError> {
    schedule.id = Uuid::new_v4();
    let created = state.store.create_schedule(schedule).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Schedule>, ApiError> {
    Ok(Json(state.store.get_schedule(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(updates): Json<ScheduleUpdate>,
) -> Result<Json<Schedule>, ApiError> {
    Ok(Json(state.store.update_schedule(id, updates).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_schedule(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
