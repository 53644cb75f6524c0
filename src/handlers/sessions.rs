use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::ApiError;
use crate::models::{SessionDemand, SessionDemandUpdate};
use crate::server::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<SessionDemand>> {
    Json(state.store.list_demands().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(mut demand): Json<SessionDemand>,
) -> Result<(StatusCode, Json<SessionDemand>), ApiError> {
    demand.id = Uuid::new_v4();
    let created = state.store.create_demand(demand).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionDemand>, ApiError> {
    Ok(Json(state.store.get_demand(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(updates): Json<SessionDemandUpdate>,
) -> Result<Json<SessionDemand>, ApiError> {
    Ok(Json(state.store.update_demand(id, updates).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_demand(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
