use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use super::ApiError;
use crate::models::{Course, CourseUpdate, SessionDemand};
use crate::server::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.store.list_courses().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(mut course): Json<Course>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    course.id = Uuid::new_v4();
    let created = state.store.create_course(course).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Course>, ApiError> {
    Ok(Json(state.store.get_course(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(updates): Json<CourseUpdate>,
) -> Result<Json<Course>, ApiError> {
    Ok(Json(state.store.update_course(id, updates).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_course(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists the session demands belonging to one course.
pub async fn sessions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<SessionDemand>>, ApiError> {
    state.store.get_course(id).await?;
    Ok(Json(state.store.list_demands_for_course(id).await))
}
