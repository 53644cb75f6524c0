use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::error;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiError;
use crate::models::Schedule;
use crate::scheduler::{CancelToken, Config, FailedSession, Input, Output};
use crate::server::AppState;
use crate::store::Store;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    pub name: Option<String>,
    pub config: Option<Config>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Output>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailedSession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Generates a schedule from the current rooms, courses, and demands
/// without persisting it.
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let input = snapshot_input(&state.store, req.config).await;
    let output = state.scheduler.generate(&input, &CancelToken::new())?;

    Ok(Json(GenerateResponse {
        schedule: None,
        failures: output.failures.clone(),
        output: Some(output),
        error: None,
    }))
}

/// Generates a schedule and saves it under the requested name.
///
/// When generation succeeds but saving fails, the generated output is
/// still returned alongside the error so the caller does not lose it.
pub async fn generate_and_save(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), ApiError> {
    let name = match req.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ApiError::bad_request("name is required")),
    };

    let input = snapshot_input(&state.store, req.config).await;
    let output = state.scheduler.generate(&input, &CancelToken::new())?;

    let schedule = Schedule {
        id: Uuid::new_v4(),
        name,
        sessions: output.scheduled_sessions.clone(),
        created_at: None,
    };

    match state.store.create_schedule(schedule).await {
        Ok(saved) => Ok((
            StatusCode::CREATED,
            Json(GenerateResponse {
                schedule: Some(saved),
                failures: output.failures.clone(),
                output: Some(output),
                error: None,
            }),
        )),
        Err(err) => {
            error!("schedule generated but failed to save: {err}");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenerateResponse {
                    schedule: None,
                    failures: output.failures.clone(),
                    output: Some(output),
                    error: Some(format!("schedule generated but failed to save: {err}")),
                }),
            ))
        }
    }
}

/// Snapshots the store into an immutable generator input.
async fn snapshot_input(store: &Store, config: Option<Config>) -> Input {
    Input {
        config,
        rooms: store.list_rooms().await,
        courses: store.list_courses().await,
        demands: store.list_demands().await,
    }
}
