use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use log::info;

use crate::config::AppConfig;
use crate::handlers::{
    buildings, courses, room_types, rooms, schedules, scheduler as scheduler_handlers, sessions,
};
use crate::scheduler::{GreedyScheduler, Scheduler, TotalTime};
use crate::store::Store;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub scheduler: Arc<dyn Scheduler>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Store::new()),
            scheduler: Arc::new(GreedyScheduler::new(TotalTime)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/buildings", get(buildings::list).post(buildings::create))
        .route(
            "/buildings/{id}",
            get(buildings::get)
                .put(buildings::update)
                .delete(buildings::delete),
        )
        .route("/room-types", get(room_types::list).post(room_types::create))
        .route(
            "/room-types/{name}",
            get(room_types::get)
                .put(room_types::update)
                .delete(room_types::delete),
        )
        .route("/rooms", get(rooms::list).post(rooms::create))
        .route(
            "/rooms/{id}",
            get(rooms::get).put(rooms::update).delete(rooms::delete),
        )
        .route("/courses", get(courses::list).post(courses::create))
        .route(
            "/courses/{id}",
            get(courses::get)
                .put(courses::update)
                .delete(courses::delete),
        )
        .route("/courses/{id}/sessions", get(courses::sessions))
        .route("/sessions", get(sessions::list).post(sessions::create))
        .route(
            "/sessions/{id}",
            get(sessions::get)
                .put(sessions::update)
                .delete(sessions::delete),
        )
        .route("/schedules", get(schedules::list).post(schedules::create))
        .route(
            "/schedules/{id}",
            get(schedules::get)
                .put(schedules::update)
                .delete(schedules::delete),
        )
        .route("/scheduler/generate", post(scheduler_handlers::generate))
        .route(
            "/scheduler/generate-and-save",
            post(scheduler_handlers::generate_and_save),
        )
}

pub async fn run_server(config: &AppConfig) {
    let app = router(AppState::new());

    let listener = tokio::net::TcpListener::bind(&config.addr).await.unwrap();

    info!("server running at http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
