use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/calendar.svg", get(handlers::calendar_svg))
        .route("/api/calendar", get(handlers::calendar_json))
        .route("/healthz", get(handlers::health))
        .with_state(state)
}
