use crate::config::is_valid_login;
use crate::errors::AppError;
use crate::layout::build_layout;
use crate::models::{CalendarLayout, CalendarQuery};
use crate::source::fetch_or_empty;
use crate::state::AppState;
use crate::svg::render_svg;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;
use tracing::info;

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Html<String>, AppError> {
    let username = resolve_username(&state, &query)?;
    let layout = render_cycle(&state, &username).await;
    Ok(Html(render_index(&username, &layout)))
}

pub async fn calendar_svg(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    let username = resolve_username(&state, &query)?;
    let layout = render_cycle(&state, &username).await;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], render_svg(&layout)))
}

pub async fn calendar_json(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarLayout>, AppError> {
    let username = resolve_username(&state, &query)?;
    let layout = render_cycle(&state, &username).await;
    Ok(Json(layout.as_ref().clone()))
}

pub async fn health() -> &'static str {
    "ok"
}

async fn render_cycle(state: &AppState, username: &str) -> Arc<CalendarLayout> {
    let ticket = state.renders.begin(username);
    let calendar = fetch_or_empty(state.source.as_ref(), username).await;
    let layout = build_layout(&calendar);
    info!(
        "render {} for {username}: {} cells, {} month labels",
        ticket.generation(),
        layout.cells.len(),
        layout.month_labels.len()
    );
    ticket.settle(layout)
}

fn resolve_username(state: &AppState, query: &CalendarQuery) -> Result<String, AppError> {
    match query.user.as_deref().map(str::trim) {
        None | Some("") => Ok(state.config.username.clone()),
        Some(user) if is_valid_login(user) => Ok(user.to_string()),
        Some(_) => Err(AppError::bad_request(
            "user must be 1-39 letters, digits or hyphens",
        )),
    }
}
