use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/weeks.json", get(handlers::weeks_file))
        .route("/api/weeks", get(handlers::get_weeks))
        .with_state(state)
}
