use crate::errors::AppError;
use crate::loader::Loader;
use crate::models::{LoadState, WeeksResponse};
use crate::state::AppState;
use crate::surface::{CardGrid, StatusLine};
use crate::ui::render_index;
use axum::{
    extract::State,
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{Html, IntoResponse},
    Json,
};
use tokio::fs;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let (_, status, grid) = load_page(&state).await;
    Html(render_index(&status, &grid))
}

pub async fn get_weeks(State(state): State<AppState>) -> Json<WeeksResponse> {
    let (load_state, status, grid) = load_page(&state).await;
    Json(WeeksResponse {
        state: load_state,
        status: status.current().clone(),
        cards: grid.into_cards(),
    })
}

pub async fn weeks_file(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = fs::read(&state.weeks_path).await?;
    Ok((
        [(CONTENT_TYPE, "application/json"), (CACHE_CONTROL, "no-store")],
        body,
    ))
}

/// One page view: fresh surfaces, one load.
async fn load_page(state: &AppState) -> (LoadState, StatusLine, CardGrid) {
    let mut status = StatusLine::default();
    let mut grid = CardGrid::default();
    let load_state = Loader::new(state.source.as_ref(), &mut status, &mut grid)
        .run()
        .await;
    (load_state, status, grid)
}
