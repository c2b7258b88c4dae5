use crate::date::today_at;
use crate::errors::LoadError;
use crate::models::{LoadState, Status, WeekRecord, WeeksResource};
use crate::render::{RenderOutcome, render_weeks};
use crate::source::WeeksSource;
use crate::surface::{GridSurface, StatusSurface};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info};

pub const LOADING_MESSAGE: &str = "Loading weeks…";

/// Shown for every failed load, whatever went wrong.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load weeks. If you opened this as a file, run a local server (e.g., python -m http.server).";

/// Runs a single load: fetch the weeks, pick the current one, fill the surfaces.
pub struct Loader<S, St, G> {
    source: S,
    status: St,
    grid: G,
    state: LoadState,
}

impl<S, St, G> Loader<S, St, G>
where
    S: WeeksSource,
    St: StatusSurface,
    G: GridSurface,
{
    pub fn new(source: S, status: St, grid: G) -> Self {
        Self {
            source,
            status,
            grid,
            state: LoadState::Loading,
        }
    }

    pub async fn run(&mut self) -> LoadState {
        self.run_at(Utc::now()).await
    }

    pub async fn run_at(&mut self, now: DateTime<Utc>) -> LoadState {
        self.state = LoadState::Loading;
        self.status.set_status(&Status::info(LOADING_MESSAGE));

        match self.load(now).await {
            Ok(outcome) => {
                info!(
                    cards = outcome.cards.len(),
                    current = outcome.has_current(),
                    "rendered weeks"
                );
                outcome.apply(&mut self.grid, &mut self.status);
                self.state = LoadState::Success;
            }
            Err(err) => {
                error!("failed to load weeks: {err}");
                self.grid.clear();
                self.status.set_status(&Status::error(LOAD_ERROR_MESSAGE));
                self.state = LoadState::Failure;
            }
        }

        self.state
    }

    async fn load(&self, now: DateTime<Utc>) -> Result<RenderOutcome, LoadError> {
        let today = today_at(now);
        let weeks = self.fetch_weeks().await?;
        Ok(render_weeks(&weeks, &today))
    }

    async fn fetch_weeks(&self) -> Result<Vec<WeekRecord>, LoadError> {
        let resource = self.source.resource();
        let fetched = self.source.fetch().await?;
        if !fetched.is_success() {
            return Err(LoadError::Transport {
                resource,
                status: fetched.status,
            });
        }

        parse_weeks(&resource, &fetched.body)
    }
}

/// Resolves a `weeks.json` body to its non-empty list of records.
pub fn parse_weeks(resource: &str, body: &[u8]) -> Result<Vec<WeekRecord>, LoadError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let shape_error = || LoadError::Shape {
        resource: resource.to_string(),
    };

    let weeks = WeeksResource::deserialize(value)
        .map_err(|_| shape_error())?
        .into_weeks();
    if weeks.is_empty() {
        return Err(shape_error());
    }

    Ok(weeks)
}
