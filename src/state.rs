use crate::source::Source;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub weeks_path: PathBuf,
    pub source: Arc<Source>,
}

impl AppState {
    pub fn new(weeks_path: PathBuf, source: Source) -> Self {
        Self {
            weeks_path,
            source: Arc::new(source),
        }
    }
}
