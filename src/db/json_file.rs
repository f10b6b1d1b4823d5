use std::path::PathBuf;

use tracing::instrument;

use super::RatingsStore;
use crate::{error::AppResult, models::RatingsCorpus};

/// Reads the corpus from a JSON file of `{user: {film: rating}}`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RatingsStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> AppResult<RatingsCorpus> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            tracing::error!(error = %e, "Failed to read ratings file");
            e
        })?;

        let corpus = RatingsCorpus::from_json(&contents)?;

        tracing::info!(user_count = corpus.len(), "Loaded ratings corpus");

        Ok(corpus)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}
