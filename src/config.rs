use serde::Deserialize;

use crate::{error::AppResult, services::SimilarityMetric};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the ratings JSON file
    #[serde(default = "default_ratings_file")]
    pub ratings_file: String,

    /// Number of similar users to draw films from
    #[serde(default = "default_neighbor_count")]
    pub neighbor_count: usize,

    /// Pairwise similarity function used to rank neighbors
    #[serde(default)]
    pub similarity_metric: SimilarityMetric,
}

fn default_ratings_file() -> String {
    "ratings.json".to_string()
}

fn default_neighbor_count() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ratings_file: default_ratings_file(),
            neighbor_count: default_neighbor_count(),
            similarity_metric: SimilarityMetric::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }
}
