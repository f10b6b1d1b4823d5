use clap::Parser;

use crate::{
    config::Config,
    db::JsonFileStore,
    error::AppResult,
    models::Recommendations,
    services::{recommend_from_store, SimilarityMetric},
};

/// Recommend films a user should and should not watch
#[derive(Debug, Parser)]
#[command(name = "film-recs")]
#[command(about = "Find films similar users loved or hated")]
pub struct Args {
    /// Input user
    #[arg(long)]
    pub user: String,

    /// Ratings JSON file [default: $RATINGS_FILE or ratings.json]
    #[arg(long)]
    pub ratings: Option<String>,

    /// Number of similar users to draw films from [default: $NEIGHBOR_COUNT or 3]
    #[arg(long)]
    pub neighbors: Option<usize>,

    /// Similarity metric [default: $SIMILARITY_METRIC or euclidean]
    #[arg(long, value_enum)]
    pub metric: Option<SimilarityMetric>,
}

impl Args {
    /// Applies command-line overrides on top of `config`
    pub fn merge_into(&self, mut config: Config) -> Config {
        if let Some(ratings) = &self.ratings {
            config.ratings_file = ratings.clone();
        }
        if let Some(neighbors) = self.neighbors {
            config.neighbor_count = neighbors;
        }
        if let Some(metric) = self.metric {
            config.similarity_metric = metric;
        }
        config
    }
}

/// Runs one recommendation pass for the parsed arguments
pub fn run(args: &Args, config: Config) -> AppResult<Recommendations> {
    let config = args.merge_into(config);

    tracing::info!(
        user = %args.user,
        ratings_file = %config.ratings_file,
        neighbors = config.neighbor_count,
        metric = ?config.similarity_metric,
        "Generating recommendations"
    );

    let store = JsonFileStore::new(&config.ratings_file);
    recommend_from_store(
        &store,
        &args.user,
        config.neighbor_count,
        config.similarity_metric,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_user() {
        let args = Args::try_parse_from(["film-recs", "--user", "Paweł Czapiewski"]).unwrap();
        assert_eq!(args.user, "Paweł Czapiewski");
        assert!(args.ratings.is_none());
        assert!(args.neighbors.is_none());
        assert!(args.metric.is_none());
    }

    #[test]
    fn test_missing_user_rejected() {
        assert!(Args::try_parse_from(["film-recs"]).is_err());
    }

    #[test]
    fn test_unknown_metric_rejected() {
        let result = Args::try_parse_from(["film-recs", "--user", "A", "--metric", "cosine"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_overrides_config() {
        let args = Args::try_parse_from([
            "film-recs",
            "--user",
            "A",
            "--ratings",
            "other.json",
            "--neighbors",
            "7",
            "--metric",
            "pearson",
        ])
        .unwrap();

        let config = args.merge_into(Config::default());
        assert_eq!(config.ratings_file, "other.json");
        assert_eq!(config.neighbor_count, 7);
        assert_eq!(config.similarity_metric, SimilarityMetric::Pearson);
    }

    #[test]
    fn test_merge_keeps_config_when_unset() {
        let args = Args::try_parse_from(["film-recs", "--user", "A"]).unwrap();
        let config = Config {
            ratings_file: "env.json".to_string(),
            neighbor_count: 4,
            similarity_metric: SimilarityMetric::Pearson,
        };

        assert_eq!(args.merge_into(config.clone()), config);
    }
}
