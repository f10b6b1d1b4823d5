use serde::Deserialize;
use tracing::instrument;

use crate::{
    error::AppResult,
    models::{FilmRatings, RatingsCorpus, SimilarityScore},
};

/// Pairwise similarity function between two users' ratings
///
/// Both functions return 0 when the users share no rated film, and a higher
/// score means the users rate more alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMetric {
    /// `1 / (1 + sqrt(sum of squared rating differences))`
    #[default]
    Euclidean,
    /// Pearson correlation of the shared ratings, in -1..=1
    Pearson,
}

impl SimilarityMetric {
    pub fn score(&self, a: &FilmRatings, b: &FilmRatings) -> f64 {
        match self {
            SimilarityMetric::Euclidean => euclidean_score(a, b),
            SimilarityMetric::Pearson => pearson_score(a, b),
        }
    }
}

/// Pairs of ratings for every film both users rated
fn shared_ratings(a: &FilmRatings, b: &FilmRatings) -> Vec<(f64, f64)> {
    a.iter()
        .filter_map(|(film, &x)| b.get(film).map(|&y| (f64::from(x), f64::from(y))))
        .collect()
}

pub fn euclidean_score(a: &FilmRatings, b: &FilmRatings) -> f64 {
    let shared = shared_ratings(a, b);
    if shared.is_empty() {
        return 0.0;
    }

    let squared_diff: f64 = shared.iter().map(|(x, y)| (x - y).powi(2)).sum();
    1.0 / (1.0 + squared_diff.sqrt())
}

pub fn pearson_score(a: &FilmRatings, b: &FilmRatings) -> f64 {
    let shared = shared_ratings(a, b);
    if shared.is_empty() {
        return 0.0;
    }

    let n = shared.len() as f64;
    let sum_x: f64 = shared.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = shared.iter().map(|(_, y)| y).sum();
    let sum_xx: f64 = shared.iter().map(|(x, _)| x * x).sum();
    let sum_yy: f64 = shared.iter().map(|(_, y)| y * y).sum();
    let sum_xy: f64 = shared.iter().map(|(x, y)| x * y).sum();

    let sxy = sum_xy - sum_x * sum_y / n;
    let sxx = sum_xx - sum_x * sum_x / n;
    let syy = sum_yy - sum_y * sum_y / n;

    if sxx * syy <= f64::EPSILON {
        return 0.0;
    }

    sxy / (sxx * syy).sqrt()
}

/// Finds the `num_users` users most similar to `user`
///
/// Only users sharing at least one rated film with `user` are considered.
/// Results are ordered by descending score; equal scores keep corpus order
/// (user name ascending).
#[instrument(skip(corpus))]
pub fn find_similar_users(
    corpus: &RatingsCorpus,
    user: &str,
    num_users: usize,
    metric: SimilarityMetric,
) -> AppResult<Vec<SimilarityScore>> {
    let target = corpus.ratings_for(user)?;

    let mut scores: Vec<SimilarityScore> = corpus
        .users()
        .filter(|(name, _)| *name != user)
        .filter(|(_, films)| films.keys().any(|film| target.contains_key(film)))
        .map(|(name, films)| SimilarityScore {
            user: name.to_string(),
            score: metric.score(target, films),
        })
        .collect();

    // Stable sort keeps name order among ties
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scores.truncate(num_users);

    tracing::debug!(neighbors = ?scores, "Ranked similar users");

    Ok(scores)
}
