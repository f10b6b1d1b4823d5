use std::collections::HashSet;

use tracing::instrument;

use crate::{
    db::RatingsStore,
    error::AppResult,
    models::{
        FilmRatings, RatingsCorpus, Recommendations, SimilarityScore, MAX_LIST_LEN, MAX_RATING,
        MIN_RATING,
    },
    services::similarity::{find_similar_users, SimilarityMetric},
};

/// Generates watch / don't-watch lists for `user`
///
/// Ranks the `num_users` most similar users, then pulls the films they rated
/// that `user` has not seen, bucketed by rating level.
#[instrument(skip(corpus))]
pub fn recommend(
    corpus: &RatingsCorpus,
    user: &str,
    num_users: usize,
    metric: SimilarityMetric,
) -> AppResult<Recommendations> {
    let target_films = corpus.ratings_for(user)?;
    let neighbors = find_similar_users(corpus, user, num_users, metric)?;

    let recommendations = extract_recommendations(corpus, target_films, &neighbors);

    tracing::info!(
        neighbor_count = neighbors.len(),
        recommended = recommendations.recommended.len(),
        not_recommended = recommendations.not_recommended.len(),
        "Built recommendations"
    );

    Ok(recommendations)
}

/// Loads the corpus from `store` and generates recommendations for `user`
pub fn recommend_from_store(
    store: &dyn RatingsStore,
    user: &str,
    num_users: usize,
    metric: SimilarityMetric,
) -> AppResult<Recommendations> {
    tracing::debug!(store = store.name(), "Loading ratings");
    let corpus = store.load()?;
    recommend(&corpus, user, num_users, metric)
}

/// Builds both lists from an already-ranked neighbor set
///
/// The recommended list scans levels 10 down to 1, the not-recommended list
/// scans 1 up to 10. Within a level, films are taken in candidate order. A
/// film never lands on both lists.
pub fn extract_recommendations(
    corpus: &RatingsCorpus,
    target_films: &FilmRatings,
    neighbors: &[SimilarityScore],
) -> Recommendations {
    let candidates = candidate_films(corpus, target_films, neighbors);

    let recommended = scan_levels(
        corpus,
        &candidates,
        neighbors,
        (MIN_RATING..=MAX_RATING).rev(),
        &HashSet::new(),
    );

    let already_recommended: HashSet<&str> = recommended.iter().map(String::as_str).collect();
    let not_recommended = scan_levels(
        corpus,
        &candidates,
        neighbors,
        MIN_RATING..=MAX_RATING,
        &already_recommended,
    );

    Recommendations {
        recommended,
        not_recommended,
    }
}

/// Films rated by any neighbor but not by the target user
///
/// Ordered by discovery: neighbors in rank order, then each neighbor's films
/// in title order.
pub fn candidate_films(
    corpus: &RatingsCorpus,
    target_films: &FilmRatings,
    neighbors: &[SimilarityScore],
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for neighbor in neighbors {
        let Ok(films) = corpus.ratings_for(&neighbor.user) else {
            tracing::warn!(user = %neighbor.user, "Neighbor missing from corpus");
            continue;
        };

        for film in films.keys() {
            if !target_films.contains_key(film) && seen.insert(film.as_str()) {
                candidates.push(film.clone());
            }
        }
    }

    candidates
}

fn scan_levels(
    corpus: &RatingsCorpus,
    candidates: &[String],
    neighbors: &[SimilarityScore],
    levels: impl Iterator<Item = u8>,
    excluded: &HashSet<&str>,
) -> Vec<String> {
    let mut picked: Vec<String> = Vec::new();

    for level in levels {
        for film in candidates {
            if picked.len() >= MAX_LIST_LEN {
                return picked;
            }
            if excluded.contains(film.as_str()) || picked.contains(film) {
                continue;
            }

            let rated_at_level = neighbors
                .iter()
                .any(|n| corpus.rating(&n.user, film) == Some(level));
            if rated_at_level {
                picked.push(film.clone());
            }
        }
    }

    picked
}
