use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{AppError, AppResult};

/// Lowest rating on the scale
pub const MIN_RATING: u8 = 1;
/// Highest rating on the scale
pub const MAX_RATING: u8 = 10;

/// One user's ratings keyed by film title
pub type FilmRatings = BTreeMap<String, u8>;

/// The full user → film → rating dataset
///
/// Users and films are kept in ascending title order so every scan over the
/// corpus is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingsCorpus {
    users: BTreeMap<String, FilmRatings>,
}

impl RatingsCorpus {
    /// Parses and validates a corpus from its JSON representation
    pub fn from_json(json: &str) -> AppResult<Self> {
        let corpus: RatingsCorpus = serde_json::from_str(json)?;
        corpus.validate()?;
        Ok(corpus)
    }

    /// Rejects any rating outside the 1–10 scale
    pub fn validate(&self) -> AppResult<()> {
        for (user, films) in &self.users {
            for (film, rating) in films {
                if !(MIN_RATING..=MAX_RATING).contains(rating) {
                    return Err(AppError::InvalidInput(format!(
                        "{} rated {} as {}, expected {}-{}",
                        user, film, rating, MIN_RATING, MAX_RATING
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the films rated by `user`
    pub fn ratings_for(&self, user: &str) -> AppResult<&FilmRatings> {
        self.users
            .get(user)
            .ok_or_else(|| AppError::UserNotFound(user.to_string()))
    }

    /// Rating `user` gave `film`, if any
    pub fn rating(&self, user: &str, film: &str) -> Option<u8> {
        self.users.get(user).and_then(|films| films.get(film)).copied()
    }

    pub fn contains_user(&self, user: &str) -> bool {
        self.users.contains_key(user)
    }

    /// Iterates users with their ratings in name order
    pub fn users(&self) -> impl Iterator<Item = (&str, &FilmRatings)> {
        self.users.iter().map(|(name, films)| (name.as_str(), films))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Anna": {"Up": 8, "Heat": 3},
        "Bartek": {"Heat": 9}
    }"#;

    #[test]
    fn test_from_json() {
        let corpus = RatingsCorpus::from_json(SAMPLE).unwrap();
        assert_eq!(corpus.len(), 2);
        assert!(corpus.contains_user("Anna"));
        assert_eq!(corpus.rating("Anna", "Up"), Some(8));
        assert_eq!(corpus.rating("Bartek", "Up"), None);
    }

    #[test]
    fn test_users_in_name_order() {
        let corpus =
            RatingsCorpus::from_json(r#"{"Zofia": {}, "Adam": {}, "Kasia": {}}"#).unwrap();
        let names: Vec<&str> = corpus.users().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Adam", "Kasia", "Zofia"]);
    }

    #[test]
    fn test_ratings_for_missing_user() {
        let corpus = RatingsCorpus::from_json(SAMPLE).unwrap();
        let result = corpus.ratings_for("Nobody");
        assert!(matches!(result, Err(AppError::UserNotFound(name)) if name == "Nobody"));
    }

    #[test]
    fn test_rejects_out_of_scale_rating() {
        let result = RatingsCorpus::from_json(r#"{"Anna": {"Up": 0}}"#);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));

        let result = RatingsCorpus::from_json(r#"{"Anna": {"Up": 11}}"#);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_non_integer_rating() {
        let result = RatingsCorpus::from_json(r#"{"Anna": {"Up": 7.5}}"#);
        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = RatingsCorpus::from_json("{}").unwrap();
        assert!(corpus.is_empty());
    }
}
