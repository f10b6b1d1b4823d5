pub mod ratings;
pub mod recommendation;

pub use ratings::{FilmRatings, RatingsCorpus, MAX_RATING, MIN_RATING};
pub use recommendation::{Recommendations, SimilarityScore, MAX_LIST_LEN};
