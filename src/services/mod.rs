pub mod recommendations;
pub mod similarity;

pub use recommendations::{recommend, recommend_from_store};
pub use similarity::{find_similar_users, SimilarityMetric};
