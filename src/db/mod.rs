use crate::{error::AppResult, models::RatingsCorpus};

pub mod json_file;

pub use json_file::JsonFileStore;

/// Source of the ratings corpus
///
/// The corpus is loaded once and then held read-only for the lifetime of the
/// process, so stores only need to produce it in full.
#[cfg_attr(test, mockall::automock)]
pub trait RatingsStore {
    /// Loads and validates the whole corpus
    fn load(&self) -> AppResult<RatingsCorpus>;

    /// Store name for logging
    fn name(&self) -> &'static str;
}
