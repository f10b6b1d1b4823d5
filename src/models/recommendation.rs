use serde::Serialize;
use std::fmt::Display;

/// Maximum number of films in either recommendation list
pub const MAX_LIST_LEN: usize = 5;

/// Similarity between the target user and another user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityScore {
    pub user: String,
    pub score: f64,
}

/// Films the target user should and should not watch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recommendations {
    pub recommended: Vec<String>,
    pub not_recommended: Vec<String>,
}

impl Display for Recommendations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Recommended films:")?;
        write_numbered(f, &self.recommended)?;
        writeln!(f)?;
        writeln!(f, "Not recommended films:")?;
        write_numbered(f, &self.not_recommended)
    }
}

fn write_numbered(f: &mut std::fmt::Formatter<'_>, films: &[String]) -> std::fmt::Result {
    for (rank, film) in films.iter().enumerate() {
        writeln!(f, "{}: {}", rank + 1, film)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_numbered_lists() {
        let recs = Recommendations {
            recommended: vec!["Up".to_string(), "Heat".to_string()],
            not_recommended: vec!["Cats".to_string()],
        };

        assert_eq!(
            recs.to_string(),
            "Recommended films:\n1: Up\n2: Heat\n\nNot recommended films:\n1: Cats\n"
        );
    }

    #[test]
    fn test_display_empty_lists() {
        let recs = Recommendations::default();
        assert_eq!(
            recs.to_string(),
            "Recommended films:\n\nNot recommended films:\n"
        );
    }
}
