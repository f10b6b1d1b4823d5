/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Cannot find {0} in the dataset")]
    UserNotFound(String),

    #[error("Ratings file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed ratings data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] envy::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_found_message() {
        let err = AppError::UserNotFound("Paweł".to_string());
        assert_eq!(err.to_string(), "Cannot find Paweł in the dataset");
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Json(_)));
    }
}
