use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilmorateError {
    #[error("Incorrect parameter: {field}")]
    ValidationError { field: String, reason: String },

    #[error("Film with id {0} not found")]
    FilmNotFound(i64),

    #[error("User with id {0} wasn't found")]
    UserNotFound(i64),

    #[error("User with id {friend_id} is not a friend of user with id {user_id}")]
    FriendNotFound { user_id: i64, friend_id: i64 },

    #[error("Genre with id {0} not found")]
    GenreNotFound(i64),

    #[error("MPA rating with id {0} not found")]
    MpaNotFound(i64),

    #[error("Invalid argument {name}: {value}")]
    InvalidArgument { name: String, value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// How the boundary layer should report an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    BadRequest,
    Internal,
}

impl FilmorateError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        FilmorateError::ValidationError {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(name: &str, value: impl ToString) -> Self {
        FilmorateError::InvalidArgument {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FilmorateError::FilmNotFound(_)
            | FilmorateError::UserNotFound(_)
            | FilmorateError::FriendNotFound { .. }
            | FilmorateError::GenreNotFound(_)
            | FilmorateError::MpaNotFound(_) => ErrorCategory::NotFound,
            FilmorateError::ValidationError { .. } | FilmorateError::InvalidArgument { .. } => {
                ErrorCategory::BadRequest
            }
            FilmorateError::ConfigError { .. }
            | FilmorateError::IoError(_)
            | FilmorateError::TomlError(_) => ErrorCategory::Internal,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::NotFound => 404,
            ErrorCategory::BadRequest => 400,
            ErrorCategory::Internal => 500,
        }
    }

    /// Message safe to hand back to a caller. Internal failures are masked.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Internal => "An unexpected error occurred.".to_string(),
            _ => self.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

pub type Result<T> = std::result::Result<T, FilmorateError>;
