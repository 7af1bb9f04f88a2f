// Defines a custom error type and a result type alias for the application using the thiserror crate.
use thiserror::Error;

// Make the response module public
pub mod response;

pub use crate::services::DirectoryError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Invalid user ID format.")]
    InvalidUserId,

    // The #[from] attribute automatically converts a DirectoryError into an AppError using the From trait.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Template error: {0}")]
    Template(#[from] std::io::Error),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
