use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::errors::{AppError, DirectoryError};

// The IntoResponse trait implementation converts AppError into a well-formed HTTP response.
// The JSON bodies mirror what the frontend expects: {"success": false, "error": "..."}.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Missing or malformed request fields are bad requests
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": msg })),
            )
                .into_response(),

            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "error": "Invalid email or password." })),
            )
                .into_response(),

            AppError::InvalidUserId => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": "Invalid user ID format." })),
            )
                .into_response(),

            // Directory errors have specific status codes
            AppError::Directory(err) => convert_directory_error(err),

            // Template errors are internal server errors
            AppError::Template(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": format!("Template error: {}", e) })),
            )
                .into_response(),
        }
    }
}

// Helper function to convert directory errors to responses
fn convert_directory_error(err: DirectoryError) -> Response {
    match err {
        DirectoryError::DuplicateEmail => (
            StatusCode::CONFLICT,
            Json(json!({ "success": false, "error": "Email already registered." })),
        )
            .into_response(),

        DirectoryError::UserNotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "User not found." })),
        )
            .into_response(),
    }
}
