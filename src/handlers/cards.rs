use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::generator;
use crate::models::{GenerateRequest, SaveRequest};
use crate::services::UserDirectory;

#[axum::debug_handler]
pub async fn generate_flashcards(Json(request): Json<GenerateRequest>) -> Response {
    if request.notes.trim().is_empty() {
        // This endpoint answers with a bare {"error": ...} object, not the
        // {"success": false, ...} shape the other endpoints use.
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No notes provided." })),
        )
            .into_response();
    }

    let cards = generator::generate(&request.notes);
    tracing::debug!("Generated {} flashcards", cards.len());
    Json(cards).into_response()
}

#[axum::debug_handler]
pub async fn save_flashcards(
    State((directory, _config)): State<(UserDirectory, Config)>,
    Json(request): Json<SaveRequest>,
) -> AppResult<Response> {
    let cards = match request.flashcards {
        Some(cards) if !cards.is_empty() => cards,
        _ => {
            return Err(AppError::Validation(
                "Missing user ID or flashcards data.".into(),
            ))
        }
    };
    let user_id = request
        .user_id
        .ok_or_else(|| AppError::Validation("Missing user ID or flashcards data.".into()))?
        .parse()
        .ok_or(AppError::InvalidUserId)?;

    tracing::info!("Saving flashcards - User ID: {}, Cards: {}", user_id, cards.len());

    directory.append_flashcards(user_id, cards)?;

    Ok(Json(json!({ "success": true, "message": "Flashcards saved successfully!" })).into_response())
}

#[axum::debug_handler]
pub async fn get_flashcards(
    State((directory, _config)): State<(UserDirectory, Config)>,
    Path(user_id): Path<u64>,
) -> Response {
    match directory.flashcards(user_id) {
        Some(cards) => {
            tracing::debug!("Retrieved {} flashcards for user {}", cards.len(), user_id);
            Json(cards).into_response()
        }
        // Unknown user: empty list with a 404, as the frontend expects.
        None => (StatusCode::NOT_FOUND, Json(json!([]))).into_response(),
    }
}
