use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fs;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::UserDirectory;

pub async fn serve_dashboard(
    State((directory, _config)): State<(UserDirectory, Config)>,
    Path(user_id): Path<u64>,
) -> AppResult<Response> {
    tracing::info!("Accessing dashboard for user {}", user_id);

    let user = match directory.get_user(user_id) {
        Some(user) => user,
        None => return Ok((StatusCode::NOT_FOUND, "User not found").into_response()),
    };

    let dashboard_html = fs::read_to_string("templates/dashboard.html").map_err(|e| {
        tracing::error!("Failed to read dashboard template: {}", e);
        e
    })?;

    // Saved cards themselves are fetched by the page via /get_flashcards.
    let plan = if user.is_premium { "Premium" } else { "Free trial" };
    let rendered = dashboard_html
        .replace("{{user_id}}", &user.id.to_string())
        .replace("{{name}}", &user.name)
        .replace("{{plan}}", plan)
        .replace("{{card_count}}", &user.flashcards.len().to_string());

    Ok(Html(rendered).into_response())
}
