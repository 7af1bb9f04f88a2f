use axum::{
    extract::{Json, State},
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use std::fs;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{LoginRequest, SignupRequest};
use crate::services::UserDirectory;

pub async fn serve_index_page() -> AppResult<Response> {
    let html = fs::read_to_string("templates/index.html")?;
    Ok(Html(html).into_response())
}

pub async fn serve_signup_page() -> AppResult<Response> {
    let html = fs::read_to_string("templates/signup.html")?;
    Ok(Html(html).into_response())
}

pub async fn serve_login_page() -> AppResult<Response> {
    let html = fs::read_to_string("templates/login.html")?;
    Ok(Html(html).into_response())
}

#[axum::debug_handler]
pub async fn handle_signup(
    State((directory, _config)): State<(UserDirectory, Config)>,
    Json(request): Json<SignupRequest>,
) -> AppResult<Response> {
    if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(AppError::Validation("All fields are required.".into()));
    }

    let user_id = directory.create_user(&request.name, &request.email, &request.password)?;

    Ok(Json(json!({ "success": true, "user_id": user_id })).into_response())
}

#[axum::debug_handler]
pub async fn handle_login(
    State((directory, _config)): State<(UserDirectory, Config)>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Response> {
    tracing::info!("Login attempt for email: {}", request.email);

    match directory.find_by_credentials(&request.email, &request.password) {
        Some(user) => {
            tracing::info!("Login successful for user {}", user.id);
            Ok(Json(json!({ "success": true, "user_id": user.id })).into_response())
        }
        None => {
            tracing::warn!("Invalid credentials for email: {}", request.email);
            Err(AppError::InvalidCredentials)
        }
    }
}
