use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fs;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::PaymentForm;
use crate::services::UserDirectory;

pub async fn serve_payment_page(
    State((directory, _config)): State<(UserDirectory, Config)>,
    Path(user_id): Path<u64>,
) -> AppResult<Response> {
    if directory.get_user(user_id).is_none() {
        return Ok((StatusCode::NOT_FOUND, "User not found").into_response());
    }

    let payment_html = fs::read_to_string("templates/payment.html")?;
    Ok(Html(payment_html.replace("{{user_id}}", &user_id.to_string())).into_response())
}

/// Mocked payment flow: no processor is contacted, the account is flipped to
/// premium as soon as the form arrives.
#[axum::debug_handler]
pub async fn initiate_payment(
    State((directory, _config)): State<(UserDirectory, Config)>,
    Form(form): Form<PaymentForm>,
) -> AppResult<Response> {
    let raw = form
        .user_id
        .ok_or_else(|| AppError::Validation("User ID missing".into()))?;
    let user_id: u64 = raw.trim().parse().map_err(|_| AppError::InvalidUserId)?;

    directory.set_premium(user_id)?;

    Ok(Json(json!({ "success": true, "message": "Payment successful!" })).into_response())
}

pub async fn payment_success(
    State((directory, _config)): State<(UserDirectory, Config)>,
    Path(user_id): Path<u64>,
) -> AppResult<Response> {
    if directory.set_premium(user_id).is_err() {
        return Ok((StatusCode::NOT_FOUND, "User not found").into_response());
    }

    Ok(Html(format!(
        "Payment successful! <a href='/dashboard/{}'>Go to Dashboard</a>",
        user_id
    ))
    .into_response())
}
