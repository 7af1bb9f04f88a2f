mod config;
mod errors;
mod generator;
mod handlers;
mod models;
mod services;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};

use crate::{config::Config, services::UserDirectory};

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");
    let config_state = config.clone();

    // In-memory user directory, shared across handlers
    let directory = UserDirectory::new();

    // Create router with all routes
    let app = Router::new()
        // Auth routes
        .route("/", get(handlers::serve_index_page))
        .route(
            "/signup",
            get(handlers::serve_signup_page).post(handlers::handle_signup),
        )
        .route(
            "/login",
            get(handlers::serve_login_page).post(handlers::handle_login),
        )
        // Dashboard
        .route("/dashboard/:user_id", get(handlers::serve_dashboard))
        // Flashcard API
        .route("/generate_flashcards", post(handlers::generate_flashcards))
        .route("/save_flashcards", post(handlers::save_flashcards))
        .route("/get_flashcards/:user_id", get(handlers::get_flashcards))
        // Payment (mocked)
        .route("/payment/:user_id", get(handlers::serve_payment_page))
        .route("/initiate_payment", post(handlers::initiate_payment))
        .route("/payment_success/:user_id", get(handlers::payment_success))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // Request body limits from config
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
        // Add state
        .with_state((directory, config_state));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
