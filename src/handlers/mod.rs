mod auth;
mod cards;
mod dashboard;
mod payment;

pub use auth::{handle_login, handle_signup, serve_index_page, serve_login_page, serve_signup_page};
pub use cards::{generate_flashcards, get_flashcards, save_flashcards};
pub use dashboard::serve_dashboard;
pub use payment::{initiate_payment, payment_success, serve_payment_page};
