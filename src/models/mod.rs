mod user;
mod forms;

pub use user::{Flashcard, User};
pub use forms::{GenerateRequest, LoginRequest, PaymentForm, SaveRequest, SignupRequest, UserIdParam};
