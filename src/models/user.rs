use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password: String,  // Stored as given; this is a demo, not a security design
    pub is_premium: bool,
    pub trial_start: NaiveDate,
    pub flashcards: Vec<Flashcard>,
}

/// A single question/answer pair. Immutable once produced; saving moves it
/// into a user's list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
