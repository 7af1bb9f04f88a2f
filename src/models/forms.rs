use serde::Deserialize;

use crate::models::Flashcard;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub user_id: Option<UserIdParam>,
    pub flashcards: Option<Vec<Flashcard>>,
}

#[derive(Debug, Deserialize)]
pub struct PaymentForm {
    pub user_id: Option<String>,
}

/// The frontend sends `user_id` as a JSON number or a numeric string
/// depending on the page, so accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserIdParam {
    Int(u64),
    Text(String),
}

impl UserIdParam {
    pub fn parse(&self) -> Option<u64> {
        match self {
            UserIdParam::Int(id) => Some(*id),
            UserIdParam::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_param_parse() {
        let numeric: UserIdParam = serde_json::from_str("7").unwrap();
        assert_eq!(numeric.parse(), Some(7));

        let text: UserIdParam = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(text.parse(), Some(42));

        let padded: UserIdParam = serde_json::from_str("\" 3 \"").unwrap();
        assert_eq!(padded.parse(), Some(3));

        let garbage: UserIdParam = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(garbage.parse(), None);

        let negative: UserIdParam = serde_json::from_str("\"-1\"").unwrap();
        assert_eq!(negative.parse(), None);
    }
}
