use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use thiserror::Error;

use crate::models::{Flashcard, User};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Email already registered.")]
    DuplicateEmail,

    #[error("User not found.")]
    UserNotFound,
}

/// In-memory user store. Ids are assigned monotonically from 1 and never
/// reused; emails are unique across all live records.
///
/// Handlers run concurrently, so id allocation and the email-uniqueness scan
/// sit inside one lock. All operations are synchronous and definitive.
pub struct UserDirectory {
    inner: Arc<Mutex<DirectoryInner>>,
}

struct DirectoryInner {
    users: HashMap<u64, User>,
    next_id: u64,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DirectoryInner {
                users: HashMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Creates a user and returns its id. The id is only allocated once the
    /// uniqueness scan has passed, so a rejected signup leaves no gap.
    pub fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<u64, DirectoryError> {
        let mut inner = self.inner.lock().unwrap();

        if inner.users.values().any(|u| u.email == email) {
            return Err(DirectoryError::DuplicateEmail);
        }

        let id = inner.next_id;
        inner.next_id += 1;

        inner.users.insert(
            id,
            User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                is_premium: false,
                trial_start: Utc::now().date_naive(),
                flashcards: Vec::new(),
            },
        );

        tracing::info!("User created: id={} email={}", id, email);
        Ok(id)
    }

    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<User> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .values()
            .find(|u| u.email == email && u.password == password)
            .cloned()
    }

    pub fn get_user(&self, id: u64) -> Option<User> {
        let inner = self.inner.lock().unwrap();
        inner.users.get(&id).cloned()
    }

    pub fn flashcards(&self, id: u64) -> Option<Vec<Flashcard>> {
        let inner = self.inner.lock().unwrap();
        inner.users.get(&id).map(|u| u.flashcards.clone())
    }

    /// Appends cards to the user's list. Append-only: earlier cards are
    /// never replaced or reordered.
    pub fn append_flashcards(
        &self,
        id: u64,
        cards: Vec<Flashcard>,
    ) -> Result<(), DirectoryError> {
        let mut inner = self.inner.lock().unwrap();
        let user = inner.users.get_mut(&id).ok_or(DirectoryError::UserNotFound)?;
        user.flashcards.extend(cards);
        tracing::info!(
            "User {} now has {} total flashcards",
            id,
            user.flashcards.len()
        );
        Ok(())
    }

    pub fn set_premium(&self, id: u64) -> Result<(), DirectoryError> {
        let mut inner = self.inner.lock().unwrap();
        let user = inner.users.get_mut(&id).ok_or(DirectoryError::UserNotFound)?;
        user.is_premium = true;
        tracing::info!("User {} upgraded to premium", id);
        Ok(())
    }
}

impl Clone for UserDirectory {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_start_at_one() {
        let dir = UserDirectory::new();
        let a = dir.create_user("Ada", "ada@example.com", "pw").unwrap();
        let b = dir.create_user("Ben", "ben@example.com", "pw").unwrap();
        let c = dir.create_user("Cam", "cam@example.com", "pw").unwrap();
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn test_duplicate_email_allocates_no_id() {
        let dir = UserDirectory::new();
        dir.create_user("Ada", "ada@example.com", "pw").unwrap();

        let err = dir.create_user("Imposter", "ada@example.com", "pw2");
        assert_eq!(err, Err(DirectoryError::DuplicateEmail));

        // The rejected signup must not have consumed an id.
        let next = dir.create_user("Ben", "ben@example.com", "pw").unwrap();
        assert_eq!(next, 2);
    }

    #[test]
    fn test_find_by_credentials() {
        let dir = UserDirectory::new();
        let id = dir.create_user("Ada", "ada@example.com", "secret").unwrap();

        let found = dir.find_by_credentials("ada@example.com", "secret").unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.name, "Ada");
        assert!(!found.is_premium);

        assert!(dir.find_by_credentials("ada@example.com", "wrong").is_none());
        assert!(dir.find_by_credentials("nobody@example.com", "secret").is_none());
    }

    #[test]
    fn test_append_flashcards_is_additive() {
        let dir = UserDirectory::new();
        let id = dir.create_user("Ada", "ada@example.com", "pw").unwrap();

        let a = Flashcard::new("Q1", "A1");
        let b = Flashcard::new("Q2", "A2");

        dir.append_flashcards(id, vec![a.clone()]).unwrap();
        dir.append_flashcards(id, vec![b.clone()]).unwrap();

        assert_eq!(dir.flashcards(id).unwrap(), vec![a, b]);
    }

    #[test]
    fn test_append_flashcards_unknown_user() {
        let dir = UserDirectory::new();
        let result = dir.append_flashcards(99, vec![Flashcard::new("Q", "A")]);
        assert_eq!(result, Err(DirectoryError::UserNotFound));
    }

    #[test]
    fn test_set_premium() {
        let dir = UserDirectory::new();
        let id = dir.create_user("Ada", "ada@example.com", "pw").unwrap();

        dir.set_premium(id).unwrap();
        assert!(dir.get_user(id).unwrap().is_premium);
    }

    #[test]
    fn test_set_premium_unknown_user_has_no_effect() {
        let dir = UserDirectory::new();
        let id = dir.create_user("Ada", "ada@example.com", "pw").unwrap();

        assert_eq!(dir.set_premium(99), Err(DirectoryError::UserNotFound));
        assert!(!dir.get_user(id).unwrap().is_premium);
    }

    #[test]
    fn test_clone_shares_state() {
        let dir = UserDirectory::new();
        let handle = dir.clone();

        let id = dir.create_user("Ada", "ada@example.com", "pw").unwrap();
        assert!(handle.get_user(id).is_some());
    }
}
