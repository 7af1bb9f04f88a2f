//! Heuristic flashcard generation from free-text study notes.
//!
//! No NLP here: notes are split on periods, and each candidate sentence
//! becomes either a fill-in-the-blank card (blank the middle word) or a
//! "what is important about" prompt. `generate` is total; a synthesis fault
//! is logged and replaced by a fixed review card.

use thiserror::Error;

use crate::models::Flashcard;

/// Only the first 5 candidate sentences are considered; longer input is
/// truncated silently.
const MAX_SENTENCES: usize = 5;

/// Sentences of 10 characters or fewer produce no card.
const MIN_SENTENCE_CHARS: usize = 10;

/// A sentence needs more than this many words to get a fill-in-the-blank.
const MIN_BLANK_WORDS: usize = 5;

const SHORT_FORM_PREVIEW_CHARS: usize = 50;
const FALLBACK_PREVIEW_CHARS: usize = 100;

const BLANK: &str = "______";

#[derive(Error, Debug)]
pub enum GenerationFault {
    #[error("no key word at index {index} of a {word_count}-word sentence")]
    MissingKeyWord { index: usize, word_count: usize },
}

/// Generates flashcards from raw notes. Total: always returns at least one
/// card, and any internal fault collapses to the fixed review pair.
pub fn generate(text: &str) -> Vec<Flashcard> {
    match synthesize(text) {
        Ok(cards) => cards,
        Err(fault) => {
            tracing::error!("Flashcard generation error: {}", fault);
            vec![Flashcard::new(
                "Review your notes: What are the key concepts?",
                "Check your study material for important topics.",
            )]
        }
    }
}

// The fallible stage. Kept separate from `generate` so the fault boundary is
// a visible Result instead of a blanket catch.
fn synthesize(text: &str) -> Result<Vec<Flashcard>, GenerationFault> {
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let mut flashcards = Vec::new();

    for sentence in sentences.iter().take(MAX_SENTENCES) {
        if sentence.chars().count() <= MIN_SENTENCE_CHARS {
            continue;
        }

        let words: Vec<&str> = sentence.split_whitespace().collect();
        if words.len() > MIN_BLANK_WORDS {
            let index = words.len() / 2;
            let key_word = *words.get(index).ok_or(GenerationFault::MissingKeyWord {
                index,
                word_count: words.len(),
            })?;
            // Policy: blank the first textual occurrence of the key word,
            // which may differ from the occurrence at the middle index when
            // the word repeats earlier in the sentence.
            let question = sentence.replacen(key_word, BLANK, 1);
            flashcards.push(Flashcard::new(
                format!("Fill in the blank: {}", question),
                key_word,
            ));
        } else {
            flashcards.push(Flashcard::new(
                format!(
                    "What is important about: {}...?",
                    truncate_chars(sentence, SHORT_FORM_PREVIEW_CHARS)
                ),
                *sentence,
            ));
        }
    }

    if flashcards.is_empty() {
        let answer = if text.chars().count() > FALLBACK_PREVIEW_CHARS {
            format!("{}...", truncate_chars(text, FALLBACK_PREVIEW_CHARS))
        } else {
            text.to_string()
        };
        flashcards.push(Flashcard::new("What did you study?", answer));
    }

    Ok(flashcards)
}

// Truncates to at most `max` characters without splitting a UTF-8 sequence.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
