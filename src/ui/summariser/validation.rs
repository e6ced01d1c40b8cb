//! Local checks run before anything is sent to the backend.

use thiserror::Error;

use crate::config::Variant;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty input")]
    Empty,
    #[error("too short: {actual} words, need at least {min}")]
    TooShort { min: usize, actual: usize },
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::Empty => "Please paste or type some notes first.".to_string(),
            ValidationError::TooShort { min, .. } => {
                format!("Try giving at least {} words for a better summary.", min)
            }
        }
    }
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Checks run in order; the first failure wins.
pub fn validate(text: &str, variant: Variant) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    if let Some(min) = variant.min_words() {
        let actual = word_count(text);
        if actual < min {
            return Err(ValidationError::TooShort { min, actual });
        }
    }

    Ok(())
}
