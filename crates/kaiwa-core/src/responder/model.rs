//! Canned question/response models.

use serde::{Deserialize, Serialize};

/// A single pre-authored question with its fixed reply.
///
/// Entries are immutable reference data: loaded once when the [`Responder`]
/// is built and never mutated afterwards.
///
/// [`Responder`]: super::Responder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedEntry {
    /// The pre-authored question text, matched against user input.
    pub question: String,
    /// The reply returned when the question matches.
    pub response: String,
}

impl CannedEntry {
    /// Creates a new canned entry.
    pub fn new(question: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            response: response.into(),
        }
    }
}
