//! Conversation domain model.
//!
//! A `Conversation` is the saved, immutable snapshot of a session: the
//! message list at save time plus an identifier and a display-formatted save
//! time. Conversations are only ever appended to the stored collection,
//! never edited in place.

use super::message::{ChatMessage, MAX_RATING};
use crate::error::{KaiwaError, Result};
use serde::{Deserialize, Serialize};

/// A saved conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Creation-time epoch milliseconds, unique across the stored collection.
    pub id: i64,
    /// Wall-clock time the conversation was saved, for display.
    pub saved_at: String,
    /// The session's messages in chronological order.
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    /// True if any assistant message carries exactly `rating`.
    pub fn has_assistant_rating(&self, rating: u8) -> bool {
        self.messages
            .iter()
            .any(|m| m.is_assistant() && m.rating == rating)
    }
}

/// Filters saved conversations by assistant rating.
///
/// `None` is the identity: every conversation is returned in its original
/// order. `Some(value)` keeps conversations with at least one assistant
/// message rated exactly `value`; values outside `1..=MAX_RATING` are
/// rejected.
pub fn filter_by_rating(
    conversations: Vec<Conversation>,
    rating: Option<u8>,
) -> Result<Vec<Conversation>> {
    match rating {
        None => Ok(conversations),
        Some(value) => {
            if !(1..=MAX_RATING).contains(&value) {
                return Err(KaiwaError::invalid_input(format!(
                    "rating filter must be between 1 and {}, got {}",
                    MAX_RATING, value
                )));
            }
            Ok(conversations
                .into_iter()
                .filter(|c| c.has_assistant_rating(value))
                .collect())
        }
    }
}
