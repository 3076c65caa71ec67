//! Chat message types.
//!
//! This module contains types for representing messages in a conversation,
//! including the sender and the per-message rating/feedback state.

use serde::{Deserialize, Serialize};

/// Highest value a star rating can take.
pub const MAX_RATING: u8 = 5;

/// Rating applied by a plain thumbs-up on an unrated reply.
pub const LIKE_RATING: u8 = MAX_RATING;

/// Represents the sender of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// Message from the user.
    User,
    /// Message from the assistant.
    Assistant,
}

/// A single message in a conversation.
///
/// Each message has a sender, text content and a display-formatted timestamp.
/// Assistant messages additionally carry a star rating (0 = unrated) and
/// free-text feedback collected through the dislike flow; for user messages
/// both stay at their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who sent the message.
    pub sender: Sender,
    /// The content of the message.
    pub text: String,
    /// Wall-clock time the message was created ("HH:MM").
    pub timestamp: String,
    /// Star rating, 0 = unrated.
    #[serde(default)]
    pub rating: u8,
    /// Free-text feedback, empty when none was given.
    #[serde(default)]
    pub feedback: String,
}

impl ChatMessage {
    /// Creates a user message.
    pub fn user(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            timestamp: timestamp.into(),
            rating: 0,
            feedback: String::new(),
        }
    }

    /// Creates an unrated assistant message.
    pub fn assistant(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            timestamp: timestamp.into(),
            rating: 0,
            feedback: String::new(),
        }
    }

    /// Returns true if this message was sent by the assistant.
    pub fn is_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }

    /// Returns true once a rating has been applied.
    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }

    /// Whether the star-rating control should be rendered for this message.
    ///
    /// The control only appears after a like or an explicit rating; a dislike
    /// alone never reveals it.
    pub fn rating_visible(&self) -> bool {
        self.is_assistant() && self.rating > 0
    }
}
