//! The in-memory transcript of the active session.
//!
//! `Transcript` is the state machine behind the chat view: an ordered message
//! list plus the pending feedback target opened by a dislike. Every
//! transition is synchronous and all-or-nothing; no transition leaves the
//! list half-updated.

use super::message::{ChatMessage, LIKE_RATING, MAX_RATING};
use crate::error::{KaiwaError, Result};
use crate::responder::Responder;

/// The message list for one active (unsaved) conversation.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    /// Index of the assistant message a dislike opened feedback for.
    pending_feedback: Option<usize>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages in chronological order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns true when no messages have been exchanged yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Index of the message the feedback flow currently targets, if open.
    pub fn pending_feedback(&self) -> Option<usize> {
        self.pending_feedback
    }

    /// Whether the feedback flow is open.
    pub fn feedback_open(&self) -> bool {
        self.pending_feedback.is_some()
    }

    /// Submits user input.
    ///
    /// Appends the trimmed user message followed immediately by the
    /// assistant's reply from `responder`; the pair forms one logical turn
    /// and the reply starts unrated with empty feedback. Input that trims to
    /// empty is ignored without touching the list.
    pub fn submit(&mut self, text: &str, responder: &Responder) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M").to_string();
        let reply = responder.reply(trimmed).to_string();
        self.messages
            .push(ChatMessage::user(trimmed, timestamp.clone()));
        self.messages.push(ChatMessage::assistant(reply, timestamp));
    }

    /// Thumbs-up on the assistant message at `index`.
    ///
    /// An unrated reply gets the default like rating; a reply that already
    /// carries a rating is left unchanged, so a second like is a no-op.
    pub fn like(&mut self, index: usize) -> Result<()> {
        let message = self.assistant_target(index)?;
        if !message.is_rated() {
            message.rating = LIKE_RATING;
        }
        Ok(())
    }

    /// Sets the star rating on the assistant message at `index`.
    ///
    /// `value` must be within `1..=MAX_RATING`; a valid value overwrites any
    /// prior rating unconditionally.
    pub fn set_rating(&mut self, index: usize, value: u8) -> Result<()> {
        if !(1..=MAX_RATING).contains(&value) {
            return Err(KaiwaError::invalid_input(format!(
                "rating must be between 1 and {}, got {}",
                MAX_RATING, value
            )));
        }
        let message = self.assistant_target(index)?;
        message.rating = value;
        Ok(())
    }

    /// Thumbs-down on the assistant message at `index`.
    ///
    /// Opens the feedback flow targeting that message. The message itself is
    /// not mutated; in particular no rating is set or lowered.
    pub fn dislike(&mut self, index: usize) -> Result<()> {
        self.assistant_target(index)?;
        self.pending_feedback = Some(index);
        Ok(())
    }

    /// Stores `text` as feedback on the message the open flow targets, then
    /// closes the flow. Without an open flow this is a no-op.
    pub fn submit_feedback(&mut self, text: &str) {
        if let Some(index) = self.pending_feedback.take() {
            if let Some(message) = self.messages.get_mut(index) {
                message.feedback = text.to_string();
            }
        }
    }

    /// Closes the feedback flow without mutating any message.
    pub fn cancel_feedback(&mut self) {
        self.pending_feedback = None;
    }

    /// Drops all messages and any open feedback flow.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.pending_feedback = None;
    }

    /// Resolves `index` to a mutable assistant message.
    fn assistant_target(&mut self, index: usize) -> Result<&mut ChatMessage> {
        let message = self
            .messages
            .get_mut(index)
            .ok_or_else(|| KaiwaError::not_found("message", index.to_string()))?;
        if !message.is_assistant() {
            return Err(KaiwaError::invalid_input(format!(
                "message {} is not an assistant message",
                index
            )));
        }
        Ok(message)
    }
}
