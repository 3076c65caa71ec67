//! Conversation repository trait.
//!
//! Defines the interface for conversation persistence operations.

use super::message::ChatMessage;
use super::model::Conversation;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the saved-conversation collection.
///
/// This trait defines the contract for persisting and retrieving
/// conversations, decoupling the application's core logic from the specific
/// storage mechanism (file-backed key-value store, in-memory store, ...).
///
/// The stored collection is append-only: `save` snapshots the given messages
/// into a new conversation; existing conversations are never edited.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Snapshots `messages` into a new conversation and appends it to the
    /// stored collection.
    ///
    /// # Returns
    ///
    /// The saved conversation, including its assigned id and save time.
    async fn save(&self, messages: &[ChatMessage]) -> Result<Conversation>;

    /// Returns every stored conversation in insertion order.
    ///
    /// An empty collection is returned when nothing has been stored yet.
    async fn load_all(&self) -> Result<Vec<Conversation>>;
}
