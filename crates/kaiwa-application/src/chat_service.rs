//! Chat service implementation.
//!
//! `ChatService` is the callable-action surface the view layer consumes. It
//! wires the canned [`Responder`], the active [`Transcript`] and the
//! [`ConversationRepository`] together: chat transitions mutate the
//! transcript, save/history go through the repository, and the view renders
//! the snapshots this service hands out.

use kaiwa_core::error::Result;
use kaiwa_core::responder::Responder;
use kaiwa_core::session::{
    ChatMessage, Conversation, ConversationRepository, Transcript, filter_by_rating,
};
use kaiwa_infrastructure::{FileKeyValueStorage, KvConversationRepository};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Orchestrates the active session and the saved-conversation history.
///
/// Every action runs to completion before the next one is processed; the
/// lock only guards the seam between the async repository calls and the
/// synchronous transcript mutations.
pub struct ChatService {
    /// The active (unsaved) session.
    transcript: RwLock<Transcript>,
    /// Static canned question/response list.
    responder: Responder,
    /// Persistent storage backend for saved conversations.
    repository: Arc<dyn ConversationRepository>,
}

impl ChatService {
    /// Creates a service over the given responder and repository.
    pub fn new(responder: Responder, repository: Arc<dyn ConversationRepository>) -> Self {
        Self {
            transcript: RwLock::new(Transcript::new()),
            responder,
            repository,
        }
    }

    /// Creates a service with the built-in canned list, persisting beneath
    /// the default storage location (~/.kaiwa).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be created.
    pub fn with_default_storage() -> Result<Self> {
        let storage = Arc::new(FileKeyValueStorage::default_location()?);
        Ok(Self::new(
            Responder::with_defaults(),
            Arc::new(KvConversationRepository::new(storage)),
        ))
    }

    // ========================================================================
    // Active session actions
    // ========================================================================

    /// Submits user input; empty or whitespace-only input is ignored.
    pub async fn submit(&self, text: &str) {
        self.transcript.write().await.submit(text, &self.responder);
    }

    /// Thumbs-up on the reply at `index` (idempotent once rated).
    pub async fn like(&self, index: usize) -> Result<()> {
        self.transcript.write().await.like(index)
    }

    /// Sets the star rating (1-5) on the reply at `index`.
    pub async fn set_rating(&self, index: usize, value: u8) -> Result<()> {
        self.transcript.write().await.set_rating(index, value)
    }

    /// Thumbs-down on the reply at `index`; opens the feedback flow.
    pub async fn dislike(&self, index: usize) -> Result<()> {
        self.transcript.write().await.dislike(index)
    }

    /// Stores feedback for the open flow; a no-op when no flow is open.
    pub async fn submit_feedback(&self, text: &str) {
        self.transcript.write().await.submit_feedback(text);
    }

    /// Closes the feedback flow without mutating any message.
    pub async fn cancel_feedback(&self) {
        self.transcript.write().await.cancel_feedback();
    }

    /// Starts a fresh session, dropping the current transcript.
    pub async fn start_new(&self) {
        self.transcript.write().await.clear();
        tracing::debug!("started new session");
    }

    // ========================================================================
    // Rendering snapshots
    // ========================================================================

    /// Returns a snapshot of the active session's messages.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.messages().to_vec()
    }

    /// Whether the feedback flow is open.
    pub async fn feedback_open(&self) -> bool {
        self.transcript.read().await.feedback_open()
    }

    // ========================================================================
    // Persistence actions
    // ========================================================================

    /// Saves the active session as a new conversation.
    ///
    /// The transcript stays untouched; pair with [`start_new`](Self::start_new)
    /// to begin a fresh session afterwards.
    pub async fn save(&self) -> Result<Conversation> {
        let transcript = self.transcript.read().await;
        self.repository.save(transcript.messages()).await
    }

    /// Returns every saved conversation in insertion order.
    pub async fn history(&self) -> Result<Vec<Conversation>> {
        self.repository.load_all().await
    }

    /// Returns saved conversations, optionally filtered by assistant rating.
    ///
    /// `None` returns the full history unchanged.
    pub async fn history_with_rating(&self, rating: Option<u8>) -> Result<Vec<Conversation>> {
        filter_by_rating(self.repository.load_all().await?, rating)
    }
}
