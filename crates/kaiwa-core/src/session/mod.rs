//! Session domain module.
//!
//! This module contains all session-related domain models, the active
//! transcript state machine, and the repository interface.
//!
//! # Module Structure
//!
//! - `message`: Chat message types (`Sender`, `ChatMessage`)
//! - `transcript`: The active session state machine (`Transcript`)
//! - `model`: Saved conversation model (`Conversation`) and rating filter
//! - `repository`: Repository trait for conversation persistence

mod message;
mod model;
mod repository;
mod transcript;

// Re-export public API
pub use message::{ChatMessage, LIKE_RATING, MAX_RATING, Sender};
pub use model::{Conversation, filter_by_rating};
pub use repository::ConversationRepository;
pub use transcript::Transcript;
