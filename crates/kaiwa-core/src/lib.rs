//! Domain layer of the Kaiwa chat companion.
//!
//! `kaiwa-core` holds everything the UI-facing layers reason about: the
//! canned-response [`Responder`](responder::Responder), the active session
//! [`Transcript`](session::Transcript), the saved
//! [`Conversation`](session::Conversation) model with its rating filter, and
//! the [`ConversationRepository`](session::ConversationRepository) seam that
//! storage backends implement.

pub mod config;
pub mod error;
pub mod responder;
pub mod session;

// Re-export common error type
pub use error::KaiwaError;
