//! Application layer of the Kaiwa chat companion.
//!
//! Exposes [`ChatService`], the action surface a view layer drives: submit,
//! like, dislike, rating and feedback transitions on the active session,
//! plus save/history/filter over the persisted conversation collection.

pub mod chat_service;

pub use chat_service::ChatService;
