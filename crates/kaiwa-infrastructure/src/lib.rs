//! Persistence layer of the Kaiwa chat companion.
//!
//! Provides the durable side of the system: the [`storage`] abstraction with
//! file-backed and in-memory backends, the versioned persistence [`dto`]s
//! with their schema migration, the
//! [`KvConversationRepository`](kv_conversation_repository::KvConversationRepository)
//! implementing the domain's repository trait, and configuration loading.

pub mod config_service;
pub mod dto;
pub mod kv_conversation_repository;
pub mod storage;

pub use config_service::{load_config, load_responder};
pub use kv_conversation_repository::{HISTORY_KEY, KvConversationRepository};
pub use storage::{FileKeyValueStorage, KeyValueStorage, MemoryKeyValueStorage};
