//! Key-value backed ConversationRepository implementation.

use crate::dto;
use crate::storage::KeyValueStorage;
use async_trait::async_trait;
use kaiwa_core::error::Result;
use kaiwa_core::session::{ChatMessage, Conversation, ConversationRepository};
use std::sync::Arc;

/// Storage key holding the serialized conversation collection.
pub const HISTORY_KEY: &str = "conversations";

/// Persists the conversation collection as one document under one key.
///
/// Every save is a read-modify-write of the whole array: load what is
/// stored, append the new conversation, write everything back. A malformed
/// stored payload is treated as empty history with a logged warning rather
/// than failing the read; the exception is a payload tagged with an
/// incompatible schema major, which stays a hard error so data written by a
/// newer build is never clobbered.
pub struct KvConversationRepository {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl KvConversationRepository {
    /// Creates a repository over `storage` using the default history key.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::with_key(storage, HISTORY_KEY)
    }

    /// Creates a repository over `storage` using a custom key.
    pub fn with_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Loads the stored collection, recovering from malformed payloads.
    fn load_stored(&self) -> Result<Vec<Conversation>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match dto::decode_history(&raw) {
            Ok(conversations) => Ok(conversations),
            Err(err) if err.is_migration() => Err(err),
            Err(err) => {
                tracing::warn!(
                    key = %self.key,
                    error = %err,
                    "stored history is malformed, starting with empty history"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Picks an id for a new conversation.
    ///
    /// Ids are creation-time epoch milliseconds; when two saves land in the
    /// same millisecond the id is bumped past the newest stored one so the
    /// uniqueness invariant holds.
    fn next_id(stored: &[Conversation]) -> i64 {
        let candidate = chrono::Utc::now().timestamp_millis();
        match stored.iter().map(|c| c.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }
}

#[async_trait]
impl ConversationRepository for KvConversationRepository {
    async fn save(&self, messages: &[ChatMessage]) -> Result<Conversation> {
        let mut stored = self.load_stored()?;

        let conversation = Conversation {
            id: Self::next_id(&stored),
            saved_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            messages: messages.to_vec(),
        };

        stored.push(conversation.clone());
        let raw = dto::encode_history(&stored)?;
        self.storage.set(&self.key, &raw)?;

        tracing::debug!(
            id = conversation.id,
            messages = conversation.messages.len(),
            total = stored.len(),
            "saved conversation"
        );
        Ok(conversation)
    }

    async fn load_all(&self) -> Result<Vec<Conversation>> {
        self.load_stored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileKeyValueStorage, MemoryKeyValueStorage};
    use kaiwa_core::session::Sender;
    use tempfile::TempDir;

    fn turn(rating: u8) -> Vec<ChatMessage> {
        let mut reply = ChatMessage::assistant("Doing great!", "10:30");
        reply.rating = rating;
        vec![ChatMessage::user("Hi, how are you", "10:30"), reply]
    }

    fn memory_repository() -> KvConversationRepository {
        KvConversationRepository::new(Arc::new(MemoryKeyValueStorage::new()))
    }

    #[tokio::test]
    async fn test_load_all_on_empty_storage() {
        let repository = memory_repository();
        assert!(repository.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let repository = memory_repository();

        let saved = repository.save(&turn(2)).await.unwrap();
        let loaded = repository.load_all().await.unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, saved.id);
        // The stored messages equal the session list exactly.
        assert_eq!(loaded[0].messages, turn(2));
        assert_eq!(loaded[0].messages[1].sender, Sender::Assistant);
        assert_eq!(loaded[0].messages[1].rating, 2);
    }

    #[tokio::test]
    async fn test_save_appends_with_unique_increasing_ids() {
        let repository = memory_repository();

        // Back-to-back saves land within the same millisecond more often
        // than not; ids must still be unique and increasing.
        let first = repository.save(&turn(1)).await.unwrap();
        let second = repository.save(&turn(2)).await.unwrap();
        let third = repository.save(&turn(3)).await.unwrap();

        assert!(second.id > first.id);
        assert!(third.id > second.id);

        let loaded = repository.load_all().await.unwrap();
        assert_eq!(
            loaded.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![first.id, second.id, third.id]
        );
    }

    #[tokio::test]
    async fn test_malformed_payload_is_treated_as_empty() {
        let storage = MemoryKeyValueStorage::seeded(HISTORY_KEY, "{not valid json");
        let repository = KvConversationRepository::new(Arc::new(storage));

        assert!(repository.load_all().await.unwrap().is_empty());

        // Saving over the corrupt payload starts a fresh collection.
        repository.save(&turn(0)).await.unwrap();
        assert_eq!(repository.load_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_future_major_schema_is_a_hard_error() {
        let storage = MemoryKeyValueStorage::seeded(
            HISTORY_KEY,
            r#"{"schema_version": "2.0.0", "conversations": []}"#,
        );
        let repository = KvConversationRepository::new(Arc::new(storage));

        assert!(repository.load_all().await.unwrap_err().is_migration());
        assert!(repository.save(&turn(0)).await.unwrap_err().is_migration());
    }

    #[tokio::test]
    async fn test_legacy_payload_is_migrated_and_rewritten_versioned() {
        let legacy = r#"[
            {
                "id": 1,
                "timestamp": "7/22/2023, 10:30:00 AM",
                "messages": [{"sender": "ai", "text": "Hello", "time": "09:00", "rating": 3, "feedback": ""}]
            }
        ]"#;
        let storage = Arc::new(MemoryKeyValueStorage::seeded(HISTORY_KEY, legacy));
        let repository = KvConversationRepository::new(storage.clone());

        let loaded = repository.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].messages[0].sender, Sender::Assistant);

        // The next save upgrades the stored payload to the envelope format.
        repository.save(&turn(0)).await.unwrap();
        let raw = storage.get(HISTORY_KEY).unwrap().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["schema_version"], dto::HISTORY_SCHEMA_VERSION);
        assert_eq!(doc["conversations"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_file_backed_storage_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(FileKeyValueStorage::new(temp_dir.path()).unwrap());

        let saved = {
            let repository = KvConversationRepository::new(storage.clone());
            repository.save(&turn(4)).await.unwrap()
        };

        // A fresh repository over the same directory sees the conversation.
        let repository = KvConversationRepository::new(storage);
        let loaded = repository.load_all().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, saved.id);
        assert_eq!(loaded[0].messages[1].rating, 4);
    }
}
