//! Persisted history DTOs and schema migration.
//!
//! The stored record is a single JSON document holding every saved
//! conversation. The current schema (V1) wraps the array in a versioned
//! envelope so future format changes can migrate old records instead of
//! failing to parse:
//!
//! ```json
//! { "schema_version": "1.0.0", "conversations": [ ... ] }
//! ```
//!
//! The first deployment (V0) wrote a bare JSON array with no version tag,
//! and assistant messages carried the sender value `"ai"`. V0 payloads are
//! detected by shape and migrated on load; the next save writes V1.

use kaiwa_core::error::{KaiwaError, Result};
use kaiwa_core::session::{ChatMessage, Conversation, Sender};
use semver::Version;
use serde::{Deserialize, Serialize};

/// Schema version written by the current build.
pub const HISTORY_SCHEMA_VERSION: &str = "1.0.0";

// ============================================================================
// V1 (current) DTOs
// ============================================================================

/// The versioned envelope around the stored conversation array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDocV1 {
    /// Schema version of this document (semver).
    pub schema_version: String,
    /// Every saved conversation, in insertion order.
    pub conversations: Vec<ConversationDtoV1>,
}

/// One saved conversation as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDtoV1 {
    /// Creation-time epoch milliseconds.
    pub id: i64,
    /// Display-formatted save time.
    pub saved_at: String,
    /// The snapshotted messages.
    pub messages: Vec<MessageDtoV1>,
}

/// One message as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDtoV1 {
    pub sender: Sender,
    pub text: String,
    /// Display-formatted creation time.
    pub time: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub feedback: String,
}

// ============================================================================
// V0 (legacy) DTOs
// ============================================================================

/// Legacy conversation shape: no envelope, `timestamp` instead of `savedAt`
/// in the very first records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConversationDtoV0 {
    id: i64,
    #[serde(alias = "timestamp")]
    saved_at: String,
    messages: Vec<MessageDtoV0>,
}

/// Legacy message shape with a free-form sender string.
#[derive(Debug, Clone, Deserialize)]
struct MessageDtoV0 {
    sender: String,
    text: String,
    time: String,
    #[serde(default)]
    rating: u8,
    #[serde(default)]
    feedback: String,
}

// ============================================================================
// Migration and domain model conversions
// ============================================================================

/// Migration from the legacy V0 message to the current schema.
/// Changes: the sender string "ai" becomes the `assistant` variant.
impl From<MessageDtoV0> for MessageDtoV1 {
    fn from(v0: MessageDtoV0) -> Self {
        let sender = match v0.sender.as_str() {
            "user" => Sender::User,
            "ai" | "assistant" => Sender::Assistant,
            other => {
                tracing::debug!(sender = other, "unknown legacy sender, treating as assistant");
                Sender::Assistant
            }
        };
        MessageDtoV1 {
            sender,
            text: v0.text,
            time: v0.time,
            rating: v0.rating,
            feedback: v0.feedback,
        }
    }
}

impl From<ConversationDtoV0> for ConversationDtoV1 {
    fn from(v0: ConversationDtoV0) -> Self {
        ConversationDtoV1 {
            id: v0.id,
            saved_at: v0.saved_at,
            messages: v0.messages.into_iter().map(MessageDtoV1::from).collect(),
        }
    }
}

/// Convert persisted DTO to domain model.
impl From<ConversationDtoV1> for Conversation {
    fn from(dto: ConversationDtoV1) -> Self {
        Conversation {
            id: dto.id,
            saved_at: dto.saved_at,
            messages: dto
                .messages
                .into_iter()
                .map(|m| ChatMessage {
                    sender: m.sender,
                    text: m.text,
                    timestamp: m.time,
                    rating: m.rating,
                    feedback: m.feedback,
                })
                .collect(),
        }
    }
}

/// Convert domain model to DTO for persistence.
impl From<&Conversation> for ConversationDtoV1 {
    fn from(conversation: &Conversation) -> Self {
        ConversationDtoV1 {
            id: conversation.id,
            saved_at: conversation.saved_at.clone(),
            messages: conversation
                .messages
                .iter()
                .map(|m| MessageDtoV1 {
                    sender: m.sender,
                    text: m.text.clone(),
                    time: m.timestamp.clone(),
                    rating: m.rating,
                    feedback: m.feedback.clone(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Document encode/decode
// ============================================================================

/// Decodes a raw stored payload into domain conversations.
///
/// Accepts the current V1 envelope and the legacy V0 bare array. An envelope
/// whose schema version has a different MAJOR than the current build is a
/// migration error; such data was written by an incompatible build and must
/// not be silently discarded.
pub fn decode_history(raw: &str) -> Result<Vec<Conversation>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    if value.is_array() {
        let legacy: Vec<ConversationDtoV0> = serde_json::from_value(value)?;
        tracing::debug!(count = legacy.len(), "migrating legacy history payload");
        return Ok(legacy
            .into_iter()
            .map(ConversationDtoV1::from)
            .map(Conversation::from)
            .collect());
    }

    let doc: HistoryDocV1 = serde_json::from_value(value)?;
    check_schema_version(&doc.schema_version)?;
    Ok(doc.conversations.into_iter().map(Conversation::from).collect())
}

/// Encodes domain conversations into the current V1 document.
pub fn encode_history(conversations: &[Conversation]) -> Result<String> {
    let doc = HistoryDocV1 {
        schema_version: HISTORY_SCHEMA_VERSION.to_string(),
        conversations: conversations.iter().map(ConversationDtoV1::from).collect(),
    };
    Ok(serde_json::to_string(&doc)?)
}

fn check_schema_version(stored: &str) -> Result<()> {
    let stored_version = Version::parse(stored)
        .map_err(|e| KaiwaError::migration(format!("invalid schema version '{}': {}", stored, e)))?;
    let current_version =
        Version::parse(HISTORY_SCHEMA_VERSION).expect("Invalid HISTORY_SCHEMA_VERSION");

    if stored_version.major != current_version.major {
        return Err(KaiwaError::migration(format!(
            "stored history has schema version {}, this build supports major version {}",
            stored_version, current_version.major
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_conversation() -> Conversation {
        Conversation {
            id: 1700000000000,
            saved_at: "2025-03-01 10:30:00".to_string(),
            messages: vec![
                ChatMessage::user("Hi, how are you", "10:30"),
                ChatMessage {
                    sender: Sender::Assistant,
                    text: "Doing great!".to_string(),
                    timestamp: "10:30".to_string(),
                    rating: 4,
                    feedback: "too chirpy".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_encode_then_decode_preserves_conversations() {
        let original = vec![sample_conversation()];
        let raw = encode_history(&original).unwrap();
        let decoded = decode_history(&raw).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_encode_writes_current_schema_version() {
        let raw = encode_history(&[sample_conversation()]).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["schema_version"], HISTORY_SCHEMA_VERSION);
        // Persisted field names follow the storage record contract.
        assert!(doc["conversations"][0]["savedAt"].is_string());
        assert!(doc["conversations"][0]["messages"][0]["time"].is_string());
    }

    #[test]
    fn test_decode_legacy_bare_array() {
        let raw = r#"[
            {
                "id": 1690000000000,
                "timestamp": "7/22/2023, 10:30:00 AM",
                "messages": [
                    {"sender": "user", "text": "Hi, how are you", "time": "10:30", "rating": 0, "feedback": ""},
                    {"sender": "ai", "text": "Doing great!", "time": "10:30", "rating": 5, "feedback": ""}
                ]
            }
        ]"#;

        let decoded = decode_history(raw).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, 1690000000000);
        assert_eq!(decoded[0].saved_at, "7/22/2023, 10:30:00 AM");
        assert_eq!(decoded[0].messages[0].sender, Sender::User);
        // "ai" migrates to the assistant variant.
        assert_eq!(decoded[0].messages[1].sender, Sender::Assistant);
        assert_eq!(decoded[0].messages[1].rating, 5);
    }

    #[test]
    fn test_decode_legacy_messages_without_rating_fields() {
        // The earliest records predate rating/feedback entirely.
        let raw = r#"[
            {
                "id": 1,
                "savedAt": "2023-07-22",
                "messages": [{"sender": "ai", "text": "Hello", "time": "09:00"}]
            }
        ]"#;

        let decoded = decode_history(raw).unwrap();
        assert_eq!(decoded[0].messages[0].rating, 0);
        assert_eq!(decoded[0].messages[0].feedback, "");
    }

    #[test]
    fn test_decode_rejects_future_major_version() {
        let raw = r#"{"schema_version": "2.0.0", "conversations": []}"#;
        assert!(decode_history(raw).unwrap_err().is_migration());
    }

    #[test]
    fn test_decode_tolerates_newer_minor_version() {
        let raw = r#"{"schema_version": "1.9.0", "conversations": []}"#;
        assert!(decode_history(raw).unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_history("not json at all").unwrap_err().is_serialization());
    }
}
