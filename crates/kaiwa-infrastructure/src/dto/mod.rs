//! Persistence DTOs.
//!
//! DTOs isolate the stored wire format from the domain model so the two can
//! evolve independently; schema migrations live next to the DTOs they
//! transform.

mod history;

pub use history::{
    ConversationDtoV1, HISTORY_SCHEMA_VERSION, HistoryDocV1, MessageDtoV1, decode_history,
    encode_history,
};
