//! Built-in canned entries and the fallback reply.

use super::model::CannedEntry;

/// Fixed reply used when no canned question matches the input.
pub const FALLBACK_REPLY: &str = "I'm not sure I have an answer for that, but I'm learning!";

/// Returns the built-in canned question/response list.
///
/// These mirror the prompt cards shown on the home view; a deployment can
/// replace them through the TOML config surface.
pub fn default_entries() -> Vec<CannedEntry> {
    vec![
        CannedEntry::new(
            "Hi, what is the weather",
            "The weather is sunny with a light breeze today.",
        ),
        CannedEntry::new(
            "Hi, what is my location",
            "You appear to be browsing from your usual spot!",
        ),
        CannedEntry::new(
            "Hi, what is the temperature",
            "It's a comfortable 22 degrees right now.",
        ),
        CannedEntry::new(
            "Hi, how are you",
            "I'm doing great, thank you for asking! How can I help you today?",
        ),
    ]
}
