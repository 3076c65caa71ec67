//! Canned response matching.
//!
//! The [`Responder`] maps free-text user input to a fixed reply by scanning
//! an ordered list of pre-authored questions. Matching is a case-insensitive
//! substring check: the stored question is the haystack, the user input is
//! the needle. The first entry that matches wins; there is no ranking.

mod model;
mod preset;

pub use model::CannedEntry;
pub use preset::{FALLBACK_REPLY, default_entries};

/// Matches user input against an ordered list of canned entries.
#[derive(Debug, Clone)]
pub struct Responder {
    entries: Vec<CannedEntry>,
}

impl Responder {
    /// Creates a responder over the given entries, in the given order.
    pub fn new(entries: Vec<CannedEntry>) -> Self {
        Self { entries }
    }

    /// Creates a responder over the built-in entry list.
    pub fn with_defaults() -> Self {
        Self::new(preset::default_entries())
    }

    /// Returns the reply for `input`.
    ///
    /// Scans entries in list order and returns the response of the first
    /// entry whose lower-cased question contains the lower-cased input.
    /// Falls back to [`FALLBACK_REPLY`] when nothing matches.
    ///
    /// Callers are expected to reject empty or whitespace-only input before
    /// matching; an empty needle would trivially match the first entry.
    pub fn reply(&self, input: &str) -> &str {
        let needle = input.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.question.to_lowercase().contains(&needle))
            .map(|entry| entry.response.as_str())
            .unwrap_or(FALLBACK_REPLY)
    }

    /// Returns the canned entries in match order.
    pub fn entries(&self) -> &[CannedEntry] {
        &self.entries
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_responder() -> Responder {
        Responder::new(vec![
            CannedEntry::new("Hi, what is the weather", "Sunny."),
            CannedEntry::new("Hi, what is the temperature", "22 degrees."),
            CannedEntry::new("Hi, how are you", "Doing great!"),
        ])
    }

    #[test]
    fn test_exact_question_matches() {
        let responder = test_responder();
        assert_eq!(responder.reply("Hi, how are you"), "Doing great!");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let responder = test_responder();
        assert_eq!(responder.reply("HI, HOW ARE YOU"), "Doing great!");
        assert_eq!(responder.reply("hi, how ARE you"), "Doing great!");
    }

    #[test]
    fn test_input_is_the_needle_not_the_haystack() {
        let responder = test_responder();
        // A fragment of a stored question matches...
        assert_eq!(responder.reply("the weather"), "Sunny.");
        // ...but input that merely contains a stored question does not.
        assert_eq!(
            responder.reply("Hi, what is the weather like in Osaka"),
            FALLBACK_REPLY
        );
    }

    #[test]
    fn test_first_match_in_list_order_wins() {
        let responder = test_responder();
        // "hi, what is the" is a substring of the first two questions.
        assert_eq!(responder.reply("Hi, what is the"), "Sunny.");
    }

    #[test]
    fn test_unmatched_input_returns_fallback() {
        let responder = test_responder();
        assert_eq!(responder.reply("tell me a joke"), FALLBACK_REPLY);
    }

    #[test]
    fn test_reply_is_deterministic() {
        let responder = test_responder();
        assert_eq!(responder.reply("the weather"), responder.reply("the weather"));
    }

    #[test]
    fn test_empty_entry_list_always_falls_back() {
        let responder = Responder::new(Vec::new());
        assert_eq!(responder.reply("anything"), FALLBACK_REPLY);
    }
}
