use crate::responder::{CannedEntry, Responder};
use serde::{Deserialize, Serialize};

/// Root of the optional TOML configuration file.
///
/// ```toml
/// [[canned]]
/// question = "Hi, what is the weather"
/// response = "Sunny."
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ConfigRoot {
    #[serde(rename = "canned", default)]
    pub entries: Vec<CannedEntry>,
}

impl ConfigRoot {
    /// Builds the responder this configuration describes.
    ///
    /// An empty entry list falls back to the built-in defaults.
    pub fn into_responder(self) -> Responder {
        if self.entries.is_empty() {
            Responder::with_defaults()
        } else {
            Responder::new(self.entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_override_defaults() {
        let config: ConfigRoot = toml::from_str(
            r#"
            [[canned]]
            question = "Hi, what is the weather"
            response = "Snowing."
            "#,
        )
        .unwrap();

        let responder = config.into_responder();
        assert_eq!(responder.entries().len(), 1);
        assert_eq!(responder.reply("the weather"), "Snowing.");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ConfigRoot = toml::from_str("").unwrap();
        let responder = config.into_responder();
        assert!(!responder.entries().is_empty());
    }
}
