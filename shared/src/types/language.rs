//! Language of user-facing messages

use serde::{Deserialize, Serialize};

/// Language used for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "id", alias = "in", alias = "indonesian")]
    Indonesian,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Indonesian => "id",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::Indonesian).unwrap(), "\"id\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_language_aliases() {
        let lang: Language = serde_json::from_str("\"in\"").unwrap();
        assert_eq!(lang, Language::Indonesian);
        assert!(serde_json::from_str::<Language>("\"fr\"").is_err());
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Indonesian.to_string(), "id");
    }
}
