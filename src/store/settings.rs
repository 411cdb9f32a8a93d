//! Persisted user settings

use serde::{Deserialize, Serialize};

/// Languages the settings screen cycles through
pub const LANGUAGES: [&str; 4] = ["English", "Spanish", "French", "German"];

/// User preferences persisted across runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dark_theme: bool,
    pub language: String,
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_theme: true,
            language: "English".to_string(),
            notifications_enabled: true,
        }
    }
}

impl Settings {
    /// The next language in the cycle after the current one
    #[must_use]
    pub fn next_language(&self) -> &'static str {
        let index = LANGUAGES
            .iter()
            .position(|&l| l == self.language)
            .unwrap_or(0);
        LANGUAGES[(index + 1) % LANGUAGES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run_behavior() {
        let settings = Settings::default();
        assert!(settings.dark_theme);
        assert_eq!(settings.language, "English");
        assert!(settings.notifications_enabled);
    }

    #[test]
    fn language_cycles_through_all_options() {
        let mut settings = Settings::default();
        let mut seen = Vec::new();

        for _ in 0..LANGUAGES.len() {
            let next = settings.next_language();
            seen.push(next);
            settings.language = next.to_string();
        }

        assert_eq!(seen.len(), LANGUAGES.len());
        assert_eq!(settings.language, "English");
    }

    #[test]
    fn unknown_language_cycles_from_start() {
        let settings = Settings {
            language: "Klingon".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.next_language(), "Spanish");
    }

    #[test]
    fn settings_roundtrip_through_json() {
        let settings = Settings {
            dark_theme: false,
            language: "French".to_string(),
            notifications_enabled: false,
        };

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
