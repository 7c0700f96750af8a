//! Configuration reading and data directory paths.

pub mod paths;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::session::Language;

use paths::get_data_dir;

/// Top-level assistant_config.json shape (written by the host UI).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantConfig {
    #[serde(default)]
    pub user_name: Option<String>,
    /// Base URL of the face-auth API.
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub voice_language: Option<Language>,
    /// Silence window before a command is finalized, in seconds.
    #[serde(default)]
    pub debounce_secs: Option<f64>,
    /// Passive emotion sampling cadence, in seconds.
    #[serde(default)]
    pub emotion_interval_secs: Option<f64>,
}

impl AssistantConfig {
    pub fn debounce(&self) -> Duration {
        self.debounce_secs
            .filter(|s| *s > 0.0)
            .map(Duration::from_secs_f64)
            .unwrap_or(crate::assistant::DEFAULT_DEBOUNCE)
    }

    pub fn emotion_interval(&self) -> Duration {
        self.emotion_interval_secs
            .filter(|s| *s > 0.0)
            .map(Duration::from_secs_f64)
            .unwrap_or(crate::assistant::DEFAULT_SAMPLE_INTERVAL)
    }

    pub fn voice_language(&self) -> Language {
        self.voice_language.unwrap_or_default()
    }
}

/// Read assistant_config.json from the data directory.
pub fn read_assistant_config() -> AssistantConfig {
    read_json_file(&get_config_path()).unwrap_or_default()
}

/// Path to assistant_config.json.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("assistant_config.json")
}

/// Generic helper: read a JSON file and deserialize it.
fn read_json_file<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Option<T> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(val) => Some(val),
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        },
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to read {}: {}", path.display(), e);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = AssistantConfig::default();
        assert_eq!(config.debounce(), Duration::from_secs(4));
        assert_eq!(config.emotion_interval(), Duration::from_secs(3));
        assert_eq!(config.voice_language(), Language::Hindi);
    }

    #[test]
    fn overrides_apply() {
        let config: AssistantConfig = serde_json::from_str(
            r#"{"userName":"Asha","debounceSecs":2.5,"voiceLanguage":"english"}"#,
        )
        .unwrap();
        assert_eq!(config.user_name.as_deref(), Some("Asha"));
        assert_eq!(config.debounce(), Duration::from_secs_f64(2.5));
        assert_eq!(config.voice_language(), Language::English);
    }

    #[test]
    fn non_positive_debounce_falls_back() {
        let config: AssistantConfig =
            serde_json::from_str(r#"{"debounceSecs":0.0}"#).unwrap();
        assert_eq!(config.debounce(), Duration::from_secs(4));
    }
}
