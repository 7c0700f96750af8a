//! Session state shared between the intent router and its host.
//!
//! The router never mutates this directly -- it declares a `StateEffect`
//! and the assistant runtime applies it. The shapes here are serialized
//! as camelCase JSON so a host UI can persist and render them.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Number of entries retained in the command history, newest first.
pub const COMMAND_HISTORY_CAP: usize = 10;

/// The seven facial expressions the emotion detector can report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Surprised,
    Fearful,
    Disgusted,
    #[default]
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Surprised,
        Emotion::Fearful,
        Emotion::Disgusted,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Fearful => "fearful",
            Emotion::Disgusted => "disgusted",
            Emotion::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which top-level view the dashboard is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    #[default]
    Dashboard,
    Projects,
    Relax,
    PalmReading,
}

impl std::fmt::Display for UiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UiMode::Dashboard => "dashboard",
            UiMode::Projects => "projects",
            UiMode::Relax => "relax",
            UiMode::PalmReading => "palmreading",
        };
        f.write_str(s)
    }
}

/// The two languages the assistant understands and speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Hindi,
    English,
}

impl Language {
    /// BCP-47 tag handed to the speech synthesizer.
    pub fn bcp47(&self) -> &'static str {
        match self {
            Language::Hindi => "hi-IN",
            Language::English => "en-US",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.bcp47())
    }
}

/// One processed voice command, as shown in the history sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEntry {
    pub text: String,
    /// Wall-clock time of dispatch, formatted "HH:MM:SS".
    pub timestamp: String,
}

/// Per-login session state owned by the assistant runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Display name; never empty once authenticated.
    pub user_name: String,
    #[serde(default)]
    pub current_emotion: Emotion,
    #[serde(default)]
    pub ui_mode: UiMode,
    #[serde(default)]
    pub voice_language: Language,
    #[serde(default)]
    pub command_history: Vec<CommandEntry>,
}

impl SessionState {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            current_emotion: Emotion::Neutral,
            ui_mode: UiMode::Dashboard,
            voice_language: Language::Hindi,
            command_history: Vec::new(),
        }
    }

    /// Prepend a command to the history, evicting the oldest past the cap.
    pub fn record_command(&mut self, text: &str, at: DateTime<Local>) {
        self.command_history.insert(
            0,
            CommandEntry {
                text: text.to_string(),
                timestamp: at.format("%H:%M:%S").to_string(),
            },
        );
        self.command_history.truncate(COMMAND_HISTORY_CAP);
    }
}
