//! Vision AI — emotion-aware bilingual voice assistant core.
//!
//! The heart of the crate is a pure voice-intent router ([`intent`])
//! plus the event-driven runtime that hosts it ([`assistant`]): partial
//! transcripts stream in, a debounce timer finalizes the command, and
//! replies, UI-mode changes, and emotion updates flow back to the host
//! as events. Face embeddings, speech recognition, and synthesis stay
//! outside as injected collaborators, so everything here is testable
//! without a camera or a microphone.

pub mod assistant;
pub mod auth;
pub mod config;
pub mod emotion;
pub mod greeting;
pub mod intent;
pub mod lang;
pub mod logger;
pub mod mood;
pub mod palm;
pub mod projects;
pub mod relax;
pub mod session;
pub mod speech;

pub use assistant::{Assistant, AssistantEvent, AssistantOptions};
pub use emotion::{EmotionDetector, EmotionSample};
pub use intent::{IntentMatch, StateEffect};
pub use session::{Emotion, Language, SessionState, UiMode};
pub use speech::{SpeechSynthesizer, Utterance};
