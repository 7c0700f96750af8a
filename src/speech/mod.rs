//! Speech synthesis boundary.
//!
//! The assistant never talks to a TTS engine directly -- it builds an
//! [`Utterance`] (text + language + prosody) and hands it to whatever
//! [`SpeechSynthesizer`] the host injected. Voice selection against the
//! host's installed voice list lives in [`voices`].

pub mod voices;

use crate::session::Language;

/// One request to the synthesizer. Fire-and-forget.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub language: Language,
    /// Speaking rate, 1.0 = engine default.
    pub rate: f32,
    /// Voice pitch, 1.0 = engine default.
    pub pitch: f32,
    /// Playback volume in 0.0..=1.0.
    pub volume: f32,
}

impl Utterance {
    /// Reply utterance with the per-language prosody the assistant uses
    /// everywhere: Hindi speaks slower with a slightly raised pitch,
    /// English a touch faster and higher.
    pub fn reply(text: impl Into<String>, language: Language) -> Self {
        let (rate, pitch) = match language {
            Language::Hindi => (0.7, 1.2),
            Language::English => (0.8, 1.4),
        };
        Self {
            text: text.into(),
            language,
            rate,
            pitch,
            volume: 0.8,
        }
    }

    /// Calmer parameters for relaxation-mode instructions.
    pub fn relax_instruction(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: Language::English,
            rate: 0.8,
            pitch: 1.0,
            volume: 0.7,
        }
    }
}

/// Host-injected synthesis backend.
///
/// `speak` must not block and must not panic when no audio device is
/// available -- the assistant's replies are still delivered as events
/// even if nothing is audible.
pub trait SpeechSynthesizer: Send + Sync {
    fn speak(&self, utterance: Utterance);
}

/// No-op synthesizer for hosts without audio output.
pub struct NullSynthesizer;

impl SpeechSynthesizer for NullSynthesizer {
    fn speak(&self, _utterance: Utterance) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hindi_reply_prosody() {
        let u = Utterance::reply("नमस्ते", Language::Hindi);
        assert_eq!(u.rate, 0.7);
        assert_eq!(u.pitch, 1.2);
        assert_eq!(u.volume, 0.8);
    }

    #[test]
    fn english_reply_prosody() {
        let u = Utterance::reply("hello", Language::English);
        assert_eq!(u.rate, 0.8);
        assert_eq!(u.pitch, 1.4);
        assert_eq!(u.volume, 0.8);
    }

    #[test]
    fn relax_instructions_are_quieter() {
        let u = Utterance::relax_instruction("Follow the circle.");
        assert_eq!(u.rate, 0.8);
        assert_eq!(u.pitch, 1.0);
        assert_eq!(u.volume, 0.7);
    }

    #[test]
    fn null_synthesizer_accepts_anything() {
        NullSynthesizer.speak(Utterance::reply("x", Language::English));
    }
}
