//! Voice selection against the host's installed synthesis voices.
//!
//! The assistant prefers the named female voices it was tuned for, then
//! falls back through increasingly loose matches. The chain is
//! deterministic for a given voice list so hosts (and tests) can
//! predict which voice will speak.

use crate::session::Language;

/// One installed synthesis voice as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    /// Display name, e.g. "Microsoft Kalpana - Hindi (India)".
    pub name: String,
    /// Voice locale tag, e.g. "hi-IN".
    pub lang: String,
}

impl VoiceInfo {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// Named voices tried first, in order, for Hindi output.
const HINDI_PREFERRED: &[&str] = &[
    "Microsoft Kalpana - Hindi (India)",
    "Microsoft Rashmi - Hindi (India)",
    "Google हिन्दी",
    "Hindi (India)",
    "hi-IN-Wavenet-A",
    "hi-IN-Wavenet-B",
    "hi-IN-Standard-A",
    "hi-IN-Standard-B",
];

/// Named voices tried first, in order, for English output.
const ENGLISH_PREFERRED: &[&str] = &[
    "Microsoft Zira - English (United States)",
    "Microsoft Eva - English (United States)",
    "Google US English",
    "Samantha",
    "Alice",
    "Victoria",
    "Allison",
    "Ava",
    "Susan",
    "Vicki",
];

/// Lower-case name fragments that mark a voice as female.
const HINDI_FEMALE_HINTS: &[&str] = &["female", "woman", "kalpana", "rashmi"];
const ENGLISH_FEMALE_HINTS: &[&str] = &[
    "female", "woman", "samantha", "alice", "victoria", "zira", "eva",
];

fn lang_prefix(language: Language) -> &'static str {
    match language {
        Language::Hindi => "hi",
        Language::English => "en",
    }
}

/// Pick the voice to speak `language` with.
///
/// Fallback chain: exact preferred name -> female-sounding voice for
/// the language -> any voice for the language -> first installed voice.
/// Returns `None` only when no voices are installed at all.
pub fn select_voice(voices: &[VoiceInfo], language: Language) -> Option<&VoiceInfo> {
    let (preferred, female_hints) = match language {
        Language::Hindi => (HINDI_PREFERRED, HINDI_FEMALE_HINTS),
        Language::English => (ENGLISH_PREFERRED, ENGLISH_FEMALE_HINTS),
    };

    for name in preferred {
        if let Some(v) = voices.iter().find(|v| v.name.contains(name)) {
            return Some(v);
        }
    }

    let prefix = lang_prefix(language);
    if let Some(v) = voices.iter().find(|v| {
        let lname = v.name.to_lowercase();
        v.lang.contains(prefix) && female_hints.iter().any(|h| lname.contains(h))
    }) {
        return Some(v);
    }

    if let Some(v) = voices.iter().find(|v| v.lang.contains(prefix)) {
        return Some(v);
    }

    voices.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_voices() -> Vec<VoiceInfo> {
        vec![
            VoiceInfo::new("Microsoft David - English (United States)", "en-US"),
            VoiceInfo::new("Microsoft Zira - English (United States)", "en-US"),
            VoiceInfo::new("Microsoft Kalpana - Hindi (India)", "hi-IN"),
            VoiceInfo::new("Google Deutsch", "de-DE"),
        ]
    }

    #[test]
    fn prefers_named_female_voice() {
        let voices = mock_voices();
        let v = select_voice(&voices, Language::English).unwrap();
        assert!(v.name.contains("Zira"));
        let v = select_voice(&voices, Language::Hindi).unwrap();
        assert!(v.name.contains("Kalpana"));
    }

    #[test]
    fn falls_back_to_female_pattern_for_language() {
        let voices = vec![
            VoiceInfo::new("Fancy Male Voice", "en-GB"),
            VoiceInfo::new("Some Female Voice", "en-GB"),
        ];
        let v = select_voice(&voices, Language::English).unwrap();
        assert_eq!(v.name, "Some Female Voice");
    }

    #[test]
    fn falls_back_to_any_voice_for_language() {
        let voices = vec![
            VoiceInfo::new("Google Deutsch", "de-DE"),
            VoiceInfo::new("Plain Narrator", "en-AU"),
        ];
        let v = select_voice(&voices, Language::English).unwrap();
        assert_eq!(v.name, "Plain Narrator");
    }

    #[test]
    fn falls_back_to_first_installed_voice() {
        let voices = vec![VoiceInfo::new("Google Deutsch", "de-DE")];
        let v = select_voice(&voices, Language::Hindi).unwrap();
        assert_eq!(v.name, "Google Deutsch");
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert!(select_voice(&[], Language::Hindi).is_none());
    }

    #[test]
    fn selection_is_deterministic() {
        let voices = mock_voices();
        let a = select_voice(&voices, Language::Hindi).cloned();
        let b = select_voice(&voices, Language::Hindi).cloned();
        assert_eq!(a, b);
    }
}
