//! Script-based language detection for transcripts.
//!
//! Commands arrive in Devanagari, transliterated Hindi, or English --
//! often mixed within one utterance. Reply language is picked by
//! counting which script dominates; ties fall back to the session's
//! configured voice language so numeric- or punctuation-only input
//! doesn't flip-flop between languages.

use crate::session::Language;

/// Detect the dominant language of `text`.
///
/// Counts scalars in the Devanagari block (U+0900..=U+097F) against
/// ASCII letters; the majority wins and `fallback` breaks ties.
/// Total -- always returns a value.
pub fn detect_language(text: &str, fallback: Language) -> Language {
    let mut hindi = 0usize;
    let mut latin = 0usize;
    for c in text.chars() {
        if ('\u{0900}'..='\u{097F}').contains(&c) {
            hindi += 1;
        } else if c.is_ascii_alphabetic() {
            latin += 1;
        }
    }

    match hindi.cmp(&latin) {
        std::cmp::Ordering::Greater => Language::Hindi,
        std::cmp::Ordering::Less => Language::English,
        std::cmp::Ordering::Equal => fallback,
    }
}

/// Whether `text` contains any Devanagari scalar.
pub fn contains_devanagari(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devanagari_majority_wins() {
        assert_eq!(
            detect_language("मेरा मूड कैसा है", Language::English),
            Language::Hindi
        );
    }

    #[test]
    fn latin_majority_wins() {
        assert_eq!(
            detect_language("what is my mood", Language::Hindi),
            Language::English
        );
    }

    #[test]
    fn mixed_script_counts_characters() {
        // More Devanagari scalars than ASCII letters.
        assert_eq!(
            detect_language("मेरा मूड कैसा है ok", Language::English),
            Language::Hindi
        );
        // More ASCII letters than Devanagari scalars.
        assert_eq!(
            detect_language("please tell me मूड", Language::Hindi),
            Language::English
        );
    }

    #[test]
    fn tie_falls_back_to_session_language() {
        assert_eq!(detect_language("1234 !?", Language::Hindi), Language::Hindi);
        assert_eq!(detect_language("", Language::English), Language::English);
    }

    #[test]
    fn devanagari_probe() {
        assert!(contains_devanagari("project बनाओ"));
        assert!(!contains_devanagari("project banao"));
    }
}
