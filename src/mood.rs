//! Mood narratives spoken in answer to "how is my mood" queries.
//!
//! A pure mapping from the detected emotion to a short localized
//! two-sentence reading. Deterministic; every emotion is covered and
//! unknown input is impossible by construction of the enum.

use crate::session::{Emotion, Language};

/// Localized mood reading for one emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodNarrative {
    pub hindi: &'static str,
    pub english: &'static str,
}

impl MoodNarrative {
    pub fn in_language(&self, language: Language) -> &'static str {
        match language {
            Language::Hindi => self.hindi,
            Language::English => self.english,
        }
    }
}

/// Narrative for `emotion`. Total over the enum; `Neutral` doubles as
/// the default reading.
pub fn narrative(emotion: Emotion) -> MoodNarrative {
    match emotion {
        Emotion::Happy => MoodNarrative {
            hindi: "आपका मूड बहुत खुश लग रहा है! आप बहुत अच्छी तरह से हैं। आपकी मुस्कान से पता चलता है कि आप प्रसन्न हैं।",
            english: "You look very happy! Your smile shows you're in a great mood today.",
        },
        Emotion::Sad => MoodNarrative {
            hindi: "आप थोड़े उदास लग रहे हैं। क्या आप ठीक हैं? क्या मैं कोई जोक सुनाकर आपका मूड बेहतर कर सकता हूँ?",
            english: "You seem a bit sad. Are you okay? Would you like me to tell a joke to cheer you up?",
        },
        Emotion::Angry => MoodNarrative {
            hindi: "आप गुस्से में लग रहे हैं। क्या कोई परेशानी है? थोड़ा आराम कर लीजिए।",
            english: "You look frustrated. Is something bothering you? Maybe take a short break.",
        },
        Emotion::Surprised => MoodNarrative {
            hindi: "आप चौंके हुए लग रहे हैं! कुछ दिलचस्प हुआ है क्या?",
            english: "You look surprised! Did something interesting happen?",
        },
        Emotion::Fearful => MoodNarrative {
            hindi: "आप चिंतित लग रहे हैं। सब कुछ ठीक है, मैं यहाँ आपकी मदद के लिए हूँ।",
            english: "You look worried. Everything is fine, I'm here to help you.",
        },
        Emotion::Disgusted => MoodNarrative {
            hindi: "आप नाराज़ लग रहे हैं। क्या कुछ गलत हुआ है?",
            english: "You look displeased. Did something go wrong?",
        },
        Emotion::Neutral => MoodNarrative {
            hindi: "आपका मूड सामान्य लग रहा है। आप शांत और केंद्रित दिख रहे हैं।",
            english: "Your mood looks neutral. You appear calm and focused.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_emotion_has_both_languages() {
        for emotion in Emotion::ALL {
            let n = narrative(emotion);
            assert!(!n.hindi.is_empty(), "missing hindi for {}", emotion);
            assert!(!n.english.is_empty(), "missing english for {}", emotion);
        }
    }

    #[test]
    fn narratives_are_deterministic() {
        assert_eq!(narrative(Emotion::Sad), narrative(Emotion::Sad));
    }

    #[test]
    fn language_selection() {
        let n = narrative(Emotion::Happy);
        assert!(n.in_language(Language::English).starts_with("You look very happy"));
        assert!(n.in_language(Language::Hindi).contains("खुश"));
    }
}
