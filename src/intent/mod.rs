//! Voice-intent routing: transcript in, reply + declared state effect out.
//!
//! The router is a pure decision function. It performs no I/O and never
//! mutates session state -- side effects are declared as a [`StateEffect`]
//! that the assistant runtime applies. Matching walks a fixed, ordered
//! catalog of rules (see [`catalog`]); the first rule with any trigger
//! phrase contained in the lower-cased transcript wins, and everything
//! else falls through to a language-aware default response.

pub mod catalog;

use chrono::{DateTime, Datelike, Local};
use rand::Rng;

use crate::lang::detect_language;
use crate::mood;
use crate::session::{Emotion, Language, SessionState, UiMode};

// ── Router types ────────────────────────────────────────────────────

/// The recognized command categories, in catalog priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentId {
    MoodQuery,
    SpeakHindi,
    CreateProject,
    TakeBreak,
    PalmReading,
    Joke,
    GoDashboard,
    Logout,
    Greeting,
    AssistantMood,
    TimeQuery,
    DateQuery,
    Help,
    AssistantName,
    UserName,
    Thanks,
}

impl IntentId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentId::MoodQuery => "mood_query",
            IntentId::SpeakHindi => "speak_hindi",
            IntentId::CreateProject => "create_project",
            IntentId::TakeBreak => "take_break",
            IntentId::PalmReading => "palm_reading",
            IntentId::Joke => "joke",
            IntentId::GoDashboard => "go_dashboard",
            IntentId::Logout => "logout",
            IntentId::Greeting => "greeting",
            IntentId::AssistantMood => "assistant_mood",
            IntentId::TimeQuery => "time_query",
            IntentId::DateQuery => "date_query",
            IntentId::Help => "help",
            IntentId::AssistantName => "assistant_name",
            IntentId::UserName => "user_name",
            IntentId::Thanks => "thanks",
        }
    }
}

/// State transition the host must apply for a routed command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateEffect {
    #[default]
    None,
    SetMode(UiMode),
    /// Sample the emotion detector once before composing the reply.
    RequestFreshEmotion,
    /// Log the user out, after a delay long enough for the farewell
    /// to be spoken (see `assistant::LOGOUT_DELAY`).
    Logout,
}

/// One trigger phrase. `language` forces the reply language when this
/// trigger is the one that matched (used for transliterated-Hindi
/// phrases whose script would otherwise read as English); `None` defers
/// to script detection.
#[derive(Debug, Clone, Copy)]
pub struct Trigger {
    pub phrase: &'static str,
    pub language: Option<Language>,
}

/// How a rule's reply text is produced.
#[derive(Debug, Clone, Copy)]
pub enum ResponseSpec {
    /// Fixed bilingual text; `{name}` expands to the user's name.
    Canned {
        hindi: &'static str,
        english: &'static str,
    },
    /// Mood narrative for the session's (freshly sampled) emotion.
    MoodNarrative,
    /// The assistant's own status, mentioning the cached emotion.
    AssistantMood,
    /// Random pick from the per-language joke pools.
    JokePool,
    CurrentTime,
    CurrentDate,
}

/// One entry of the ordered intent catalog.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub id: IntentId,
    pub triggers: &'static [Trigger],
    pub response: ResponseSpec,
    pub effect: StateEffect,
}

/// Result of routing one transcript. `intent` is `None` for the
/// fallback ("I don't understand") response.
#[derive(Debug, Clone)]
pub struct IntentMatch {
    pub intent: Option<IntentId>,
    pub text: String,
    pub language: Language,
    pub effect: StateEffect,
}

impl IntentMatch {
    pub fn matched(&self) -> bool {
        self.intent.is_some()
    }
}

// ── Routing ─────────────────────────────────────────────────────────

/// Route one transcript against the session.
///
/// Returns `None` for empty or whitespace-only input (no command was
/// issued); otherwise exactly one [`IntentMatch`] -- never an error.
/// `now` and `rng` are injected so replies are reproducible in tests.
pub fn route<R: Rng>(
    transcript: &str,
    session: &SessionState,
    now: DateTime<Local>,
    rng: &mut R,
) -> Option<IntentMatch> {
    let normalized = transcript.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    Some(respond(match_rule(&normalized), transcript, session, now, rng))
}

/// First catalog rule with a trigger contained in `normalized`, plus
/// the trigger that matched. Trigger phrases are stored lower-cased.
pub fn match_rule(normalized: &str) -> Option<(&'static IntentRule, &'static Trigger)> {
    for rule in catalog::CATALOG {
        for trigger in rule.triggers {
            if normalized.contains(trigger.phrase) {
                return Some((rule, trigger));
            }
        }
    }
    None
}

fn respond<R: Rng>(
    hit: Option<(&'static IntentRule, &'static Trigger)>,
    transcript: &str,
    session: &SessionState,
    now: DateTime<Local>,
    rng: &mut R,
) -> IntentMatch {
    let detected = detect_language(transcript, session.voice_language);

    let Some((rule, trigger)) = hit else {
        let pool = match detected {
            Language::Hindi => catalog::HINDI_FALLBACKS,
            Language::English => catalog::ENGLISH_FALLBACKS,
        };
        return IntentMatch {
            intent: None,
            text: pool[rng.gen_range(0..pool.len())].to_string(),
            language: detected,
            effect: StateEffect::None,
        };
    };

    let language = trigger.language.unwrap_or(detected);
    IntentMatch {
        intent: Some(rule.id),
        text: build_text(rule, session, language, now, rng),
        language,
        effect: rule.effect,
    }
}

fn build_text<R: Rng>(
    rule: &IntentRule,
    session: &SessionState,
    language: Language,
    now: DateTime<Local>,
    rng: &mut R,
) -> String {
    match rule.response {
        ResponseSpec::Canned { hindi, english } => {
            let raw = match language {
                Language::Hindi => hindi,
                Language::English => english,
            };
            raw.replace("{name}", &session.user_name)
        }
        ResponseSpec::MoodNarrative => mood::narrative(session.current_emotion)
            .in_language(language)
            .to_string(),
        ResponseSpec::AssistantMood => assistant_mood_text(session, language),
        ResponseSpec::JokePool => {
            let pool = match language {
                Language::Hindi => catalog::HINDI_JOKES,
                Language::English => catalog::ENGLISH_JOKES,
            };
            pool[rng.gen_range(0..pool.len())].to_string()
        }
        ResponseSpec::CurrentTime => {
            let time = now.format("%I:%M %p");
            match language {
                Language::Hindi => format!("अभी समय है {}", time),
                Language::English => format!("The current time is {}", time),
            }
        }
        ResponseSpec::CurrentDate => match language {
            Language::Hindi => {
                let weekday =
                    catalog::HINDI_WEEKDAYS[now.weekday().num_days_from_sunday() as usize];
                let month = catalog::HINDI_MONTHS[now.month0() as usize];
                format!("आज है {}, {} {} {}", weekday, now.day(), month, now.year())
            }
            Language::English => format!("Today is {}", now.format("%A, %B %-d, %Y")),
        },
    }
}

fn assistant_mood_text(session: &SessionState, language: Language) -> String {
    match language {
        Language::Hindi => {
            let word = match session.current_emotion {
                Emotion::Happy => "खुश",
                Emotion::Sad => "उदास",
                _ => "सामान्य",
            };
            format!(
                "मैं बहुत अच्छा हूँ {}! आपका मूड {} लग रहा है।",
                session.user_name, word
            )
        }
        Language::English => {
            let word = match session.current_emotion {
                Emotion::Happy => "happy",
                Emotion::Sad => "sad",
                _ => "normal",
            };
            format!(
                "I'm doing great {}! Your mood looks {}.",
                session.user_name, word
            )
        }
    }
}
