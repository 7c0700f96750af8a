//! The ordered intent catalog and its canned-response pools.
//!
//! Priority is the array order: the first rule with a matching trigger
//! governs the transcript. Mood queries come first so "what's my mood"
//! can never be mis-routed by the generic project/break keywords
//! further down. Trigger phrases are lower-case and mix Devanagari,
//! transliterated Hindi, and English synonyms; transliterated phrases
//! carry an explicit Hindi reply-language tag since their script alone
//! would read as English.

use super::{IntentId, IntentRule, ResponseSpec, StateEffect, Trigger};
use crate::session::{Language, UiMode};

const fn hi(phrase: &'static str) -> Trigger {
    Trigger {
        phrase,
        language: Some(Language::Hindi),
    }
}

const fn en(phrase: &'static str) -> Trigger {
    Trigger {
        phrase,
        language: Some(Language::English),
    }
}

const fn any(phrase: &'static str) -> Trigger {
    Trigger {
        phrase,
        language: None,
    }
}

pub const CATALOG: &[IntentRule] = &[
    IntentRule {
        id: IntentId::MoodQuery,
        triggers: &[
            hi("मेरा मूड"),
            hi("मेरी इमेज"),
            hi("मेरा mood"),
            hi("mera mood"),
            hi("mood kaisa hai"),
            en("what is my mood"),
            en("how is my mood"),
            en("my mood"),
            en("current mood"),
        ],
        response: ResponseSpec::MoodNarrative,
        effect: StateEffect::RequestFreshEmotion,
    },
    IntentRule {
        id: IntentId::SpeakHindi,
        triggers: &[hi("हिंदी में बोलो"), hi("hindi mein bolo"), hi("speak hindi")],
        response: ResponseSpec::Canned {
            hindi: "जी हाँ, मैं हिंदी में बोल सकता हूँ। आपकी क्या सेवा कर सकता हूँ?",
            english: "जी हाँ, मैं हिंदी में बोल सकता हूँ। आपकी क्या सेवा कर सकता हूँ?",
        },
        effect: StateEffect::None,
    },
    IntentRule {
        id: IntentId::CreateProject,
        triggers: &[
            hi("प्रोजेक्ट"),
            hi("project banao"),
            any("project"),
            any("create"),
            any("build"),
        ],
        response: ResponseSpec::Canned {
            hindi: "प्रोजेक्ट टेम्प्लेट्स खोल रहा हूँ। आप क्या बनाना चाहते हैं?",
            english: "Opening project templates for you!",
        },
        effect: StateEffect::SetMode(UiMode::Projects),
    },
    IntentRule {
        id: IntentId::TakeBreak,
        triggers: &[
            hi("आराम"),
            hi("ब्रेक"),
            hi("break chahiye"),
            any("break"),
            any("relax"),
            any("rest"),
        ],
        response: ResponseSpec::Canned {
            hindi: "आराम का समय! रिलैक्सेशन मोड शुरू कर रहा हूँ।",
            english: "Time to relax! Opening relaxation mode.",
        },
        effect: StateEffect::SetMode(UiMode::Relax),
    },
    IntentRule {
        id: IntentId::PalmReading,
        triggers: &[
            hi("हस्तरेखा"),
            hi("भविष्य"),
            hi("hastrekha"),
            any("palm"),
            any("fortune"),
            any("future"),
            any("prediction"),
        ],
        response: ResponseSpec::Canned {
            hindi: "हस्तरेखा विज्ञान शुरू कर रहा हूँ। अपने हाथ की तस्वीर अपलोड करें।",
            english: "Opening palm reading mode. Upload your palm photos to know your future!",
        },
        effect: StateEffect::SetMode(UiMode::PalmReading),
    },
    IntentRule {
        id: IntentId::Joke,
        triggers: &[
            hi("जोक"),
            hi("मजाक"),
            hi("हंसी"),
            hi("joke sunao"),
            any("joke"),
            any("funny"),
        ],
        response: ResponseSpec::JokePool,
        effect: StateEffect::None,
    },
    IntentRule {
        id: IntentId::GoDashboard,
        triggers: &[any("dashboard"), any("home"), hi("डैशबोर्ड")],
        response: ResponseSpec::Canned {
            hindi: "डैशबोर्ड पर वापस जा रहा हूँ।",
            english: "Returning to dashboard.",
        },
        effect: StateEffect::SetMode(UiMode::Dashboard),
    },
    IntentRule {
        id: IntentId::Logout,
        triggers: &[any("logout"), any("sign out"), hi("लॉग आउट")],
        response: ResponseSpec::Canned {
            hindi: "मैं आपको लॉग आउट कर रहा हूँ। अलविदा!",
            english: "Logging you out. Goodbye!",
        },
        effect: StateEffect::Logout,
    },
    IntentRule {
        id: IntentId::Greeting,
        triggers: &[
            any("hello"),
            any("hi"),
            any("hey"),
            hi("नमस्ते"),
            hi("हैलो"),
        ],
        response: ResponseSpec::Canned {
            hindi: "नमस्ते {name}! मैं आपका AI असिस्टेंट हूँ। आज मैं आपकी कैसे मदद कर सकता हूँ?",
            english: "Hello {name}! I'm your AI assistant. How can I help you today?",
        },
        effect: StateEffect::None,
    },
    IntentRule {
        id: IntentId::AssistantMood,
        triggers: &[
            any("how are you"),
            any("how do you feel"),
            hi("कैसे हो"),
            hi("कैसी हो"),
        ],
        response: ResponseSpec::AssistantMood,
        effect: StateEffect::None,
    },
    IntentRule {
        id: IntentId::TimeQuery,
        triggers: &[
            any("time"),
            any("what time"),
            hi("समय"),
            hi("kitne baje"),
        ],
        response: ResponseSpec::CurrentTime,
        effect: StateEffect::None,
    },
    IntentRule {
        id: IntentId::DateQuery,
        triggers: &[
            any("date"),
            any("what date"),
            any("today"),
            hi("आज कौन सा दिन"),
            hi("tarikh"),
        ],
        response: ResponseSpec::CurrentDate,
        effect: StateEffect::None,
    },
    IntentRule {
        id: IntentId::Help,
        triggers: &[
            any("help"),
            any("what can you do"),
            any("commands"),
            hi("मदद"),
            hi("क्या कर सकते हो"),
        ],
        response: ResponseSpec::Canned {
            hindi: "मैं आपका मूड देखकर बता सकता हूँ, प्रोजेक्ट बनाने में मदद कर सकता हूँ, जोक सुना सकता हूँ, समय बता सकता हूँ, और आपकी हस्तरेखा देखकर भविष्य बता सकता हूँ। बस कहिए 'मेरा मूड कैसा है' या 'हस्तरेखा देखो'!",
            english: "I can detect your mood, help create projects, tell jokes, give time and date, and read your palm for fortune telling. Just say 'what's my mood' or 'palm reading'!",
        },
        effect: StateEffect::None,
    },
    IntentRule {
        id: IntentId::AssistantName,
        triggers: &[
            any("your name"),
            any("who are you"),
            hi("तुम्हारा नाम"),
            hi("कौन हो"),
        ],
        response: ResponseSpec::Canned {
            hindi: "मैं Vision AI हूँ, आपका बुद्धिमान सहायक। मैं आपके दैनिक कार्यों में मदद करने के लिए यहाँ हूँ!",
            english: "I am Vision AI, your intelligent assistant. I'm here to help you with your daily tasks!",
        },
        effect: StateEffect::None,
    },
    IntentRule {
        id: IntentId::UserName,
        triggers: &[
            any("my name"),
            any("do you know my name"),
            hi("मेरा नाम"),
            hi("क्या तुम मेरा नाम जानते हो"),
        ],
        response: ResponseSpec::Canned {
            hindi: "जी हाँ, आपका नाम {name} है। मैं आपको अच्छी तरह से जानता हूँ!",
            english: "Yes, your name is {name}. I know you well!",
        },
        effect: StateEffect::None,
    },
    IntentRule {
        id: IntentId::Thanks,
        triggers: &[
            any("thank you"),
            any("thanks"),
            hi("धन्यवाद"),
            hi("शुक्रिया"),
        ],
        response: ResponseSpec::Canned {
            hindi: "आपका स्वागत है! मुझे आपकी मदद करके खुशी होती है।",
            english: "You're welcome! I'm happy to help you.",
        },
        effect: StateEffect::None,
    },
];

// ── Response pools ──────────────────────────────────────────────────

pub const HINDI_JOKES: &[&str] = &[
    "एक आदमी दुकान में गया और बोला - भाई दो किलो खुशी दे दो। दुकानदार बोला - साहब, यहाँ मिठाई की दुकान है, खुशी की नहीं!",
    "पत्नी: आज खाने में क्या बनाऊँ? पति: जो भी बनाओ, प्यार से बनाना। पत्नी: अच्छा तो फिर मैगी बना देती हूँ!",
    "टीचर: बताओ 'आम' का अंग्रेजी में क्या होता है? छात्र: कॉमन सर! टीचर: नहीं, मैंगो। छात्र: सॉरी सर, कॉमन मिस्टेक!",
    "डॉक्टर: आपको क्या तकलीफ है? मरीज: डॉक्टर साहब, मुझे भूलने की बीमारी है। डॉक्टर: कब से? मरीज: कौन सी बीमारी?",
    "प्रोग्रामर का पसंदीदा ड्रिंक क्या है? Java!",
    "कंप्यूटर डॉक्टर के पास क्यों गया? क्योंकि उसे वायरस हो गया था!",
    "प्रोग्रामर अपनी पत्नी से क्या कहता है? 'बेबी, तुम मेरे लिए बग नहीं हो, तुम फीचर हो!'",
    "HTML और CSS में क्या अंतर है? HTML घर है, CSS सजावट है!",
    "क्यों प्रोग्रामर्स को चाय पसंद नहीं? क्योंकि वो कॉफी स्क्रिप्ट पसंद करते हैं!",
];

pub const ENGLISH_JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "Why did the developer go broke? Because they used up all their cache!",
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "What do you call a programmer from Finland? Nerdic!",
    "Why do Java developers wear glasses? Because they don't C sharp!",
];

pub const HINDI_FALLBACKS: &[&str] = &[
    "मैं अभी भी सीख रहा हूँ। कृपया पूछें कि मैं क्या कर सकता हूँ।",
    "मुझे समझ नहीं आया। कृपया 'मदद' कहकर मेरी क्षमताएं जानें।",
    "यह दिलचस्प है! आप मुझसे अपना मूड पूछ सकते हैं या जोक सुनने को कह सकते हैं।",
    "मैं अभी भी सीख रहा हूँ! आप कह सकते हैं 'मेरा मूड कैसा है' या 'प्रोजेक्ट बनाओ'।",
];

pub const ENGLISH_FALLBACKS: &[&str] = &[
    "I am still in a learning phase, please ask what can I do.",
    "I didn't understand that. Please say 'help' to know my capabilities.",
    "That's interesting! You can ask about your mood or request a joke.",
    "I'm still learning! Try saying 'what's my mood' or 'create project'.",
];

/// Sunday-first weekday names for Hindi date replies.
pub const HINDI_WEEKDAYS: [&str; 7] = [
    "रविवार",
    "सोमवार",
    "मंगलवार",
    "बुधवार",
    "गुरुवार",
    "शुक्रवार",
    "शनिवार",
];

pub const HINDI_MONTHS: [&str; 12] = [
    "जनवरी",
    "फ़रवरी",
    "मार्च",
    "अप्रैल",
    "मई",
    "जून",
    "जुलाई",
    "अगस्त",
    "सितंबर",
    "अक्टूबर",
    "नवंबर",
    "दिसंबर",
];
