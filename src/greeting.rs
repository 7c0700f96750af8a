//! Passive greeting line shown (and auto-spoken once) on the dashboard.
//!
//! Recomputed whenever the periodic emotion sampler reports a change;
//! the runtime makes sure a given greeting text is only spoken once.

use crate::session::Emotion;

/// Personalized one-liner for the current emotion.
pub fn greeting_for(user_name: &str, emotion: Emotion) -> String {
    match emotion {
        Emotion::Happy => format!(
            "Hello {}, you look energetic today! Ready to build something amazing?",
            user_name
        ),
        Emotion::Sad => format!(
            "Hello {}, you seem a bit down. Would you like to take a break or work on something uplifting?",
            user_name
        ),
        Emotion::Angry => format!(
            "Hello {}, you look frustrated. Want to channel that energy into solving a challenging problem?",
            user_name
        ),
        Emotion::Surprised => format!(
            "Hello {}, you look curious! Perfect time to explore new technologies.",
            user_name
        ),
        Emotion::Fearful => format!(
            "Hello {}, feeling uncertain? Let's start with something familiar and build confidence.",
            user_name
        ),
        Emotion::Disgusted => format!(
            "Hello {}, ready to clean up some code and make things better?",
            user_name
        ),
        Emotion::Neutral => format!("Hello {}, ready to continue with your projects?", user_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_includes_name_for_every_emotion() {
        for emotion in Emotion::ALL {
            let g = greeting_for("Asha", emotion);
            assert!(g.contains("Asha"), "no name in greeting for {}", emotion);
            assert!(g.starts_with("Hello "));
        }
    }

    #[test]
    fn greetings_differ_per_emotion() {
        let happy = greeting_for("Asha", Emotion::Happy);
        let sad = greeting_for("Asha", Emotion::Sad);
        assert_ne!(happy, sad);
    }
}
