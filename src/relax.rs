//! Relaxation-mode content: guided activities and the 4-7-8 breathing
//! cycle, modeled as a pure phase state machine the host animates.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;

// ── Breathing ───────────────────────────────────────────────────────

/// Phases of the 4-7-8 breathing technique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathingPhase {
    #[default]
    Inhale,
    Hold,
    Exhale,
}

impl BreathingPhase {
    /// How long the host holds this phase before advancing.
    pub fn duration(&self) -> Duration {
        match self {
            BreathingPhase::Inhale => Duration::from_secs(4),
            BreathingPhase::Hold => Duration::from_secs(7),
            BreathingPhase::Exhale => Duration::from_secs(8),
        }
    }

    pub fn next(&self) -> BreathingPhase {
        match self {
            BreathingPhase::Inhale => BreathingPhase::Hold,
            BreathingPhase::Hold => BreathingPhase::Exhale,
            BreathingPhase::Exhale => BreathingPhase::Inhale,
        }
    }

    /// On-screen prompt for this phase.
    pub fn prompt(&self) -> &'static str {
        match self {
            BreathingPhase::Inhale => "INHALE",
            BreathingPhase::Hold => "HOLD",
            BreathingPhase::Exhale => "EXHALE",
        }
    }
}

// ── Activities ──────────────────────────────────────────────────────

/// One relaxation activity card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Spoken when the activity starts.
    pub instruction: &'static str,
}

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        id: "breathing",
        title: "Breathing Exercise",
        description: "Guided 4-7-8 breathing technique for instant calm",
        instruction: "Let's start with some deep breathing. Follow the circle.",
    },
    Activity {
        id: "meditation",
        title: "Quick Meditation",
        description: "5-minute mindfulness session",
        instruction: "Close your eyes and focus on your breath. Let your thoughts flow without judgment.",
    },
    Activity {
        id: "music",
        title: "Ambient Sounds",
        description: "Nature sounds and calming music",
        instruction: "Imagine yourself in a peaceful forest with gentle rain and bird songs.",
    },
    Activity {
        id: "stretching",
        title: "Desk Stretches",
        description: "Simple exercises for your workspace",
        instruction: "Let's do some neck rolls. Slowly roll your head in a circle, then switch directions.",
    },
    Activity {
        id: "eyerest",
        title: "Eye Rest",
        description: "20-20-20 rule for eye strain relief",
        instruction: "Look at something 20 feet away for 20 seconds. This helps reduce eye strain.",
    },
    Activity {
        id: "quotes",
        title: "Inspiration",
        description: "Motivational quotes and affirmations",
        instruction: "Here is something to keep you going.",
    },
];

pub const QUOTES: &[&str] = &[
    "Every expert was once a beginner.",
    "Progress, not perfection.",
    "The best time to plant a tree was 20 years ago. The second best time is now.",
    "Your future self will thank you for the rest you take today.",
];

pub fn find_activity(id: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.id == id)
}

/// Random motivational quote for the inspiration activity.
pub fn random_quote<R: Rng>(rng: &mut R) -> &'static str {
    QUOTES[rng.gen_range(0..QUOTES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn breathing_cycle_is_4_7_8() {
        assert_eq!(BreathingPhase::Inhale.duration(), Duration::from_secs(4));
        assert_eq!(BreathingPhase::Hold.duration(), Duration::from_secs(7));
        assert_eq!(BreathingPhase::Exhale.duration(), Duration::from_secs(8));
    }

    #[test]
    fn phases_cycle_in_order() {
        let mut phase = BreathingPhase::default();
        assert_eq!(phase, BreathingPhase::Inhale);
        phase = phase.next();
        assert_eq!(phase, BreathingPhase::Hold);
        phase = phase.next();
        assert_eq!(phase, BreathingPhase::Exhale);
        phase = phase.next();
        assert_eq!(phase, BreathingPhase::Inhale);
    }

    #[test]
    fn six_activities_with_instructions() {
        assert_eq!(ACTIVITIES.len(), 6);
        for a in ACTIVITIES {
            assert!(!a.instruction.is_empty(), "{} lacks an instruction", a.id);
        }
        assert!(find_activity("breathing").is_some());
        assert!(find_activity("skydiving").is_none());
    }

    #[test]
    fn quotes_come_from_the_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert!(QUOTES.contains(&random_quote(&mut rng)));
        }
    }
}
