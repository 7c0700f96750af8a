//! Assistant runtime: session owner and side-effect applier.
//!
//! Sits between the host (speech recognizer, UI) and the pure intent
//! router. Partial transcripts stream in via [`Assistant::transcript_update`];
//! a debounce timer finalizes the command after a pause in speech, or
//! [`Assistant::stop_listening`] flushes it immediately. Routed replies,
//! state transitions, and emotion updates are emitted to the host as
//! [`AssistantEvent`]s over an unbounded channel.
//!
//! Exactly one command is in flight at a time per session, and a
//! reentrancy guard makes sure two mood queries never race two detector
//! calls. Teardown cancels the debounce timer and the periodic sampler;
//! anything still in flight is discarded behind a liveness flag.

mod debounce;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::emotion::EmotionDetector;
use crate::greeting::greeting_for;
use crate::intent::{self, StateEffect};
use crate::session::{Emotion, Language, SessionState, UiMode};
use crate::speech::{SpeechSynthesizer, Utterance};

use debounce::DebounceTimer;

// ── Timing constants ────────────────────────────────────────────────

/// Silence window after the last partial transcript before a command
/// is finalized. Long enough for users to finish a full sentence.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(4);

/// Delay between the spoken farewell and the logout effect landing.
pub const LOGOUT_DELAY: Duration = Duration::from_secs(2);

/// A mood query reuses the cached emotion instead of re-detecting when
/// the periodic sampler delivered a reading this recently.
pub const FRESH_EMOTION_WINDOW: Duration = Duration::from_secs(1);

/// Cadence of the passive emotion sampler.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(3);

// ── Events ──────────────────────────────────────────────────────────

/// Events emitted by the assistant to its host.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum AssistantEvent {
    /// A routed command produced this reply.
    Reply { text: String, language: Language },
    /// The UI should switch views.
    ModeChange { mode: UiMode },
    /// The detected emotion changed.
    EmotionChange { emotion: Emotion },
    /// An ad-hoc mood detection started/finished.
    AnalyzingEmotion { active: bool },
    /// The passive greeting line was recomputed.
    Greeting { text: String },
    /// A non-empty command was appended to the history.
    CommandRecorded { text: String },
    /// The delayed logout effect landed; the session is over.
    LoggedOut {},
}

// ── Options ─────────────────────────────────────────────────────────

/// Construction-time wiring for an [`Assistant`].
pub struct AssistantOptions {
    pub detector: Option<Arc<dyn EmotionDetector>>,
    pub synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    pub debounce_delay: Duration,
    /// Seed for the reply-pool rng; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for AssistantOptions {
    fn default() -> Self {
        Self {
            detector: None,
            synthesizer: None,
            debounce_delay: DEFAULT_DEBOUNCE,
            rng_seed: None,
        }
    }
}

// ── Assistant ───────────────────────────────────────────────────────

/// The running assistant for one authenticated session.
pub struct Assistant {
    shared: Arc<Shared>,
    debounce: Mutex<DebounceTimer>,
    sampler: Mutex<Option<JoinHandle<()>>>,
}

struct Shared {
    session: Mutex<SessionState>,
    /// Cleared on teardown; nothing mutates state once this is false.
    live: AtomicBool,
    /// Reentrancy guard: one ad-hoc detection in flight at a time.
    analyzing: AtomicBool,
    /// Set while an utterance is playing; cleared by `speech_finished`.
    speaking: AtomicBool,
    /// When the detector last delivered a reading.
    last_sample: Mutex<Option<Instant>>,
    /// Greeting text already auto-spoken (spoken once per text).
    last_greeting: Mutex<Option<String>>,
    /// Latest partial transcript awaiting finalization.
    pending_transcript: Mutex<String>,
    detector: Option<Arc<dyn EmotionDetector>>,
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    rng: Mutex<StdRng>,
    events: UnboundedSender<AssistantEvent>,
    debounce_delay: Duration,
}

impl Assistant {
    /// Start an assistant for `session`, returning it with the event
    /// receiver the host should drain.
    pub fn start(
        session: SessionState,
        options: AssistantOptions,
    ) -> (Self, UnboundedReceiver<AssistantEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let shared = Arc::new(Shared {
            session: Mutex::new(session),
            live: AtomicBool::new(true),
            analyzing: AtomicBool::new(false),
            speaking: AtomicBool::new(false),
            last_sample: Mutex::new(None),
            last_greeting: Mutex::new(None),
            pending_transcript: Mutex::new(String::new()),
            detector: options.detector,
            synthesizer: options.synthesizer,
            rng: Mutex::new(rng),
            events: tx,
            debounce_delay: options.debounce_delay,
        });

        tracing::info!(
            user = %shared.session.lock().unwrap().user_name,
            "Assistant session started"
        );

        // Greet immediately, before the first detector reading arrives.
        shared.refresh_greeting();

        (
            Self {
                shared,
                debounce: Mutex::new(DebounceTimer::new()),
                sampler: Mutex::new(None),
            },
            rx,
        )
    }

    /// Feed a new partial transcript from the recognizer.
    ///
    /// Resets the debounce timer; the command is dispatched after
    /// `debounce_delay` of silence.
    pub fn transcript_update(&self, text: &str) {
        if !self.shared.live.load(Ordering::SeqCst) {
            return;
        }
        *self.shared.pending_transcript.lock().unwrap() = text.to_string();

        let shared = Arc::clone(&self.shared);
        self.debounce
            .lock()
            .unwrap()
            .schedule(self.shared.debounce_delay, async move {
                let transcript =
                    std::mem::take(&mut *shared.pending_transcript.lock().unwrap());
                Shared::dispatch(shared, transcript).await;
            });
    }

    /// Stop listening and process whatever partial transcript exists,
    /// immediately, bypassing the debounce timer.
    pub async fn stop_listening(&self) {
        self.debounce.lock().unwrap().cancel();
        let transcript =
            std::mem::take(&mut *self.shared.pending_transcript.lock().unwrap());
        Shared::dispatch(Arc::clone(&self.shared), transcript).await;
    }

    /// Start the passive emotion sampler (no-op without a detector).
    pub fn spawn_emotion_sampler(&self, interval: Duration) {
        let Some(detector) = self.shared.detector.clone() else {
            return;
        };
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !shared.live.load(Ordering::SeqCst) {
                    break;
                }
                match detector.detect_once().await {
                    Ok(Some(sample)) => {
                        if shared.live.load(Ordering::SeqCst) {
                            shared.apply_emotion(sample.emotion);
                        }
                    }
                    Ok(None) => {}
                    Err(e) => tracing::debug!("Periodic emotion sample failed: {}", e),
                }
            }
        });
        *self.sampler.lock().unwrap() = Some(handle);
    }

    /// Host callback: the synthesizer finished the current utterance.
    pub fn speech_finished(&self) {
        self.shared.speaking.store(false, Ordering::SeqCst);
    }

    /// Snapshot of the current session state.
    pub fn session(&self) -> SessionState {
        self.shared.session.lock().unwrap().clone()
    }

    pub fn is_live(&self) -> bool {
        self.shared.live.load(Ordering::SeqCst)
    }

    /// Tear the session down: cancel the debounce timer and sampler.
    /// In-flight detector calls may complete but their results are
    /// discarded.
    pub fn shutdown(&self) {
        if !self.shared.live.swap(false, Ordering::SeqCst) {
            return;
        }
        self.debounce.lock().unwrap().cancel();
        if let Some(handle) = self.sampler.lock().unwrap().take() {
            handle.abort();
        }
        tracing::info!("Assistant session torn down");
    }
}

impl Drop for Assistant {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl Shared {
    fn emit(&self, event: AssistantEvent) {
        let _ = self.events.send(event);
    }

    /// Finalize and dispatch one transcript.
    async fn dispatch(shared: Arc<Shared>, transcript: String) {
        let trimmed = transcript.trim();
        if trimmed.is_empty() {
            // No command was issued; history stays untouched.
            return;
        }
        if !shared.live.load(Ordering::SeqCst) {
            return;
        }

        tracing::info!(transcript = %trimmed, "Dispatching voice command");

        // A mood query samples the detector once before the reply is
        // composed, so the narrative reflects this moment.
        if let Some((rule, _)) = intent::match_rule(&trimmed.to_lowercase()) {
            if rule.effect == StateEffect::RequestFreshEmotion {
                shared.refresh_emotion().await;
            }
        }
        if !shared.live.load(Ordering::SeqCst) {
            return;
        }

        let now = Local::now();
        let result = {
            let session = shared.session.lock().unwrap();
            let mut rng = shared.rng.lock().unwrap();
            intent::route(trimmed, &session, now, &mut *rng)
        };
        let Some(result) = result else {
            return;
        };
        tracing::debug!(
            intent = result.intent.map(|i| i.as_str()).unwrap_or("fallback"),
            language = %result.language,
            "Intent routed"
        );

        shared.session.lock().unwrap().record_command(trimmed, now);
        shared.emit(AssistantEvent::CommandRecorded {
            text: trimmed.to_string(),
        });

        match result.effect {
            StateEffect::SetMode(mode) => {
                shared.session.lock().unwrap().ui_mode = mode;
                shared.emit(AssistantEvent::ModeChange { mode });
                tracing::info!(mode = %mode, "UI mode changed");
            }
            StateEffect::Logout => {
                let sh = Arc::clone(&shared);
                tokio::spawn(async move {
                    tokio::time::sleep(LOGOUT_DELAY).await;
                    if sh.live.swap(false, Ordering::SeqCst) {
                        sh.emit(AssistantEvent::LoggedOut {});
                        tracing::info!("Session logged out");
                    }
                });
            }
            StateEffect::RequestFreshEmotion | StateEffect::None => {}
        }

        shared.speak(Utterance::reply(result.text.clone(), result.language));
        shared.emit(AssistantEvent::Reply {
            text: result.text,
            language: result.language,
        });
    }

    /// Sample the detector once for a mood query.
    ///
    /// Skipped when the cache is fresh enough or another detection is
    /// already in flight -- the caller then composes its reply from the
    /// cached emotion. Detector failure is recovered the same way.
    async fn refresh_emotion(self: &Arc<Self>) {
        let Some(detector) = self.detector.clone() else {
            return;
        };

        let cache_is_fresh = self
            .last_sample
            .lock()
            .unwrap()
            .map(|at| at.elapsed() < FRESH_EMOTION_WINDOW)
            .unwrap_or(false);
        if cache_is_fresh {
            tracing::debug!("Skipping re-detection; cached emotion is fresh");
            return;
        }

        if self.analyzing.swap(true, Ordering::SeqCst) {
            tracing::debug!("Detection already in flight; using cached emotion");
            return;
        }
        self.emit(AssistantEvent::AnalyzingEmotion { active: true });

        let outcome = detector.detect_once().await;

        self.analyzing.store(false, Ordering::SeqCst);
        if self.live.load(Ordering::SeqCst) {
            self.emit(AssistantEvent::AnalyzingEmotion { active: false });
        }

        match outcome {
            Ok(Some(sample)) => {
                if self.live.load(Ordering::SeqCst) {
                    tracing::info!(
                        emotion = %sample.emotion,
                        confidence = sample.confidence,
                        "Fresh emotion detected"
                    );
                    self.apply_emotion(sample.emotion);
                }
            }
            Ok(None) => {
                tracing::debug!("No face in frame; keeping cached emotion");
            }
            Err(e) => {
                tracing::warn!("Fresh emotion detection failed: {}", e);
            }
        }
    }

    /// Store a detector reading and propagate it to greeting/host.
    fn apply_emotion(&self, emotion: Emotion) {
        *self.last_sample.lock().unwrap() = Some(Instant::now());
        let changed = {
            let mut session = self.session.lock().unwrap();
            if session.current_emotion != emotion {
                session.current_emotion = emotion;
                true
            } else {
                false
            }
        };
        if changed {
            self.emit(AssistantEvent::EmotionChange { emotion });
            self.refresh_greeting();
        }
    }

    /// Recompute the greeting; auto-speak each distinct text once.
    fn refresh_greeting(&self) {
        let (name, emotion) = {
            let session = self.session.lock().unwrap();
            (session.user_name.clone(), session.current_emotion)
        };
        let text = greeting_for(&name, emotion);

        {
            let mut last = self.last_greeting.lock().unwrap();
            if last.as_deref() == Some(text.as_str()) {
                return;
            }
            *last = Some(text.clone());
        }

        // Only auto-speak when nothing else is playing; the greeting
        // will come around again on the next emotion change.
        if let Some(synth) = &self.synthesizer {
            if self
                .speaking
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                synth.speak(Utterance::reply(text.clone(), Language::English));
            }
        }
        self.emit(AssistantEvent::Greeting { text });
    }

    fn speak(&self, utterance: Utterance) {
        if let Some(synth) = &self.synthesizer {
            self.speaking.store(true, Ordering::SeqCst);
            synth.speak(utterance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::testing::ScriptedDetector;
    use crate::emotion::{EmotionDetector, EmotionSample};
    use crate::mood;
    use std::future::Future;
    use std::pin::Pin;

    struct RecordingSynth {
        utterances: Mutex<Vec<Utterance>>,
    }

    impl RecordingSynth {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                utterances: Mutex::new(Vec::new()),
            })
        }

        fn spoken(&self) -> Vec<Utterance> {
            self.utterances.lock().unwrap().clone()
        }
    }

    impl SpeechSynthesizer for RecordingSynth {
        fn speak(&self, utterance: Utterance) {
            self.utterances.lock().unwrap().push(utterance);
        }
    }

    /// Detector that waits out a long (paused-time) delay first.
    struct SlowDetector {
        delay: Duration,
        emotion: Emotion,
    }

    impl EmotionDetector for SlowDetector {
        fn detect_once(
            &self,
        ) -> Pin<Box<dyn Future<Output = anyhow::Result<Option<EmotionSample>>> + Send + '_>>
        {
            Box::pin(async move {
                tokio::time::sleep(self.delay).await;
                Ok(Some(EmotionSample {
                    emotion: self.emotion,
                    confidence: 0.9,
                }))
            })
        }
    }

    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    fn drain(rx: &mut UnboundedReceiver<AssistantEvent>) -> Vec<AssistantEvent> {
        let mut events = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            events.push(ev);
        }
        events
    }

    fn options() -> AssistantOptions {
        AssistantOptions {
            rng_seed: Some(11),
            ..AssistantOptions::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn debounce_fires_after_silence_window() {
        let (assistant, mut rx) = Assistant::start(SessionState::new("Asha"), options());
        drain(&mut rx);

        assistant.transcript_update("hello");
        // Let the debounce task register its sleep before advancing.
        settle().await;
        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;
        assert!(drain(&mut rx).is_empty(), "fired before the silence window");

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        let events = drain(&mut rx);
        assert!(events
            .iter()
            .any(|e| matches!(e, AssistantEvent::Reply { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn new_partial_resets_the_debounce() {
        let (assistant, mut rx) = Assistant::start(SessionState::new("Asha"), options());
        drain(&mut rx);

        assistant.transcript_update("tell me");
        settle().await;
        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;
        assistant.transcript_update("tell me a joke");
        settle().await;
        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;
        assert!(drain(&mut rx).is_empty(), "reset timer fired early");

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;
        let events = drain(&mut rx);
        let recorded: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                AssistantEvent::CommandRecorded { text } => Some(text.clone()),
                _ => None,
            })
            .collect();
        // One dispatch, and with the full transcript.
        assert_eq!(recorded, vec!["tell me a joke".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_listening_bypasses_debounce() {
        let (assistant, mut rx) = Assistant::start(SessionState::new("Asha"), options());
        drain(&mut rx);

        assistant.transcript_update("logout");
        assistant.stop_listening().await;
        let events = drain(&mut rx);
        assert!(events
            .iter()
            .any(|e| matches!(e, AssistantEvent::Reply { text, .. } if text == "Logging you out. Goodbye!")));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_transcript_is_a_no_op() {
        let (assistant, mut rx) = Assistant::start(SessionState::new("Asha"), options());
        drain(&mut rx);

        assistant.transcript_update("   ");
        assistant.stop_listening().await;
        settle().await;

        assert!(drain(&mut rx).is_empty());
        assert!(assistant.session().command_history.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn logout_lands_after_the_declared_delay() {
        assert!(LOGOUT_DELAY > Duration::ZERO);

        let (assistant, mut rx) = Assistant::start(SessionState::new("Asha"), options());
        drain(&mut rx);

        assistant.transcript_update("logout");
        assistant.stop_listening().await;
        let events = drain(&mut rx);
        assert!(!events
            .iter()
            .any(|e| matches!(e, AssistantEvent::LoggedOut {})));
        assert!(assistant.is_live(), "logout applied before the farewell");

        // Let the delayed-logout task register its sleep first.
        settle().await;
        tokio::time::advance(LOGOUT_DELAY).await;
        settle().await;
        let events = drain(&mut rx);
        assert!(events
            .iter()
            .any(|e| matches!(e, AssistantEvent::LoggedOut {})));
        assert!(!assistant.is_live());
    }

    #[tokio::test(start_paused = true)]
    async fn mood_query_uses_fresh_detection_over_cache() {
        let detector = Arc::new(ScriptedDetector::returning(Emotion::Sad));
        let mut session = SessionState::new("Asha");
        session.current_emotion = Emotion::Happy;

        let (assistant, mut rx) = Assistant::start(
            session,
            AssistantOptions {
                detector: Some(detector.clone() as Arc<dyn EmotionDetector>),
                ..options()
            },
        );
        drain(&mut rx);

        assistant.transcript_update("मेरा मूड कैसा है");
        assistant.stop_listening().await;

        let events = drain(&mut rx);
        let reply = events
            .iter()
            .find_map(|e| match e {
                AssistantEvent::Reply { text, language } => Some((text.clone(), *language)),
                _ => None,
            })
            .expect("mood reply");
        // The reply reflects the fresh sample, not the cached value.
        assert_eq!(reply.0, mood::narrative(Emotion::Sad).hindi);
        assert_eq!(reply.1, Language::Hindi);
        assert_eq!(assistant.session().current_emotion, Emotion::Sad);
        assert_eq!(detector.call_count(), 1);

        let analyzing: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, AssistantEvent::AnalyzingEmotion { .. }))
            .collect();
        assert_eq!(analyzing.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn second_mood_query_reuses_fresh_cache() {
        let detector = Arc::new(ScriptedDetector::returning(Emotion::Sad));
        let (assistant, mut rx) = Assistant::start(
            SessionState::new("Asha"),
            AssistantOptions {
                detector: Some(detector.clone() as Arc<dyn EmotionDetector>),
                ..options()
            },
        );
        drain(&mut rx);

        assistant.transcript_update("what is my mood");
        assistant.stop_listening().await;
        assistant.transcript_update("what is my mood");
        assistant.stop_listening().await;

        // Back-to-back queries hit the freshness window; one detection.
        assert_eq!(detector.call_count(), 1);
        let replies = drain(&mut rx)
            .into_iter()
            .filter(|e| matches!(e, AssistantEvent::Reply { .. }))
            .count();
        assert_eq!(replies, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn command_history_caps_at_ten() {
        let (assistant, mut rx) = Assistant::start(SessionState::new("Asha"), options());
        drain(&mut rx);

        for i in 0..12 {
            assistant.transcript_update(&format!("hello number {}", i));
            assistant.stop_listening().await;
        }

        let history = assistant.session().command_history;
        assert_eq!(history.len(), 10);
        assert_eq!(history[0].text, "hello number 11");
        assert_eq!(history[9].text, "hello number 2");
    }

    #[tokio::test(start_paused = true)]
    async fn sampler_updates_emotion_and_greets_once_per_change() {
        let detector = Arc::new(ScriptedDetector::new(vec![Some(EmotionSample {
            emotion: Emotion::Happy,
            confidence: 0.8,
        })]));
        let synth = RecordingSynth::new();
        let (assistant, mut rx) = Assistant::start(
            SessionState::new("Asha"),
            AssistantOptions {
                detector: Some(detector.clone() as Arc<dyn EmotionDetector>),
                synthesizer: Some(synth.clone() as Arc<dyn SpeechSynthesizer>),
                ..options()
            },
        );
        // Startup greeting for the neutral default.
        let startup = drain(&mut rx);
        assert!(startup
            .iter()
            .any(|e| matches!(e, AssistantEvent::Greeting { .. })));
        assert_eq!(synth.spoken().len(), 1);

        assistant.spawn_emotion_sampler(Duration::from_secs(3));
        settle().await;
        let events = drain(&mut rx);
        assert!(events
            .iter()
            .any(|e| matches!(e, AssistantEvent::EmotionChange { emotion } if *emotion == Emotion::Happy)));
        assert!(events
            .iter()
            .any(|e| matches!(e, AssistantEvent::Greeting { text } if text.contains("energetic"))));

        // Same emotion on later ticks: no new greeting, no new events.
        tokio::time::advance(Duration::from_secs(6)).await;
        settle().await;
        assert!(drain(&mut rx).is_empty());
        assert!(detector.call_count() >= 2);

        assistant.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn greeting_autospeak_respects_speaking_flag() {
        let synth = RecordingSynth::new();
        let detector = Arc::new(ScriptedDetector::returning(Emotion::Happy));
        let (assistant, mut rx) = Assistant::start(
            SessionState::new("Asha"),
            AssistantOptions {
                detector: Some(detector as Arc<dyn EmotionDetector>),
                synthesizer: Some(synth.clone() as Arc<dyn SpeechSynthesizer>),
                ..options()
            },
        );
        drain(&mut rx);
        assert_eq!(synth.spoken().len(), 1, "startup greeting speaks");

        // Startup greeting still "playing": the next greeting is not
        // auto-spoken, but is still emitted as an event.
        assistant.spawn_emotion_sampler(Duration::from_secs(3));
        settle().await;
        assert_eq!(synth.spoken().len(), 1);
        assert!(drain(&mut rx)
            .iter()
            .any(|e| matches!(e, AssistantEvent::Greeting { .. })));

        assistant.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn no_state_mutation_after_teardown() {
        let detector = Arc::new(SlowDetector {
            delay: Duration::from_secs(5),
            emotion: Emotion::Sad,
        });
        let (assistant, mut rx) = Assistant::start(
            SessionState::new("Asha"),
            AssistantOptions {
                detector: Some(detector as Arc<dyn EmotionDetector>),
                ..options()
            },
        );
        drain(&mut rx);
        let assistant = Arc::new(assistant);

        // Kick off a mood query whose detection outlives the session.
        let a = Arc::clone(&assistant);
        let inflight = tokio::spawn(async move {
            a.transcript_update("what is my mood");
            a.stop_listening().await;
        });
        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;

        assistant.shutdown();
        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        let _ = inflight.await;

        // The in-flight detection completed but its result was dropped.
        assert_eq!(assistant.session().current_emotion, Emotion::Neutral);
        let events = drain(&mut rx);
        assert!(!events
            .iter()
            .any(|e| matches!(e, AssistantEvent::Reply { .. })));
        assert!(!events
            .iter()
            .any(|e| matches!(e, AssistantEvent::EmotionChange { .. })));

        // And new input is ignored outright.
        assistant.transcript_update("hello");
        assistant.stop_listening().await;
        settle().await;
        assert!(assistant.session().command_history.is_empty());
    }

    #[test]
    fn events_serialize_in_snake_case() {
        let ev = AssistantEvent::ModeChange {
            mode: UiMode::Projects,
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["event"], "mode_change");
        assert_eq!(json["data"]["mode"], "projects");
    }
}
