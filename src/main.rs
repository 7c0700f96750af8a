//! Vision AI — terminal demo harness for the assistant core.
//!
//! Wires the assistant runtime to a scripted emotion detector and a
//! stdout "synthesizer" so the intent router can be driven from a
//! terminal: each stdin line is fed in as a transcript and finalized
//! immediately (the manual stop-listening path). `:partial <text>`
//! streams a partial and leaves the debounce timer running instead.

use std::future::Future;
use std::io::{self, BufRead};
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;

use vision_core::config::read_assistant_config;
use vision_core::emotion::{EmotionDetector, EmotionSample};
use vision_core::palm::{self, PalmImage};
use vision_core::speech::voices::{self, VoiceInfo};
use vision_core::speech::{SpeechSynthesizer, Utterance};
use vision_core::{
    logger, projects, relax, Assistant, AssistantEvent, AssistantOptions, Emotion, SessionState,
};

/// Detector that walks the emotion wheel, one step per sample.
struct CyclingDetector {
    tick: AtomicUsize,
}

impl EmotionDetector for CyclingDetector {
    fn detect_once(
        &self,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Option<EmotionSample>>> + Send + '_>> {
        Box::pin(async move {
            let tick = self.tick.fetch_add(1, Ordering::SeqCst);
            Ok(Some(EmotionSample {
                emotion: Emotion::ALL[tick % Emotion::ALL.len()],
                confidence: 0.9,
            }))
        })
    }
}

/// "Synthesizer" that narrates utterances on stdout, picking a voice
/// from a pretend installed-voice list the way a browser host would.
struct ConsoleSynthesizer {
    voices: Vec<VoiceInfo>,
}

impl ConsoleSynthesizer {
    fn new() -> Self {
        Self {
            voices: vec![
                VoiceInfo::new("Microsoft Zira - English (United States)", "en-US"),
                VoiceInfo::new("Microsoft Kalpana - Hindi (India)", "hi-IN"),
                VoiceInfo::new("Microsoft David - English (United States)", "en-US"),
            ],
        }
    }
}

impl SpeechSynthesizer for ConsoleSynthesizer {
    fn speak(&self, utterance: Utterance) {
        let voice = voices::select_voice(&self.voices, utterance.language)
            .map(|v| v.name.as_str())
            .unwrap_or("no voice");
        println!("[{} @ {}] {}", voice, utterance.language, utterance.text);
    }
}

/// Spawn a blocking thread that forwards stdin lines through a channel.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(text) => {
                    if tx.send(text).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}

fn print_event(event: &AssistantEvent) {
    match event {
        AssistantEvent::Reply { text, language } => println!("reply ({}): {}", language, text),
        AssistantEvent::ModeChange { mode } => println!("mode -> {}", mode),
        AssistantEvent::EmotionChange { emotion } => println!("emotion -> {}", emotion),
        AssistantEvent::AnalyzingEmotion { active } => {
            if *active {
                println!("(analyzing emotion...)");
            }
        }
        AssistantEvent::Greeting { text } => println!("greeting: {}", text),
        AssistantEvent::CommandRecorded { text } => println!("heard: {:?}", text),
        AssistantEvent::LoggedOut {} => println!("logged out"),
    }
}

#[tokio::main]
async fn main() {
    logger::init();

    let config = read_assistant_config();
    let user_name = config.user_name.clone().unwrap_or_else(|| "Friend".into());
    info!(user = %user_name, "Starting demo session");

    let mut session = SessionState::new(user_name);
    session.voice_language = config.voice_language();

    let (assistant, mut events) = Assistant::start(
        session,
        AssistantOptions {
            detector: Some(Arc::new(CyclingDetector {
                tick: AtomicUsize::new(0),
            })),
            synthesizer: Some(Arc::new(ConsoleSynthesizer::new())),
            debounce_delay: config.debounce(),
            rng_seed: None,
        },
    );
    assistant.spawn_emotion_sampler(config.emotion_interval());

    println!("Type a command (Hindi or English). ':partial <text>' streams without");
    println!("finalizing; ':palm', ':templates', ':quote' demo the side modes;");
    println!("':quit' exits. Try 'what is my mood' or 'जोक सुनाओ'.");

    let mut rng = StdRng::from_entropy();
    let mut lines = spawn_stdin_reader();
    loop {
        tokio::select! {
            line = lines.recv() => {
                match line.as_deref() {
                    None | Some(":quit") => break,
                    Some(partial) if partial.starts_with(":partial ") => {
                        assistant.transcript_update(&partial[":partial ".len()..]);
                    }
                    Some(":palm") => demo_palm_reading(&mut rng),
                    Some(":templates") => demo_templates(),
                    Some(":quote") => println!("quote: {}", relax::random_quote(&mut rng)),
                    Some(text) => {
                        assistant.transcript_update(text);
                        assistant.stop_listening().await;
                        assistant.speech_finished();
                    }
                }
            }
            event = events.recv() => {
                match event {
                    Some(AssistantEvent::LoggedOut {}) => {
                        print_event(&AssistantEvent::LoggedOut {});
                        break;
                    }
                    Some(ev) => print_event(&ev),
                    None => break,
                }
            }
        }
    }

    assistant.shutdown();
    info!("Demo session ended");
}

/// Run a canned palm reading over two pretend uploads.
fn demo_palm_reading(rng: &mut StdRng) {
    let images = vec![
        PalmImage {
            name: "left-hand.jpg".into(),
            byte_len: 245_812,
            modified_ms: 1_733_000_000_000,
        },
        PalmImage {
            name: "right-hand.jpg".into(),
            byte_len: 198_334,
            modified_ms: 1_733_000_060_000,
        },
    ];
    let Some(reading) = palm::read_palms(&images, Local::now(), rng) else {
        return;
    };
    println!("palm reading ({}% accuracy)", reading.accuracy);
    for p in &reading.predictions {
        println!("  {}: {}", p.category, p.english);
    }
    println!("  {}", reading.life_line);
    println!("  spoken: {}", reading.spoken_summary);
}

fn demo_templates() {
    for t in projects::TEMPLATES {
        println!("{}: {} [{}]", t.title, t.description, t.setup_time);
    }
    if let Some(t) = projects::find("react-dashboard") {
        println!("announce: {}", projects::announcement(t));
    }
}
