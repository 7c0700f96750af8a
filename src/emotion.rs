//! Emotion detection boundary.
//!
//! The real detector runs a face-expression model against webcam
//! frames; here it is only a contract. `detect_once` returns the
//! dominant expression of a single frame, or `None` when no face is
//! visible. The trait returns a pinned boxed future so it stays
//! dyn-compatible for injection into the assistant runtime.

use std::future::Future;
use std::pin::Pin;

use crate::session::Emotion;

/// One detector reading: dominant expression plus its confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionSample {
    pub emotion: Emotion,
    pub confidence: f32,
}

/// Host-injected detector backend.
pub trait EmotionDetector: Send + Sync {
    /// Sample the current frame once.
    ///
    /// `Ok(None)` means no face was present; errors are recoverable --
    /// callers fall back to the last cached emotion.
    fn detect_once(
        &self,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Option<EmotionSample>>> + Send + '_>>;
}
