//! Face-based authentication client.
//!
//! The assistant signs users in by face: the host captures a frame,
//! the embedding model reduces it to a 128-dim descriptor, and the
//! auth API matches that descriptor against registered users. This
//! module owns the descriptor shape, the plausibility gate that keeps
//! photos-of-photos and posters out of the capture flow, and the HTTP
//! client for the three auth endpoints.

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::session::Emotion;

/// Length of a face descriptor produced by the embedding model.
pub const FACE_DESCRIPTOR_LEN: usize = 128;

// ── Face capture types ──────────────────────────────────────────────

/// A fixed-length face embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceDescriptor(Vec<f32>);

impl FaceDescriptor {
    pub fn new(values: Vec<f32>) -> anyhow::Result<Self> {
        if values.len() != FACE_DESCRIPTOR_LEN {
            return Err(anyhow!(
                "face descriptor must have {} components, got {}",
                FACE_DESCRIPTOR_LEN,
                values.len()
            ));
        }
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

/// Bounding box of a detected face, in frame pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Mean vertical positions of the key landmark groups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLandmarks {
    pub left_eye_y: f32,
    pub right_eye_y: f32,
    pub nose_y: f32,
    pub mouth_y: f32,
}

/// One detector hit as reported by the host's face model.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceDetection {
    pub descriptor: FaceDescriptor,
    pub score: f32,
    pub bounds: FaceBox,
    pub landmarks: FaceLandmarks,
    pub emotion: Emotion,
}

/// Gate a detection before it is used for registration or login.
///
/// Rejects detections whose geometry doesn't look like a live human
/// face in frame: off proportions, landmark groups out of order, a
/// low-confidence hit, or a face that is implausibly small or large.
pub fn is_plausible_face(detection: &FaceDetection) -> bool {
    let b = &detection.bounds;
    if b.height <= 0.0 {
        return false;
    }

    // Human faces sit in a narrow aspect-ratio band.
    let aspect = b.width / b.height;
    if !(0.6..=1.2).contains(&aspect) {
        return false;
    }

    // Eyes above nose, nose above mouth.
    let lm = &detection.landmarks;
    let eye_y = (lm.left_eye_y + lm.right_eye_y) / 2.0;
    if !(eye_y < lm.nose_y && lm.nose_y < lm.mouth_y) {
        return false;
    }

    if detection.score < 0.5 {
        return false;
    }

    (60.0..=350.0).contains(&b.width)
}

// ── Wire shapes ─────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyFaceRequest<'a> {
    face_descriptor: &'a [f32],
    emotion: Emotion,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    face_descriptor: &'a [f32],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    success: bool,
    #[serde(default)]
    user: Option<UserRecord>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckUsersResponse {
    has_users: bool,
}

/// A registered user as returned by the auth API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    pub email: String,
}

/// Outcome of a face verification attempt. An unrecognized face is a
/// domain outcome, not an error.
#[derive(Debug)]
pub enum VerifyOutcome {
    Matched(AuthenticatedUser),
    NotRecognized { message: Option<String> },
}

/// A matched user plus the context the session is seeded from.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: UserRecord,
    pub emotion_at_login: Emotion,
    pub session_id: Uuid,
}

// ── Client ──────────────────────────────────────────────────────────

/// HTTP client for the authentication API.
pub struct AuthClient {
    base_url: String,
    client: reqwest::Client,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Match a captured descriptor against the registered users.
    pub async fn verify_face(
        &self,
        descriptor: &FaceDescriptor,
        emotion: Emotion,
    ) -> anyhow::Result<VerifyOutcome> {
        debug!(emotion = %emotion, "Verifying face against auth API");
        let resp = self
            .client
            .post(format!("{}/api/auth/verify-face", self.base_url))
            .json(&VerifyFaceRequest {
                face_descriptor: descriptor.as_slice(),
                emotion,
            })
            .send()
            .await
            .context("verify-face request failed")?;

        let body: AuthResponse = resp.json().await.context("verify-face response malformed")?;
        if body.success {
            let user = body
                .user
                .ok_or_else(|| anyhow!("verify-face succeeded without a user record"))?;
            info!(user = %user.name, "Face authentication succeeded");
            Ok(VerifyOutcome::Matched(AuthenticatedUser {
                user,
                emotion_at_login: emotion,
                session_id: Uuid::new_v4(),
            }))
        } else {
            Ok(VerifyOutcome::NotRecognized {
                message: body.message,
            })
        }
    }

    /// Register a new user with their captured descriptor.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        descriptor: &FaceDescriptor,
    ) -> anyhow::Result<UserRecord> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(anyhow!("name and email are required"));
        }

        let resp = self
            .client
            .post(format!("{}/api/auth/register", self.base_url))
            .json(&RegisterRequest {
                name,
                email,
                face_descriptor: descriptor.as_slice(),
            })
            .send()
            .await
            .context("register request failed")?;

        let body: AuthResponse = resp.json().await.context("register response malformed")?;
        if !body.success {
            return Err(anyhow!(
                "registration rejected: {}",
                body.message.unwrap_or_else(|| "unknown reason".into())
            ));
        }
        body.user
            .ok_or_else(|| anyhow!("registration succeeded without a user record"))
    }

    /// Whether any users are registered yet (drives the onboarding flow).
    pub async fn check_users(&self) -> anyhow::Result<bool> {
        let resp = self
            .client
            .get(format!("{}/api/auth/check-users", self.base_url))
            .send()
            .await
            .context("check-users request failed")?;
        let body: CheckUsersResponse =
            resp.json().await.context("check-users response malformed")?;
        Ok(body.has_users)
    }
}
