//! The four facade endpoints plus the readiness root.

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::extract::{Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use readcoach_domain::{PronunciationReport, SegmentedText, ServiceError};
use readcoach_gcloud::endpoints::ocr::AnnotateImages;
use readcoach_gcloud::endpoints::stt::RecognizeSpeech;
use readcoach_gcloud::endpoints::tts::SynthesizeSpeech;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/segment", post(segment_text))
        .route("/api/tts", post(synthesize))
        .route("/api/check-pronunciation", post(check_pronunciation))
        .route("/api/ocr", post(recognize_image_text))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct TextRequest {
    text: String,
}

#[derive(Debug, Serialize)]
struct TtsResponse {
    audio_base64: String,
}

#[derive(Debug, Serialize)]
struct OcrResponse {
    text: String,
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "readcoach backend is ready" }))
}

/// `POST /api/segment` — pure local call, cannot fail.
async fn segment_text(Json(request): Json<TextRequest>) -> Json<SegmentedText> {
    Json(readcoach_text::segment(&request.text))
}

/// `POST /api/tts` — forward to cloud synthesis, answer base64 MP3.
async fn synthesize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TextRequest>,
) -> AppResult<Json<TtsResponse>> {
    let text = require_text("text", Some(request.text))?;
    let endpoint = SynthesizeSpeech::new(&text, &state.voice);
    let response = state
        .gcloud
        .hit(endpoint)
        .await
        .map_err(|e| AppError::upstream("tts", e))?;
    // Already base64 on the wire; hand it through untouched.
    Ok(Json(TtsResponse {
        audio_base64: response.audio_content,
    }))
}

/// `POST /api/check-pronunciation` — multipart `reference_text` +
/// `audio_file`, recognized then scored word by word.
async fn check_pronunciation(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<PronunciationReport>> {
    let mut reference_text: Option<String> = None;
    let mut audio: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_owned();
        match name.as_str() {
            "reference_text" => reference_text = Some(field.text().await?),
            "audio_file" => audio = Some(field.bytes().await?),
            other => tracing::debug!(field = other, "ignoring unknown multipart field"),
        }
    }

    let reference_text = require_text("reference_text", reference_text)?;
    let audio = require_payload("audio_file", audio)?;

    let endpoint = RecognizeSpeech::new(&audio, state.voice.language.clone());
    let response = state
        .gcloud
        .hit(endpoint)
        .await
        .map_err(|e| AppError::upstream("stt", e))?;

    // An absent transcript must never be scored silently.
    let transcript = response.into_transcript().ok_or(ServiceError::NoSpeechDetected)?;

    let word_scores = readcoach_text::score_pronunciation(&reference_text, &transcript.text);
    tracing::info!(
        words = word_scores.len(),
        confidence = ?transcript.confidence,
        "pronunciation check scored"
    );

    Ok(Json(PronunciationReport {
        reference_text,
        your_transcript: transcript.text,
        word_scores,
    }))
}

/// `POST /api/ocr` — multipart `file`, answers the detected text.
async fn recognize_image_text(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<OcrResponse>> {
    let mut image: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            image = Some(field.bytes().await?);
        }
    }

    let image = require_payload("file", image)?;

    let response = state
        .gcloud
        .hit(AnnotateImages::text_detection(&image))
        .await
        .map_err(|e| AppError::upstream("ocr", e))?;
    let text = response
        .extracted_text()
        .map_err(|e| AppError::upstream("ocr", e))?;

    Ok(Json(OcrResponse { text }))
}

/// A text field must be present and hold more than whitespace; blank
/// reference text would otherwise be scored (or synthesized) for real.
fn require_text(name: &'static str, value: Option<String>) -> AppResult<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(AppError::bad_request(format!("{name} must not be empty"))),
        None => Err(AppError::bad_request(format!("{name} is required"))),
    }
}

/// A file part must be present and non-empty; zero bytes is a client
/// mistake, not something worth a round trip to Google.
fn require_payload(name: &'static str, value: Option<Bytes>) -> AppResult<Bytes> {
    match value {
        Some(payload) if !payload.is_empty() => Ok(payload),
        Some(_) => Err(AppError::bad_request(format!("{name} must not be empty"))),
        None => Err(AppError::bad_request(format!("{name} is required"))),
    }
}
