//! Recognized speech from an STT call.

use serde::{Deserialize, Serialize};

/// Best recognition hypothesis for an utterance.
///
/// Holds the transcript of the top alternative of the first recognition
/// result. Recognition that produced no result at all is represented as
/// the *absence* of a `Transcript`, never as one with empty text, so
/// downstream scoring cannot silently run against nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// The recognized text.
    pub text: String,
    /// Recognizer confidence in `[0.0, 1.0]`, when reported.
    pub confidence: Option<f32>,
}

impl Transcript {
    /// Create a new transcript.
    pub fn new(text: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}
