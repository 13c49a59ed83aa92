//! Pronunciation check result returned to the front-end.

use crate::word_score::WordScore;
use serde::{Deserialize, Serialize};

/// Full result of a pronunciation check.
///
/// Pairs the text the user was asked to read with what the recognizer
/// heard, plus one [`WordScore`] per reference word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronunciationReport {
    /// The text the user was expected to pronounce, as submitted.
    pub reference_text: String,
    /// The transcript produced by speech recognition.
    pub your_transcript: String,
    /// Per-word scores in reference order.
    pub word_scores: Vec<WordScore>,
}
