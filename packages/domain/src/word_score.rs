//! Per-word pronunciation score.

use serde::{Deserialize, Serialize};

/// Score assigned to a single reference word after matching it against a
/// recognized transcript.
///
/// One of these is produced for every word of the reference text, in the
/// reference's original order. The score takes one of three values:
/// [`WordScore::EXACT`], [`WordScore::PARTIAL`], or [`WordScore::MISSING`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordScore {
    /// The normalized reference word that was scored.
    pub word: String,
    /// Match score: 100 exact, 80 partial, 50 missing.
    pub pronunciation_score: u8,
}

impl WordScore {
    /// The word appeared verbatim in the transcript.
    pub const EXACT: u8 = 100;
    /// The word and a transcript token contain each other as substrings.
    pub const PARTIAL: u8 = 80;
    /// No transcript token matched.
    pub const MISSING: u8 = 50;

    /// Create a new word score.
    pub fn new(word: impl Into<String>, pronunciation_score: u8) -> Self {
        Self {
            word: word.into(),
            pronunciation_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let score = WordScore::new("mèo", WordScore::EXACT);
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "word": "mèo", "pronunciation_score": 100 })
        );
    }
}
