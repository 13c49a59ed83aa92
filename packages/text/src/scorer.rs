//! Word-matching pronunciation scorer.

use crate::normalize::tokenize;
use readcoach_domain::WordScore;

/// Score each word of `reference_text` against a recognized `transcript`.
///
/// Both strings are normalized and tokenized the same way, then every
/// reference word is graded independently against the full transcript:
///
/// * [`WordScore::EXACT`] (100) when the word appears verbatim anywhere
///   in the transcript;
/// * [`WordScore::PARTIAL`] (80) when the first transcript token in scan
///   order contains the word as a substring or vice versa;
/// * [`WordScore::MISSING`] (50) otherwise.
///
/// The output always has exactly one entry per reference word, in the
/// reference's original order. Transcript tokens are never consumed, so
/// a single recognized word can satisfy several reference words. An
/// empty reference yields an empty result; an empty transcript grades
/// every word as missing.
///
/// Callers that want to distinguish "nothing was recognized" from "the
/// reader got every word wrong" must check for an absent transcript
/// before calling; this function happily scores against emptiness.
pub fn score_pronunciation(reference_text: &str, transcript: &str) -> Vec<WordScore> {
    let reference_words = tokenize(reference_text);
    let transcript_words = tokenize(transcript);

    reference_words
        .into_iter()
        .map(|ref_word| {
            // NOTE: the bidirectional substring rule is deliberately
            // lenient; a one-letter reference word matches almost any
            // transcript token. Kept as-is rather than tightened.
            let score = if transcript_words.contains(&ref_word) {
                WordScore::EXACT
            } else if transcript_words
                .iter()
                .any(|t| t.contains(ref_word.as_str()) || ref_word.contains(t.as_str()))
            {
                WordScore::PARTIAL
            } else {
                WordScore::MISSING
            };
            WordScore::new(ref_word, score)
        })
        .collect()
}
