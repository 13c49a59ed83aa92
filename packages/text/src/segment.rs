//! Rule-based sentence and word segmentation.
//!
//! A deliberately simple stand-in for an ML tokenizer: the front-end
//! only needs sentence boundaries and word tokens for display pacing,
//! so terminal punctuation plus whitespace is enough.

use crate::normalize::normalize;
use readcoach_domain::SegmentedText;

/// Characters that end a sentence.
const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', '…'];

/// Punctuation stripped from the edges of a display word token.
const EDGE_PUNCTUATION: [char; 13] = [
    '.', ',', '!', '?', '…', ';', ':', '"', '\'', '(', ')', '\u{201C}', '\u{201D}',
];

/// Split a text into normalized sentences and per-sentence word tokens.
///
/// Sentences keep their terminator attached; an unterminated trailing
/// fragment still counts as a sentence. Word tokens are whitespace
/// splits with edge punctuation stripped, and tokens that were pure
/// punctuation are dropped. `words_per_sentence` always has one entry
/// per sentence, possibly empty.
pub fn segment(text: &str) -> SegmentedText {
    let normalized = normalize(text);

    let mut sentences = Vec::new();
    let mut current = String::new();
    for ch in normalized.chars() {
        current.push(ch);
        if SENTENCE_TERMINATORS.contains(&ch) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_owned());
            }
            current.clear();
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_owned());
    }

    let words_per_sentence = sentences.iter().map(|s| words_of(s)).collect();

    SegmentedText {
        normalized,
        sentences,
        words_per_sentence,
    }
}

fn words_of(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .filter_map(|token| {
            let word = token.trim_matches(&EDGE_PUNCTUATION[..]);
            (!word.is_empty()).then(|| word.to_owned())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sentences_on_terminators() {
        let seg = segment("Con mèo ngủ. Con chó chạy!");
        assert_eq!(seg.sentences, vec!["Con mèo ngủ.", "Con chó chạy!"]);
    }

    #[test]
    fn unterminated_tail_is_a_sentence() {
        let seg = segment("Xin chào. bạn khỏe không");
        assert_eq!(seg.sentences, vec!["Xin chào.", "bạn khỏe không"]);
    }

    #[test]
    fn one_word_list_per_sentence() {
        let seg = segment("Con mèo ngủ. Con chó chạy nhanh!");
        assert_eq!(seg.words_per_sentence.len(), seg.sentences.len());
        assert_eq!(seg.words_per_sentence[0], vec!["Con", "mèo", "ngủ"]);
        assert_eq!(seg.words_per_sentence[1], vec!["Con", "chó", "chạy", "nhanh"]);
    }

    #[test]
    fn strips_edge_punctuation_from_words() {
        let seg = segment("\"Mèo\", nói: chạy!");
        assert_eq!(seg.words_per_sentence[0], vec!["Mèo", "nói", "chạy"]);
    }

    #[test]
    fn empty_input_segments_to_nothing() {
        let seg = segment("   ");
        assert!(seg.sentences.is_empty());
        assert!(seg.words_per_sentence.is_empty());
        assert_eq!(seg.normalized, "");
    }
}
