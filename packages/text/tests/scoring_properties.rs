//! Structural properties of the pronunciation scorer over an input grid.

use readcoach_text::{score_pronunciation, tokenize};

const SAMPLE_TEXTS: [&str; 8] = [
    "Xin chào bạn",
    "con mèo nhỏ ngủ trên ghế",
    "  nhiều   khoảng \t trắng  ",
    "MỘT CÂU VIẾT HOA",
    "a",
    "từ từ từ từ",
    "cha\u{0300}o decomposed diacritics",
    "câu có dấu chấm. và dấu phẩy,",
];

#[test]
fn result_length_equals_reference_token_count() {
    for reference in SAMPLE_TEXTS {
        for transcript in SAMPLE_TEXTS {
            let report = score_pronunciation(reference, transcript);
            assert_eq!(
                report.len(),
                tokenize(reference).len(),
                "reference {reference:?} vs transcript {transcript:?}"
            );
        }
    }
}

#[test]
fn scores_take_only_the_three_grades() {
    for reference in SAMPLE_TEXTS {
        for transcript in SAMPLE_TEXTS {
            for word in score_pronunciation(reference, transcript) {
                assert!(
                    matches!(word.pronunciation_score, 50 | 80 | 100),
                    "unexpected score {} for {:?}",
                    word.pronunciation_score,
                    word.word
                );
            }
        }
    }
}

#[test]
fn reference_order_survives_transcript_reversal() {
    for reference in SAMPLE_TEXTS {
        let reversed: Vec<String> = tokenize(reference).into_iter().rev().collect();
        let reversed = reversed.join(" ");
        let forward = score_pronunciation(reference, reference);
        let shuffled = score_pronunciation(reference, &reversed);
        let forward_words: Vec<&str> = forward.iter().map(|w| w.word.as_str()).collect();
        let shuffled_words: Vec<&str> = shuffled.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(forward_words, shuffled_words);
        // Every word is still present in the reversed transcript.
        assert!(shuffled.iter().all(|w| w.pronunciation_score == 100));
    }
}

#[test]
fn scoring_is_deterministic() {
    for reference in SAMPLE_TEXTS {
        for transcript in SAMPLE_TEXTS {
            assert_eq!(
                score_pronunciation(reference, transcript),
                score_pronunciation(reference, transcript)
            );
        }
    }
}
