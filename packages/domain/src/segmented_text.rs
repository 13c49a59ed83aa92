//! Output of the text segmentation step.

use serde::{Deserialize, Serialize};

/// A text broken down for presentation: one entry in
/// `words_per_sentence` per entry in `sentences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedText {
    /// The input after whitespace/diacritic normalization.
    pub normalized: String,
    /// Sentences in input order, terminators attached.
    pub sentences: Vec<String>,
    /// Word tokens of each sentence, same order as `sentences`.
    pub words_per_sentence: Vec<Vec<String>>,
}
