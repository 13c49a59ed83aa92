//! Synthesis voice selection.

use crate::language::Language;
use serde::Serialize;

/// Gender requested for a synthesis voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VoiceGender {
    Unspecified,
    Female,
    Male,
}

/// Which cloud voice should speak the synthesized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceSelection {
    /// Language of the voice.
    pub language: Language,
    /// Provider voice name, e.g. "vi-VN-Standard-A".
    pub name: String,
    /// Requested gender.
    pub gender: VoiceGender,
}

impl VoiceSelection {
    /// Create a new voice selection.
    pub fn new(language: Language, name: impl Into<String>, gender: VoiceGender) -> Self {
        Self {
            language,
            name: name.into(),
            gender,
        }
    }

    /// The standard Vietnamese female voice the app reads with.
    pub fn vietnamese_standard_a() -> Self {
        Self::new(Language::VIETNAMESE, "vi-VN-Standard-A", VoiceGender::Female)
    }
}

impl Default for VoiceSelection {
    fn default() -> Self {
        Self::vietnamese_standard_a()
    }
}
