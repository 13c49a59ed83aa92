//! # Readcoach Domain
//!
//! Shared domain objects and types for the readcoach backend.
//!
//! This crate contains the core domain types that are shared between
//! the text-processing, cloud-binding, and server components, keeping
//! the pure data model free of any I/O concerns.

pub mod audio;
pub mod error;
pub mod language;
pub mod report;
pub mod segmented_text;
pub mod transcript;
pub mod voice;
pub mod word_score;

// Re-export core types
pub use audio::{AudioEncoding, RECOGNITION_SAMPLE_RATE_HZ};
pub use error::ServiceError;
pub use language::Language;
pub use report::PronunciationReport;
pub use segmented_text::SegmentedText;
pub use transcript::Transcript;
pub use voice::{VoiceGender, VoiceSelection};
pub use word_score::WordScore;
