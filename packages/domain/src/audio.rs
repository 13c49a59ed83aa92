//! Audio encodings exchanged with the cloud services.

use serde::{Deserialize, Serialize};

/// Sample rate the front-end records pronunciation audio at, in Hz.
///
/// Recognition requests must declare the same rate or the recognizer
/// rejects the payload.
pub const RECOGNITION_SAMPLE_RATE_HZ: u32 = 16_000;

/// Audio encoding negotiated with a cloud service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioEncoding {
    /// MP3, used for synthesized speech sent back to the front-end.
    Mp3,
    /// 16-bit little-endian PCM, used for uploaded recognition audio.
    Linear16,
}

impl AudioEncoding {
    /// The identifier the Google REST APIs use for this encoding.
    pub const fn wire_name(self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "MP3",
            AudioEncoding::Linear16 => "LINEAR16",
        }
    }
}
