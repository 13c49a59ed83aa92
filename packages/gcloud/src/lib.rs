//! Google Cloud REST bindings used by the readcoach facade.
//!
//! Three services are bound, each as a typed endpoint dispatched through
//! one shared [`GoogleClient`]:
//!
//! * Text-to-Speech — [`endpoints::tts::SynthesizeSpeech`]
//! * Speech-to-Text — [`endpoints::stt::RecognizeSpeech`]
//! * Vision OCR — [`endpoints::ocr::AnnotateImages`]
//!
//! ```no_run
//! use readcoach_gcloud::{GoogleClient, endpoints::tts::SynthesizeSpeech};
//! use readcoach_domain::VoiceSelection;
//!
//! # async fn run() -> Result<(), readcoach_gcloud::Error> {
//! let client = GoogleClient::from_env()?;
//! let endpoint = SynthesizeSpeech::new("Xin chào bạn", &VoiceSelection::default());
//! let response = client.hit(endpoint).await?;
//! let mp3 = response.audio_bytes()?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod endpoints;
mod error;

pub use client::{ClientConfig, GoogleClient, Result};
pub use error::Error;
