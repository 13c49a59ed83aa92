//! Cloud Speech-to-Text: `speech:recognize`.
//!
//! Wire shapes follow the v1 REST API
//! (<https://cloud.google.com/speech-to-text/docs/reference/rest>).

use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use readcoach_domain::{AudioEncoding, Language, RECOGNITION_SAMPLE_RATE_HZ, Transcript};

/// Synchronously recognize one short utterance.
///
/// Suitable for pronunciation-check clips (a sentence or two); long
/// audio would need the async `longrunningrecognize` API, which the
/// facade has no use for.
#[derive(Debug, Clone)]
pub struct RecognizeSpeech {
    body: RecognizeBody,
}

impl RecognizeSpeech {
    /// Recognize 16 kHz LINEAR16 audio in the given language.
    ///
    /// Punctuation and word offsets are requested to match what the
    /// front-end recording pipeline expects back.
    pub fn new(audio: &[u8], language: Language) -> Self {
        Self {
            body: RecognizeBody {
                config: WireRecognitionConfig {
                    encoding: AudioEncoding::Linear16.wire_name(),
                    sample_rate_hertz: RECOGNITION_SAMPLE_RATE_HZ,
                    language_code: language.code(),
                    enable_automatic_punctuation: true,
                    enable_word_time_offsets: true,
                },
                audio: WireRecognitionAudio {
                    content: BASE64.encode(audio),
                },
            },
        }
    }
}

impl GoogleEndpoint for RecognizeSpeech {
    const BASE_URL: &'static str = "https://speech.googleapis.com";
    const PATH: &'static str = "/v1/speech:recognize";
    const METHOD: Method = Method::POST;

    type ResponseBody = RecognizeResponse;

    fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(&self.body)?))
    }

    async fn response_body(self, resp: Response) -> Result<Self::ResponseBody> {
        Ok(resp.json().await?)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeBody {
    config: WireRecognitionConfig,
    audio: WireRecognitionAudio,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRecognitionConfig {
    encoding: &'static str,
    sample_rate_hertz: u32,
    language_code: &'static str,
    enable_automatic_punctuation: bool,
    enable_word_time_offsets: bool,
}

#[derive(Debug, Clone, Serialize)]
struct WireRecognitionAudio {
    content: String,
}

/// Recognition outcome. `results` is absent entirely when the service
/// heard no speech.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeResponse {
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRecognitionResult {
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRecognitionAlternative {
    #[serde(default)]
    pub transcript: String,
    pub confidence: Option<f32>,
}

impl RecognizeResponse {
    /// Top alternative of the first result, or `None` when nothing was
    /// recognized. Absence is the caller's signal to report "no speech
    /// detected" instead of scoring.
    pub fn into_transcript(self) -> Option<Transcript> {
        let alternative = self.results.into_iter().next()?.alternatives.into_iter().next()?;
        Some(Transcript::new(alternative.transcript, alternative.confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_rest_shape() {
        let endpoint = RecognizeSpeech::new(b"pcm", Language::VIETNAMESE);
        let RequestBody::Json(body) = endpoint.request_body().unwrap() else {
            panic!("recognize must send a JSON body");
        };
        assert_eq!(
            body,
            serde_json::json!({
                "config": {
                    "encoding": "LINEAR16",
                    "sampleRateHertz": 16000,
                    "languageCode": "vi-VN",
                    "enableAutomaticPunctuation": true,
                    "enableWordTimeOffsets": true
                },
                "audio": { "content": BASE64.encode(b"pcm") }
            })
        );
    }

    #[test]
    fn empty_results_is_no_transcript() {
        let resp: RecognizeResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.into_transcript().is_none());
    }

    #[test]
    fn first_alternative_of_first_result_wins() {
        let resp: RecognizeResponse = serde_json::from_value(serde_json::json!({
            "results": [
                { "alternatives": [
                    { "transcript": "xin chào bạn", "confidence": 0.91 },
                    { "transcript": "xin chao ban" }
                ] },
                { "alternatives": [ { "transcript": "khác" } ] }
            ]
        }))
        .unwrap();
        let transcript = resp.into_transcript().unwrap();
        assert_eq!(transcript.text, "xin chào bạn");
        assert_eq!(transcript.confidence, Some(0.91));
    }
}
