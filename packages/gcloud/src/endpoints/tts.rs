//! Cloud Text-to-Speech: `text:synthesize`.
//!
//! Wire shapes follow the v1 REST API
//! (<https://cloud.google.com/text-to-speech/docs/reference/rest>).

use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use readcoach_domain::{AudioEncoding, VoiceGender, VoiceSelection};

/// Synthesize one utterance into MP3 audio.
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    body: SynthesizeSpeechBody,
}

impl SynthesizeSpeech {
    /// Synthesize `text` with the given voice, MP3 output.
    pub fn new(text: impl Into<String>, voice: &VoiceSelection) -> Self {
        Self {
            body: SynthesizeSpeechBody {
                input: SynthesisInput { text: text.into() },
                voice: WireVoiceParams::from(voice),
                audio_config: WireAudioConfig {
                    audio_encoding: AudioEncoding::Mp3.wire_name(),
                },
            },
        }
    }
}

impl GoogleEndpoint for SynthesizeSpeech {
    const BASE_URL: &'static str = "https://texttospeech.googleapis.com";
    const PATH: &'static str = "/v1/text:synthesize";
    const METHOD: Method = Method::POST;

    type ResponseBody = SynthesizeSpeechResponse;

    fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(&self.body)?))
    }

    async fn response_body(self, resp: Response) -> Result<Self::ResponseBody> {
        Ok(resp.json().await?)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeSpeechBody {
    input: SynthesisInput,
    voice: WireVoiceParams,
    audio_config: WireAudioConfig,
}

#[derive(Debug, Clone, Serialize)]
struct SynthesisInput {
    text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireVoiceParams {
    language_code: String,
    name: String,
    ssml_gender: &'static str,
}

impl From<&VoiceSelection> for WireVoiceParams {
    fn from(voice: &VoiceSelection) -> Self {
        Self {
            language_code: voice.language.code().to_owned(),
            name: voice.name.clone(),
            ssml_gender: match voice.gender {
                VoiceGender::Unspecified => "SSML_VOICE_GENDER_UNSPECIFIED",
                VoiceGender::Female => "FEMALE",
                VoiceGender::Male => "MALE",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireAudioConfig {
    audio_encoding: &'static str,
}

/// Synthesis result: base64-encoded audio.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeSpeechResponse {
    /// Base64 MP3 payload, as delivered on the wire.
    pub audio_content: String,
}

impl SynthesizeSpeechResponse {
    /// Decode the synthesized audio into raw MP3 bytes.
    pub fn audio_bytes(&self) -> Result<Vec<u8>> {
        Ok(BASE64.decode(&self.audio_content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_rest_shape() {
        let endpoint = SynthesizeSpeech::new("Xin chào", &VoiceSelection::default());
        let RequestBody::Json(body) = endpoint.request_body().unwrap() else {
            panic!("synthesize must send a JSON body");
        };
        assert_eq!(
            body,
            serde_json::json!({
                "input": { "text": "Xin chào" },
                "voice": {
                    "languageCode": "vi-VN",
                    "name": "vi-VN-Standard-A",
                    "ssmlGender": "FEMALE"
                },
                "audioConfig": { "audioEncoding": "MP3" }
            })
        );
    }

    #[test]
    fn url_targets_the_tts_service() {
        let endpoint = SynthesizeSpeech::new("a", &VoiceSelection::default());
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://texttospeech.googleapis.com/v1/text:synthesize"
        );
    }

    #[test]
    fn audio_bytes_decodes_base64() {
        let resp = SynthesizeSpeechResponse {
            audio_content: BASE64.encode(b"mp3-bytes"),
        };
        assert_eq!(resp.audio_bytes().unwrap(), b"mp3-bytes");
    }
}
