//! Cloud Vision OCR: `images:annotate` with `TEXT_DETECTION`.
//!
//! Wire shapes follow the v1 REST API
//! (<https://cloud.google.com/vision/docs/reference/rest>).

use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Detect text in a single uploaded image.
#[derive(Debug, Clone)]
pub struct AnnotateImages {
    body: BatchAnnotateBody,
}

impl AnnotateImages {
    /// Run text detection over one image.
    pub fn text_detection(image: &[u8]) -> Self {
        Self {
            body: BatchAnnotateBody {
                requests: vec![AnnotateImageRequest {
                    image: WireImage {
                        content: BASE64.encode(image),
                    },
                    features: vec![WireFeature {
                        r#type: "TEXT_DETECTION",
                    }],
                }],
            },
        }
    }
}

impl GoogleEndpoint for AnnotateImages {
    const BASE_URL: &'static str = "https://vision.googleapis.com";
    const PATH: &'static str = "/v1/images:annotate";
    const METHOD: Method = Method::POST;

    type ResponseBody = BatchAnnotateResponse;

    fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(&self.body)?))
    }

    async fn response_body(self, resp: Response) -> Result<Self::ResponseBody> {
        Ok(resp.json().await?)
    }
}

#[derive(Debug, Clone, Serialize)]
struct BatchAnnotateBody {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Clone, Serialize)]
struct AnnotateImageRequest {
    image: WireImage,
    features: Vec<WireFeature>,
}

#[derive(Debug, Clone, Serialize)]
struct WireImage {
    content: String,
}

#[derive(Debug, Clone, Serialize)]
struct WireFeature {
    r#type: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnnotateResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    /// First annotation covers the whole detected block of text.
    #[serde(default)]
    pub text_annotations: Vec<EntityAnnotation>,
    /// Per-image failure reported inside a 200 batch response.
    pub error: Option<WireStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnnotation {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

impl BatchAnnotateResponse {
    /// Full text detected in the image, empty when nothing was found.
    ///
    /// Vision reports per-image failures inside an otherwise successful
    /// batch response; those surface as errors here.
    pub fn extracted_text(mut self) -> Result<String> {
        if self.responses.is_empty() {
            return Ok(String::new());
        }
        let response = self.responses.remove(0);
        if let Some(status) = response.error {
            return Err(crate::error::Error::AnnotationFailed {
                code: status.code,
                message: status.message,
            });
        }
        Ok(response
            .text_annotations
            .into_iter()
            .next()
            .map(|a| a.description)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_rest_shape() {
        let endpoint = AnnotateImages::text_detection(b"png");
        let RequestBody::Json(body) = endpoint.request_body().unwrap() else {
            panic!("annotate must send a JSON body");
        };
        assert_eq!(
            body,
            serde_json::json!({
                "requests": [{
                    "image": { "content": BASE64.encode(b"png") },
                    "features": [{ "type": "TEXT_DETECTION" }]
                }]
            })
        );
    }

    #[test]
    fn no_annotations_yields_empty_text() {
        let resp: BatchAnnotateResponse =
            serde_json::from_value(serde_json::json!({ "responses": [{}] })).unwrap();
        assert_eq!(resp.extracted_text().unwrap(), "");
    }

    #[test]
    fn first_annotation_is_the_full_text() {
        let resp: BatchAnnotateResponse = serde_json::from_value(serde_json::json!({
            "responses": [{
                "textAnnotations": [
                    { "description": "Con mèo ngủ" },
                    { "description": "Con" }
                ]
            }]
        }))
        .unwrap();
        assert_eq!(resp.extracted_text().unwrap(), "Con mèo ngủ");
    }

    #[test]
    fn per_image_error_surfaces() {
        let resp: BatchAnnotateResponse = serde_json::from_value(serde_json::json!({
            "responses": [{ "error": { "code": 3, "message": "bad image data" } }]
        }))
        .unwrap();
        assert!(matches!(
            resp.extracted_text(),
            Err(crate::error::Error::AnnotationFailed { code: 3, .. })
        ));
    }
}
