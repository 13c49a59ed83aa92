pub(crate) use crate::client::Result;
pub(crate) use reqwest::{Method, Response, Url};
pub(crate) use serde::{Deserialize, Serialize};
pub(crate) use serde_json::Value;

pub mod ocr;
pub mod stt;
pub mod tts;

#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    Empty,
}

/// One callable Google Cloud REST endpoint.
///
/// Each service lives on its own subdomain, so the base URL is part of
/// the endpoint rather than the client.
#[allow(async_fn_in_trait)]
pub trait GoogleEndpoint {
    const BASE_URL: &'static str;

    const PATH: &'static str;

    const METHOD: Method;

    type ResponseBody;

    fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }

    async fn response_body(self, resp: Response) -> Result<Self::ResponseBody>;

    fn url(&self) -> Result<Url> {
        let mut url = Self::BASE_URL.parse::<Url>().map_err(|e| {
            crate::error::Error::InvalidUrl(format!(
                "failed to parse base URL '{}': {e}",
                Self::BASE_URL
            ))
        })?;
        url.set_path(Self::PATH);
        Ok(url)
    }
}
