use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("http error (status {status}): {body}")]
    HttpError { status: u16, body: Value },
    #[error(
        "no Google API key found; set the GOOGLE_API_KEY or GOOGLE_CLOUD_API_KEY \
         environment variable"
    )]
    ApiKeyNotFound,
    #[error("base64 payload invalid: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
    #[error("vision annotation error (code {code}): {message}")]
    AnnotationFailed { code: i32, message: String },
}

impl Error {
    /// HTTP status of the upstream failure, when there was one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Error::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
