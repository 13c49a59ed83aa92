//! HTTP error mapping for the facade.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use readcoach_domain::ServiceError;

/// Response-side wrapper around [`ServiceError`].
///
/// Status mapping: malformed requests are 400, "no speech detected" is
/// 422 (the request was well-formed, the audio just had nothing in it),
/// upstream cloud failures are 502, local misconfiguration is 500.
#[derive(Debug)]
pub struct AppError(pub ServiceError);

impl AppError {
    /// Wrap a cloud-binding failure with the name of the service that
    /// was being called.
    pub fn upstream(service: &'static str, err: readcoach_gcloud::Error) -> Self {
        let status = err.upstream_status().unwrap_or(502);
        Self(ServiceError::Upstream {
            service,
            status,
            message: err.to_string(),
        })
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(ServiceError::InvalidRequest(message.into()))
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self(ServiceError::InvalidRequest(format!(
            "malformed multipart body: {err}"
        )))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NoSpeechDetected => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            ServiceError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn bad_requests_map_to_400() {
        assert_eq!(
            status_of(AppError::bad_request("text is required")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn silent_audio_maps_to_422() {
        assert_eq!(
            status_of(AppError(ServiceError::NoSpeechDetected)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn upstream_failures_map_to_502() {
        let err = AppError(ServiceError::Upstream {
            service: "tts",
            status: 403,
            message: "quota exceeded".into(),
        });
        assert_eq!(status_of(err), StatusCode::BAD_GATEWAY);
    }
}
