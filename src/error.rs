use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Callers only ever see a bare status code; the detail goes to the log.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Speech service rejected the request with status {0}")]
    UpstreamRejected(StatusCode),

    #[error("Speech service unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamRejected(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {} - {}", status, self);
        } else {
            tracing::warn!("Request failed: {} - {}", status, self);
        }

        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::BadRequest("missing text".into()).status(),
            StatusCode::BAD_REQUEST
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(AppError::from(json_err).status(), StatusCode::BAD_REQUEST);

        assert_eq!(
            AppError::UpstreamRejected(StatusCode::UNAUTHORIZED).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_response_has_status_only() {
        let response = AppError::UpstreamRejected(StatusCode::FORBIDDEN).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("content-type").is_none());
    }
}
