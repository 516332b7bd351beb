use lambda_http::http::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between receiving a proxy request and
/// returning the upstream JSON.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("IGDB credentials not configured")]
    Configuration,

    #[error("{0}")]
    BadRequest(String),

    /// The Twitch token endpoint answered with a non-success status.
    #[error("Twitch token failed: {status}")]
    UpstreamAuth { status: u16, body: String },

    /// IGDB answered with a non-success status.
    #[error("IGDB error: {status}")]
    UpstreamApi { status: u16, body: String },

    /// Transport or response-decoding failure on either upstream call.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ProxyError {
    /// Status the proxy answers with. IGDB errors keep IGDB's status; token
    /// failures collapse to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamAuth { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::UpstreamApi { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Upstream body text, where one was captured.
    pub fn details(&self) -> Option<&str> {
        match self {
            ProxyError::UpstreamAuth { body, .. } | ProxyError::UpstreamApi { body, .. } => {
                if body.is_empty() {
                    None
                } else {
                    Some(body.as_str())
                }
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
