use axum::http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[derive(Debug)]
pub enum FetchError {
    Network(reqwest::Error),
    Status { status: u16, body: String },
    Parse(serde_json::Error),
    GraphQl(Vec<String>),
    MissingUser(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(err) => write!(f, "request failed: {err}"),
            FetchError::Status { status, body } => write!(f, "api returned {status}: {body}"),
            FetchError::Parse(err) => write!(f, "malformed response: {err}"),
            FetchError::GraphQl(messages) => write!(f, "graphql errors: {}", messages.join("; ")),
            FetchError::MissingUser(login) => write!(f, "no user found for login '{login}'"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(err) => Some(err),
            FetchError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
