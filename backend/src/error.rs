use std::{error::Error, fmt};

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;

pub type Result<T, E = HostError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum HostError {
    /// Invalid host settings; fatal at startup.
    Config(String),
    /// The code-generation service could not be reached or answered garbage.
    Upstream(String),
}

impl Error for HostError {}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HostError::Config(msg) => write!(f, "Configuration error: {}", msg),
            HostError::Upstream(msg) => write!(f, "Code generation service unavailable: {}", msg),
        }
    }
}

impl ResponseError for HostError {
    fn status_code(&self) -> StatusCode {
        match self {
            HostError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HostError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error!("{self}");
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": self.to_string() }))
    }
}

impl From<reqwest::Error> for HostError {
    fn from(e: reqwest::Error) -> Self {
        HostError::Upstream(e.to_string())
    }
}
