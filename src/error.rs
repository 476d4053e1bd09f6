use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    RidesNotFoundError,
    ServerError,
}

#[derive(Debug)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

/// Domain errors are reported in the body, so the status is always `200 OK`.
/// Server errors never expose their internal message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = match self.code {
            ErrorCode::ServerError => "Unknown Error",
            _ => self.message.as_str(),
        };

        let body = Json(json!({
            "error_code": self.code,
            "message": message,
        }));

        (StatusCode::OK, body).into_response()
    }
}

pub fn validation_error(message: impl Into<String>) -> Error {
    Error {
        code: ErrorCode::ValidationError,
        message: message.into(),
    }
}

pub fn rides_not_found_error() -> Error {
    Error {
        code: ErrorCode::RidesNotFoundError,
        message: "Could not find any rides".into(),
    }
}

pub fn server_error() -> Error {
    Error {
        code: ErrorCode::ServerError,
        message: "Unknown Error".into(),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    Error {
        code: ErrorCode::ServerError,
        message: format!("environment variable error: {}", err),
    }
}

pub fn invalid_config_error(name: &str, value: &str) -> Error {
    Error {
        code: ErrorCode::ServerError,
        message: format!("invalid value for {}: {:?}", name, value),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!(error = ?err, "database error");

    Error {
        code: ErrorCode::ServerError,
        message: "database error".into(),
    }
}
