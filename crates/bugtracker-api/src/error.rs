use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use thiserror::Error;

use crate::config::ServerConfig;

pub const NOT_FOUND_MESSAGE: &str = "Bug not found";
pub const DEFAULT_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{error}")]
    BadBody {
        status: StatusCode,
        error: anyhow::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// An unexpected failure travelling out of a handler.
///
/// The report rides in the response extensions so that [`handle_errors`] can
/// log it and, in development, expose the stack.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub message: String,
    pub stack: String,
}

impl ErrorReport {
    pub fn new(status: StatusCode, message: impl Into<String>, stack: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status,
            message: if message.is_empty() {
                DEFAULT_ERROR_MESSAGE.to_string()
            } else {
                message
            },
            stack: stack.into(),
        }
    }

    fn from_error(status: StatusCode, err: &anyhow::Error) -> Self {
        Self::new(status, err.to_string(), format!("{err:?}"))
    }

    fn render(&self, include_stack: bool) -> Response {
        let body = ErrorResponse {
            message: self.message.clone(),
            stack: include_stack.then(|| self.stack.clone()),
        };
        (self.status, Json(body)).into_response()
    }
}

impl IntoResponse for ErrorReport {
    fn into_response(self) -> Response {
        let mut response = self.render(false);
        response.extensions_mut().insert(self);
        response
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse { errors }),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    message,
                    stack: None,
                }),
            )
                .into_response(),
            ApiError::BadBody { status, error } => {
                ErrorReport::from_error(status, &error).into_response()
            }
            ApiError::Other(err) => {
                ErrorReport::from_error(StatusCode::INTERNAL_SERVER_ERROR, &err).into_response()
            }
        }
    }
}

/// Terminal error middleware: logs every unexpected failure and, when running
/// in development, rewrites the body to include the stack.
pub async fn handle_errors(
    State(config): State<Arc<ServerConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };

    tracing::error!(
        %method,
        %uri,
        status = %report.status,
        "Server error: {}",
        report.stack
    );

    if config.is_development() {
        report.render(true)
    } else {
        response
    }
}

/// Turns a handler panic into a 500 report for [`handle_errors`].
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::new()
    };

    let stack = format!("handler panicked: {detail}");
    ErrorReport::new(StatusCode::INTERNAL_SERVER_ERROR, detail, stack).into_response()
}
