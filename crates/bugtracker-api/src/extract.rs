use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Loosely-typed JSON request body.
///
/// A missing body, a missing or non-JSON content type, or a top-level array
/// all read as `{}`. Malformed JSON and top-level scalars are rejected with
/// 400 and go through the error middleware.
#[derive(Debug, Default)]
pub struct JsonBody(pub Map<String, Value>);

impl JsonBody {
    /// The field's value if it is present and a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.contains("json"));

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadBody {
                status: rejection.status(),
                error: anyhow::anyhow!(rejection.body_text()),
            })?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|err| ApiError::BadBody {
            status: StatusCode::BAD_REQUEST,
            error: err.into(),
        })?;

        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Array(_) => Ok(Self::default()),
            scalar => Err(ApiError::BadBody {
                status: StatusCode::BAD_REQUEST,
                error: anyhow::anyhow!("JSON body must be an object or array, got {scalar}"),
            }),
        }
    }
}
