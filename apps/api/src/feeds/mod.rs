// Upstream feed adapters.
// The engine never talks to the network: both inputs (skill profile, job
// corpus) arrive through the traits defined here, fetched once per request.
// Credentials are an explicit parameter, never ambient state.

pub mod jobs;
pub mod skills;

use std::fmt;

use axum::http::{header, HeaderMap};
use serde_json::Value;

use crate::errors::AppError;

/// Caller-supplied bearer token, forwarded verbatim to the upstream
/// services. Never validated or minted here.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Credentials must not leak into logs or error messages.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

/// Extracts the bearer token from an `Authorization` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<AccessToken, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| AccessToken::new(token.trim()))
        .filter(|token| !token.as_str().is_empty())
        .ok_or(AppError::Unauthorized)
}

/// Coerces a scalar JSON value to its string form. Upstream payloads
/// occasionally carry numbers or booleans where strings are expected; those
/// become their textual form rather than an error. Nulls, arrays, and
/// objects yield `None`.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
