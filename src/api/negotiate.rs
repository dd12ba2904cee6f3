//! Content negotiation between JSON and plain-text responses.
//!
//! Plain text is the default. A response is JSON-encoded when the request's
//! `Accept` header mentions `json`, or when the payload is structured (a
//! nested value has no plain-text rendering).
//!
//! ```text
//! GET /alpha/8                              -> text/plain        AbCdEfGh
//! GET /alpha/8  Accept: application/json    -> application/json  "AbCdEfGh"
//! ```

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderValue, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::convert::Infallible;

/// A handler result before encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Structured(Value),
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Text(value)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Structured(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Json,
    Text,
}

impl MediaType {
    pub fn content_type(&self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::Text => "text/plain; charset=utf-8",
        }
    }
}

/// Whether an `Accept` header value asks for JSON.
pub fn accepts_json(accept: Option<&str>) -> bool {
    accept.is_some_and(|value| value.to_ascii_lowercase().contains("json"))
}

/// Encodes `payload` for a request carrying the given `Accept` header.
pub fn encode(payload: &Payload, accept: Option<&str>) -> (String, MediaType) {
    match payload {
        Payload::Structured(value) => (value.to_string(), MediaType::Json),
        Payload::Text(text) if accepts_json(accept) => {
            (Value::String(text.clone()).to_string(), MediaType::Json)
        }
        Payload::Text(text) => (text.clone(), MediaType::Text),
    }
}

/// The request's `Accept` header.
#[derive(Debug, Clone, Default)]
pub struct Accept(pub Option<String>);

impl Accept {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self(
            headers
                .get(header::ACCEPT)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
        )
    }

    /// Encodes `payload` according to this `Accept` header.
    pub fn respond(&self, payload: impl Into<Payload>) -> Negotiated {
        let (body, media_type) = encode(&payload.into(), self.0.as_deref());
        Negotiated { body, media_type }
    }
}

impl<S> FromRequestParts<S> for Accept
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// An encoded response body with its media type.
#[derive(Debug, Clone, PartialEq)]
pub struct Negotiated {
    pub body: String,
    pub media_type: MediaType,
}

impl IntoResponse for Negotiated {
    fn into_response(self) -> Response {
        (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static(self.media_type.content_type()),
            )],
            self.body,
        )
            .into_response()
    }
}
