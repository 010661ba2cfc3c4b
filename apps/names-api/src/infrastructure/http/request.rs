//! Request payload decoding.
//!
//! Both resources accept the same body formats:
//! - JSON (`application/json`, `*/*+json`, or no content type)
//! - form data (`application/x-www-form-urlencoded`), decoded into an
//!   object of strings
//!
//! An empty body decodes to `{}`.

use std::collections::BTreeMap;

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde_json::{Map, Value};

use crate::error::ApiError;

const JSON_MEDIA_TYPE: &str = "application/json";
const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Raw request payload, decoded but not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(pub Value);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let media_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(mime_essence);

        match media_type.as_deref() {
            Some(FORM_MEDIA_TYPE) => {
                let Form(fields) = Form::<BTreeMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::malformed(e.body_text()))?;
                Ok(Self(form_to_object(fields)))
            }
            None => decode_json(req, state).await,
            Some(media) if is_json(media) => decode_json(req, state).await,
            Some(other) => Err(ApiError::unsupported_media_type(other)),
        }
    }
}

async fn decode_json<S>(req: Request, state: &S) -> Result<Payload, ApiError>
where
    S: Send + Sync,
{
    let body = Bytes::from_request(req, state)
        .await
        .map_err(|e| ApiError::malformed(e.body_text()))?;
    parse_json(&body).map(Payload)
}

/// Parse a JSON body; an empty body is an empty object.
fn parse_json(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::malformed(format!("JSON parse error - {e}")))
}

fn form_to_object(fields: BTreeMap<String, String>) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
    )
}

/// Media type without parameters, lowercased.
fn mime_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_json(media_type: &str) -> bool {
    media_type == JSON_MEDIA_TYPE || media_type.ends_with("+json")
}
