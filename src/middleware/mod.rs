use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Тело запросов `/book` и `/cancel`: `{ "show": ..., "seat": ... }`.
///
/// Both fields are normalized to text here. Values that count as absent
/// (`null`, `""`, `0`, `false`, or the key missing entirely) become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatRequest {
    pub show: Option<String>,
    pub seat: Option<String>,
}

impl SeatRequest {
    /// Both fields, if both are present.
    pub fn fields(&self) -> Option<(&str, &str)> {
        Some((self.show.as_deref()?, self.seat.as_deref()?))
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        SeatRequest {
            show: object.get("show").and_then(field_text),
            seat: object.get("seat").and_then(field_text),
        }
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            if let Some(int) = n.as_u64() {
                return (int != 0).then(|| int.to_string());
            }
            if let Some(int) = n.as_i64() {
                return Some(int.to_string());
            }
            // 1.0 приходит как f64, но на проводе это тот же показ "1"
            match n.as_f64() {
                Some(f) if f == 0.0 => None,
                Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", f as i64)),
                _ => Some(n.to_string()),
            }
        }
        other => Some(other.to_string()),
    }
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

// JSON extractor без 415/422: всё, что не объект, считается пустым телом
impl<S> FromRequest<S> for SeatRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(
            req.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::InvalidBody)?;

        if !json || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(SeatRequest::default());
        }

        let value: Value = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidBody)?;
        Ok(match value {
            Value::Object(object) => SeatRequest::from_object(&object),
            _ => SeatRequest::default(),
        })
    }
}
