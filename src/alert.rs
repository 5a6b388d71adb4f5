//! Blocking notifications and other client-side events sent via the
//! `HX-Trigger` response header.
//!
//! htmx dispatches each key of the `HX-Trigger` JSON object as an event on
//! the element that made the request. The console page listens for
//! [API_ERROR_EVENT] on the document body and shows its message in a blocking
//! `alert()` dialog.

use std::convert::Infallible;

use axum::{
    http::HeaderValue,
    response::{IntoResponse, IntoResponseParts, Response, ResponseParts},
};
use axum_htmx::HX_TRIGGER;
use serde_json::{Value, json};

use crate::Error;

/// The client-side event that shows a blocking notification.
pub const API_ERROR_EVENT: &str = "api-error";

/// The message shown when the real one cannot be sent in a header.
const FALLBACK_MESSAGE: &str = "Error: API Error";

/// A blocking notification for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    message: String,
}

impl Alert {
    /// Create the notification shown when a user action fails with `error`.
    pub fn from_error(error: &Error) -> Self {
        Self {
            message: format!("Error: {error}"),
        }
    }

    /// The text shown in the notification.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponseParts for Alert {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let header = hx_trigger_header(&json!({ API_ERROR_EVENT: self.message() }))
            .or_else(|| hx_trigger_header(&json!({ API_ERROR_EVENT: FALLBACK_MESSAGE })));

        if let Some(header) = header {
            res.headers_mut().insert(HX_TRIGGER, header);
        }

        Ok(res)
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        (self, ()).into_response()
    }
}

/// Encode `events` as the value of an `HX-Trigger` header.
///
/// Header values must be visible ASCII, so any other character is written as
/// a JSON `\u` escape, which the browser decodes back to the original text.
/// Returns `None` (and logs the reason) if the value still cannot be used as
/// a header.
pub fn hx_trigger_header(events: &Value) -> Option<HeaderValue> {
    let encoded = escape_non_ascii(&events.to_string());

    HeaderValue::from_str(&encoded)
        .inspect_err(|error| {
            tracing::error!("could not encode HX-Trigger header {encoded:?}: {error}")
        })
        .ok()
}

fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());

    for c in json.chars() {
        if c.is_ascii() && !c.is_ascii_control() {
            escaped.push(c);
        } else {
            let mut units = [0u16; 2];

            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }

    escaped
}
