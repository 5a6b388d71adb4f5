use axum::{body::Body, response::Response};
use serde_json::Value;

use crate::alert::API_ERROR_EVENT;

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    let header_error_message = format!("Headers missing {header_name}");

    response
        .headers()
        .get(header_name)
        .expect(&header_error_message)
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

#[track_caller]
fn get_hx_trigger_events(response: &Response<Body>) -> Value {
    let header = get_header(response, "hx-trigger");

    serde_json::from_str(&header)
        .unwrap_or_else(|error| panic!("HX-Trigger header {header:?} is not JSON: {error}"))
}

/// Assert that `response` raises a blocking notification with `message`.
#[track_caller]
pub(crate) fn assert_api_error_trigger(response: &Response<Body>, message: &str) {
    let events = get_hx_trigger_events(response);

    assert_eq!(
        events.get(API_ERROR_EVENT).and_then(Value::as_str),
        Some(message),
        "want {API_ERROR_EVENT} event with message {message:?}, got {events}"
    );
}

/// Assert that `response` does not ask for any panel to be reloaded.
#[track_caller]
pub(crate) fn assert_no_reload(response: &Response<Body>) {
    let Some(header) = response.headers().get("hx-trigger") else {
        return;
    };
    let events: Value = serde_json::from_slice(header.as_bytes())
        .expect("HX-Trigger header is not JSON");

    let reloads: Vec<_> = events
        .as_object()
        .map(|events| {
            events
                .keys()
                .filter(|event| event.ends_with("-changed"))
                .collect()
        })
        .unwrap_or_default();
    assert!(reloads.is_empty(), "want no reload events, got {reloads:?}");
}
