//! The [Backend] implementation that talks to the real REST backend over HTTP.

use async_trait::async_trait;
use reqwest::{
    Client, Method, StatusCode,
    header::{CACHE_CONTROL, CONTENT_TYPE},
};
use serde_json::Value;

use crate::{Error, api::Backend, endpoints};

/// The base URL of the backend when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// The message used when an error response has no usable `detail`.
const GENERIC_API_ERROR: &str = "API Error";

/// Calls the backend with `reqwest`.
///
/// No timeout is configured: a backend that never answers holds up the
/// request that is waiting on it.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the backend served at `base_url`, e.g.
    /// [DEFAULT_API_BASE_URL].
    ///
    /// # Errors
    /// Returns [Error::Transport] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let client = Client::builder()
            .build()
            .map_err(|error| Error::Transport(format!("could not build HTTP client: {error}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The base URL that endpoints are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the backend root for its status message.
    ///
    /// # Errors
    /// Returns the same errors as [Backend::call].
    pub async fn check_health(&self) -> Result<String, Error> {
        let body = self
            .call(Method::GET, endpoints::API_HEALTH, None)
            .await?
            .unwrap_or_default();

        Ok(body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned())
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>, Error> {
        let url = format!("{}{endpoint}", self.base_url);
        tracing::debug!("{method} {url}");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store");

        if let Some(body) = body.filter(|_| method != Method::GET) {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|error| Error::Transport(error.to_string()))?;
        let status = response.status();

        if !status.is_success() {
            let error_body: Value = response
                .json()
                .await
                .map_err(|error| Error::InvalidResponse(error.to_string()))?;

            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&error_body),
            });
        }

        if status != StatusCode::OK && status != StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|error| Error::Transport(error.to_string()))?;

        // A body that is empty or not JSON counts as no body.
        Ok(serde_json::from_slice(&bytes).ok())
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>, Error> {
        self.send(method.clone(), endpoint, body)
            .await
            .inspect_err(|error| tracing::error!("API call {method} {endpoint} failed: {error}"))
    }
}

/// Extract the user-facing message from an error response body.
///
/// `detail` is either a message, or a list of validation issues each with a
/// `msg` field, which are joined with "; ".
fn error_message(body: &Value) -> String {
    match body.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Array(issues)) => {
            let messages: Vec<&str> = issues
                .iter()
                .filter_map(|issue| issue.get("msg").and_then(Value::as_str))
                .collect();

            if messages.is_empty() {
                GENERIC_API_ERROR.to_owned()
            } else {
                messages.join("; ")
            }
        }
        _ => GENERIC_API_ERROR.to_owned(),
    }
}


#[cfg(test)]
mod http_backend_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        body::Bytes,
        extract::State,
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
        routing::{delete, get, post, put},
    };
    use reqwest::Method;
    use serde_json::{Value, json};

    use crate::{
        Error,
        api::{Backend, HttpBackend},
    };

    /// The headers and body of the last request the fake backend received.
    #[derive(Debug, Clone, Default)]
    struct Captured {
        content_type: Option<String>,
        cache_control: Option<String>,
        body: Option<Vec<u8>>,
    }

    type CaptureState = Arc<Mutex<Captured>>;

    async fn capture(State(state): State<CaptureState>, headers: HeaderMap, body: Bytes) -> Response {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };

        *state.lock().unwrap() = Captured {
            content_type: header("content-type"),
            cache_control: header("cache-control"),
            body: (!body.is_empty()).then(|| body.to_vec()),
        };

        (StatusCode::CREATED, Json(json!({"id": 7}))).into_response()
    }

    async fn spawn_backend(router: Router) -> HttpBackend {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("could not bind fake backend");
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });

        HttpBackend::new(&format!("http://{address}/")).expect("could not create backend client")
    }

    fn fake_backend(state: CaptureState) -> Router {
        Router::new()
            .route(
                "/users/",
                get(|| async { Json(json!([{"id": 1, "username": "ann", "email": "a@x.com"}])) })
                    .post(capture)
                    .delete(|| async { Json(json!({"detail": "All users and accounts have been deleted"})) }),
            )
            .route(
                "/users/{user_id}",
                put(|| async { StatusCode::NO_CONTENT }).delete(|| async {
                    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"detail": "in use"})))
                }),
            )
            .route(
                "/accounts/",
                get(|| async { "this is not JSON" }).post(|| async {
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({"detail": [{"msg": "Input should be a valid number"}]})),
                    )
                }),
            )
            .route(
                "/accounts/{account_id}",
                delete(|| async { (StatusCode::NOT_FOUND, "Not Found") }),
            )
            .route("/teapot", post(|| async { (StatusCode::IM_A_TEAPOT, Json(json!({}))) }))
            .route("/", get(|| async { Json(json!({"message": "API is running. Go to /docs"})) }))
            .with_state(state)
    }

    #[tokio::test]
    async fn get_returns_parsed_body() {
        let backend = spawn_backend(fake_backend(CaptureState::default())).await;

        let got = backend.call(Method::GET, "/users/", None).await;

        assert_eq!(
            got,
            Ok(Some(json!([{"id": 1, "username": "ann", "email": "a@x.com"}])))
        );
    }

    #[tokio::test]
    async fn post_sends_json_without_caching() {
        let state = CaptureState::default();
        let backend = spawn_backend(fake_backend(state.clone())).await;
        let body = json!({"username": "ann", "email": "a@x.com"});

        let got = backend
            .call(Method::POST, "/users/", Some(body.clone()))
            .await;

        // 201 is a success without a body that the console reads.
        assert_eq!(got, Ok(None));
        let captured = state.lock().unwrap().clone();
        assert_eq!(captured.content_type.as_deref(), Some("application/json"));
        assert_eq!(captured.cache_control.as_deref(), Some("no-store"));
        let sent: Value = serde_json::from_slice(&captured.body.expect("no body was sent")).unwrap();
        assert_eq!(sent, body);
    }

    #[tokio::test]
    async fn no_content_returns_none() {
        let backend = spawn_backend(fake_backend(CaptureState::default())).await;

        let got = backend
            .call(Method::PUT, "/users/1", Some(json!({"username": "bob", "email": "b@x.com"})))
            .await;

        assert_eq!(got, Ok(None));
    }

    #[tokio::test]
    async fn ok_without_json_returns_none() {
        let backend = spawn_backend(fake_backend(CaptureState::default())).await;

        let got = backend.call(Method::GET, "/accounts/", None).await;

        assert_eq!(got, Ok(None));
    }

    #[tokio::test]
    async fn error_status_uses_detail() {
        let backend = spawn_backend(fake_backend(CaptureState::default())).await;

        let got = backend.call(Method::DELETE, "/users/5", None).await;

        assert_eq!(
            got,
            Err(Error::Api {
                status: 500,
                message: "in use".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn validation_error_joins_messages() {
        let backend = spawn_backend(fake_backend(CaptureState::default())).await;

        let got = backend
            .call(Method::POST, "/accounts/", Some(json!({"acc_name": "Savings"})))
            .await;

        assert_eq!(
            got,
            Err(Error::Api {
                status: 422,
                message: "Input should be a valid number".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn error_status_without_json_is_invalid_response() {
        let backend = spawn_backend(fake_backend(CaptureState::default())).await;

        let got = backend.call(Method::DELETE, "/accounts/3", None).await;

        assert!(
            matches!(got, Err(Error::InvalidResponse(_))),
            "want invalid response error, got {got:?}"
        );
    }

    #[tokio::test]
    async fn error_status_without_detail_uses_generic_message() {
        let backend = spawn_backend(fake_backend(CaptureState::default())).await;

        let got = backend.call(Method::POST, "/teapot", None).await;

        assert_eq!(
            got,
            Err(Error::Api {
                status: 418,
                message: "API Error".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn delete_all_returns_detail_body() {
        let backend = spawn_backend(fake_backend(CaptureState::default())).await;

        let got = backend.call(Method::DELETE, "/users/", None).await;

        assert_eq!(
            got,
            Ok(Some(json!({"detail": "All users and accounts have been deleted"})))
        );
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let backend = HttpBackend::new(&format!("http://{address}")).unwrap();

        let got = backend.call(Method::GET, "/users/", None).await;

        assert!(
            matches!(got, Err(Error::Transport(_))),
            "want transport error, got {got:?}"
        );
    }

    #[tokio::test]
    async fn check_health_returns_message() {
        let backend = spawn_backend(fake_backend(CaptureState::default())).await;

        let got = backend.check_health().await;

        assert_eq!(got, Ok("API is running. Go to /docs".to_owned()));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let backend = HttpBackend::new("http://127.0.0.1:8000/").unwrap();

        assert_eq!(backend.base_url(), "http://127.0.0.1:8000");
    }
}
