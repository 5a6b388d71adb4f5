use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::{Error, api::Backend};

/// A backend call as seen by [FakeBackend].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedCall {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
}

impl RecordedCall {
    pub(crate) fn new(method: Method, endpoint: &str, body: Option<Value>) -> Self {
        Self {
            method,
            endpoint: endpoint.to_owned(),
            body,
        }
    }
}

/// A backend that answers each call with the next canned response and
/// remembers the calls it was given.
///
/// Once the canned responses run out, every call succeeds with no body.
#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    responses: Mutex<VecDeque<Result<Option<Value>, Error>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeBackend {
    pub(crate) fn with_responses(
        responses: impl IntoIterator<Item = Result<Option<Value>, Error>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn call(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>, Error> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::new(method, endpoint, body));

        self.responses.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }
}
