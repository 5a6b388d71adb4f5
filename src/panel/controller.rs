//! Translates panel gestures into backend calls.

use std::{fmt, marker::PhantomData, sync::Arc};

use axum::response::{IntoResponse, Response};
use axum_htmx::HX_TRIGGER;
use reqwest::Method;
use serde_json::{Map, Value};

use crate::{
    Error,
    alert::hx_trigger_header,
    api::Backend,
    endpoints::format_endpoint,
    panel::resource::{EntityId, PanelKind, Resource},
};

/// The panels whose lists must be re-fetched after a successful change.
///
/// As a response, it tells the browser to reload each panel exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reload(&'static [PanelKind]);

impl Reload {
    /// The panels to reload.
    pub fn panels(&self) -> &'static [PanelKind] {
        self.0
    }
}

impl IntoResponse for Reload {
    fn into_response(self) -> Response {
        let events: Map<String, Value> = self
            .panels()
            .iter()
            .map(|panel| (panel.changed_event().to_owned(), Value::Null))
            .collect();

        match hx_trigger_header(&Value::Object(events)) {
            Some(header) => [(HX_TRIGGER, header)].into_response(),
            None => ().into_response(),
        }
    }
}

/// Keeps one panel in step with one backend collection.
///
/// The controller holds no entities between calls: every change is sent to
/// the backend and followed by a [Reload], so the list is always what the
/// backend last returned.
pub struct PanelController<R> {
    backend: Arc<dyn Backend>,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for PanelController<R> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for PanelController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelController")
            .field("backend", &self.backend)
            .finish()
    }
}

impl<R: Resource> PanelController<R> {
    /// Create a controller that reaches the backend through `backend`.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            resource: PhantomData,
        }
    }

    /// Fetch every entity in the collection.
    ///
    /// # Errors
    /// Returns the backend's error, or [Error::InvalidResponse] if the body is
    /// missing or is not a list of entities.
    pub async fn load(&self) -> Result<Vec<R::Entity>, Error> {
        let kind = R::KIND;
        let body = self
            .backend
            .call(Method::GET, kind.collection_endpoint(), None)
            .await?
            .ok_or_else(|| {
                Error::InvalidResponse(format!("expected a list of {}, got nothing", kind.plural()))
            })?;

        serde_json::from_value(body)
            .map_err(|error| Error::InvalidResponse(error.to_string()))
            .inspect_err(|error| tracing::error!("could not load {}: {error}", kind.plural()))
    }

    /// Create an entity from the fields of the create form.
    ///
    /// # Errors
    /// Returns [Error::InvalidForm] without contacting the backend if the form
    /// is invalid, otherwise the backend's error.
    pub async fn create(&self, form: R::Form) -> Result<Reload, Error> {
        let body = payload_json::<R>(form)?;

        self.backend
            .call(Method::POST, R::KIND.collection_endpoint(), Some(body))
            .await?;

        Ok(Reload(R::RELOAD_AFTER_CHANGE))
    }

    /// Replace the fields of the entity with `id`.
    ///
    /// # Errors
    /// Returns [Error::InvalidForm] without contacting the backend if the form
    /// is invalid, otherwise the backend's error.
    pub async fn update(&self, id: EntityId, form: R::Form) -> Result<Reload, Error> {
        let body = payload_json::<R>(form)?;
        let endpoint = format_endpoint(R::KIND.item_endpoint(), id);

        self.backend.call(Method::PUT, &endpoint, Some(body)).await?;

        Ok(Reload(R::RELOAD_AFTER_CHANGE))
    }

    /// Delete the entity with `id`.
    ///
    /// # Errors
    /// Returns the backend's error.
    pub async fn delete(&self, id: EntityId) -> Result<Reload, Error> {
        let endpoint = format_endpoint(R::KIND.item_endpoint(), id);

        self.backend.call(Method::DELETE, &endpoint, None).await?;

        Ok(Reload(R::RELOAD_AFTER_DELETE))
    }

    /// Delete every entity in the collection.
    ///
    /// # Errors
    /// Returns the backend's error.
    pub async fn delete_all(&self) -> Result<Reload, Error> {
        self.backend
            .call(Method::DELETE, R::KIND.collection_endpoint(), None)
            .await?;

        Ok(Reload(R::RELOAD_AFTER_DELETE))
    }
}

fn payload_json<R: Resource>(form: R::Form) -> Result<Value, Error> {
    let payload = R::payload(form)?;

    serde_json::to_value(payload).map_err(|error| Error::InvalidForm(error.to_string()))
}
