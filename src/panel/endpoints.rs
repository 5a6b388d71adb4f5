//! Route handlers shared by every panel.
//!
//! Each handler is generic over the [Resource] it serves and is registered
//! once per panel, e.g. `get(load_panel_endpoint::<UserPanel>)`.

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    panel::{
        PanelController,
        resource::{EntityId, Resource},
        view::{panel_error_view, panel_list_view},
    },
};

/// Load a panel's list, responding with its cards.
///
/// A failed load responds with an inline error message in place of the cards
/// and a blocking notification. The panel stays that way until it is next
/// reloaded.
pub async fn load_panel_endpoint<R: Resource>(
    State(controller): State<PanelController<R>>,
) -> Response {
    match controller.load().await {
        Ok(entities) => panel_list_view::<R>(&entities).into_response(),
        Err(error) => (
            StatusCode::OK,
            Alert::from_error(&error),
            panel_error_view(R::KIND),
        )
            .into_response(),
    }
}

/// Create an entity from the panel's create form, then reload the panel.
pub async fn create_endpoint<R: Resource>(
    State(controller): State<PanelController<R>>,
    Form(form): Form<R::Form>,
) -> Response {
    match controller.create(form).await {
        Ok(reload) => reload.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Update an entity from its card's edit form, then reload the panel.
pub async fn update_endpoint<R: Resource>(
    State(controller): State<PanelController<R>>,
    Path(id): Path<EntityId>,
    Form(form): Form<R::Form>,
) -> Response {
    match controller.update(id, form).await {
        Ok(reload) => reload.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Delete an entity, then reload the panels it affects.
///
/// The browser asks for confirmation before sending this request.
pub async fn delete_endpoint<R: Resource>(
    State(controller): State<PanelController<R>>,
    Path(id): Path<EntityId>,
) -> Response {
    match controller.delete(id).await {
        Ok(reload) => reload.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Delete every entity in the panel, then reload the panels it affects.
pub async fn delete_all_endpoint<R: Resource>(
    State(controller): State<PanelController<R>>,
) -> Response {
    match controller.delete_all().await {
        Ok(reload) => reload.into_response(),
        Err(error) => error.into_alert_response(),
    }
}
