//! Panels: one list of cards plus a create form per backend collection.

mod controller;
mod endpoints;
mod resource;
mod view;

pub use controller::PanelController;
pub use endpoints::{
    create_endpoint, delete_all_endpoint, delete_endpoint, load_panel_endpoint, update_endpoint,
};
pub use resource::{EntityId, PanelKind, Resource};
pub use view::{CardParts, card_view, create_form_view, panel_view};
