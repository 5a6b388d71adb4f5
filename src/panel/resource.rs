//! What distinguishes one panel from another: the resource it manages.

use maud::Markup;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, endpoints};

/// The integer ID the backend assigns to every entity.
pub type EntityId = i64;

/// The two panels in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// The users panel.
    Users,
    /// The accounts panel.
    Accounts,
}

impl PanelKind {
    /// The panel title.
    pub fn title(self) -> &'static str {
        match self {
            PanelKind::Users => "Users",
            PanelKind::Accounts => "Accounts",
        }
    }

    /// The lowercase plural name used in messages, e.g. "No users found.".
    pub fn plural(self) -> &'static str {
        match self {
            PanelKind::Users => "users",
            PanelKind::Accounts => "accounts",
        }
    }

    /// The backend's collection endpoint.
    pub fn collection_endpoint(self) -> &'static str {
        match self {
            PanelKind::Users => endpoints::API_USERS,
            PanelKind::Accounts => endpoints::API_ACCOUNTS,
        }
    }

    /// The backend endpoint for a single entity, with its ID parameter.
    pub fn item_endpoint(self) -> &'static str {
        match self {
            PanelKind::Users => endpoints::API_USER,
            PanelKind::Accounts => endpoints::API_ACCOUNT,
        }
    }

    /// The console route that loads, creates and clears this panel.
    pub fn panel_route(self) -> &'static str {
        match self {
            PanelKind::Users => endpoints::USERS_PANEL,
            PanelKind::Accounts => endpoints::ACCOUNTS_PANEL,
        }
    }

    /// The console route for a single card, with its ID parameter.
    pub fn panel_item_route(self) -> &'static str {
        match self {
            PanelKind::Users => endpoints::USER_PANEL_ITEM,
            PanelKind::Accounts => endpoints::ACCOUNT_PANEL_ITEM,
        }
    }

    /// The client-side event that makes this panel reload its list.
    pub fn changed_event(self) -> &'static str {
        match self {
            PanelKind::Users => "users-changed",
            PanelKind::Accounts => "accounts-changed",
        }
    }

    /// The element ID of the panel's list.
    pub fn list_id(self) -> &'static str {
        match self {
            PanelKind::Users => "users-list",
            PanelKind::Accounts => "accounts-list",
        }
    }
}

/// A kind of entity managed through a panel.
///
/// Implementors describe the entity's shape, how submitted forms become
/// backend payloads, and how an entity is drawn as a card. Everything else
/// about a panel is shared.
pub trait Resource: Send + Sync + 'static {
    /// The entity as returned by the backend.
    type Entity: DeserializeOwned + Send;

    /// The fields submitted by the create and edit forms.
    type Form: DeserializeOwned + Send;

    /// The JSON body sent to the backend to create or update an entity.
    type Payload: Serialize;

    /// Which panel this resource is shown in.
    const KIND: PanelKind;

    /// The panels to reload after an entity is created or updated.
    const RELOAD_AFTER_CHANGE: &'static [PanelKind];

    /// The panels to reload after an entity is deleted, including this one.
    const RELOAD_AFTER_DELETE: &'static [PanelKind];

    /// The confirmation asked before deleting every entity.
    const DELETE_ALL_CONFIRMATION: &'static str;

    /// Turn submitted form fields into a payload for the backend.
    ///
    /// # Errors
    /// Returns [Error::InvalidForm] if a field cannot be converted.
    fn payload(form: Self::Form) -> Result<Self::Payload, Error>;

    /// The confirmation asked before deleting the entity with `id`.
    fn delete_confirmation(id: EntityId) -> String;

    /// Draw `entity` as a card with a view block and a hidden edit block.
    fn card(entity: &Self::Entity) -> Markup;

    /// The form for creating a new entity.
    fn create_form() -> Markup;
}
