//! The users panel.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    html::FORM_TEXT_INPUT_STYLE,
    panel::{CardParts, EntityId, PanelKind, Resource, card_view, create_form_view},
};

/// The ID the backend assigns to a user.
pub type UserId = EntityId;

/// A user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    /// Assigned by the backend, never by the console.
    pub id: UserId,
    /// The user's unique name.
    pub username: String,
    /// The user's unique e-mail address.
    pub email: String,
}

/// The fields of the create and edit user forms.
///
/// The backend validates the e-mail address and rejects duplicates, so the
/// form is sent as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    /// The user's name.
    pub username: String,
    /// The user's e-mail address.
    pub email: String,
}

/// Manages the backend's users.
#[derive(Debug, Clone, Copy)]
pub struct UserPanel;

impl Resource for UserPanel {
    type Entity = User;
    type Form = UserForm;
    type Payload = UserForm;

    const KIND: PanelKind = PanelKind::Users;
    const RELOAD_AFTER_CHANGE: &'static [PanelKind] = &[PanelKind::Users];
    // The backend deletes a user's accounts along with the user.
    const RELOAD_AFTER_DELETE: &'static [PanelKind] = &[PanelKind::Users, PanelKind::Accounts];
    const DELETE_ALL_CONFIRMATION: &'static str =
        "Are you sure you want to delete all users? All accounts will be deleted too.";

    fn payload(form: UserForm) -> Result<UserForm, Error> {
        Ok(form)
    }

    fn delete_confirmation(id: UserId) -> String {
        format!("Are you sure you want to delete user {id}? Accounts will be deleted too.")
    }

    fn card(user: &User) -> Markup {
        card_view(CardParts {
            kind: Self::KIND,
            id: user.id,
            label: "USER",
            details: html!(
                p { strong { "Username:" } " " span class="u-name" { (user.username) } }
                p { strong { "Email:" } " " span class="u-email" { (user.email) } }
            ),
            edit_heading: Some(format!("Update User {}", user.id)),
            edit_fields: user_fields(Some(user)),
            delete_confirmation: Self::delete_confirmation(user.id),
        })
    }

    fn create_form() -> Markup {
        create_form_view(Self::KIND, "New User", user_fields(None))
    }
}

/// The username and e-mail inputs, filled in with `user`'s values if given.
fn user_fields(user: Option<&User>) -> Markup {
    let username = user.map(|user| user.username.as_str());
    let email = user.map(|user| user.email.as_str());

    html!(
        input
            type="text"
            name="username"
            class=(FORM_TEXT_INPUT_STYLE)
            value=[username]
            placeholder="Username"
            required;

        input
            type="email"
            name="email"
            class=(FORM_TEXT_INPUT_STYLE)
            value=[email]
            placeholder="Email"
            required;
    )
}
