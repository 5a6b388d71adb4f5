//! The markup shared by every panel.

use maud::{Markup, html};

use crate::{
    endpoints::format_endpoint,
    html::{
        BUTTON_CANCEL_STYLE, BUTTON_DELETE_STYLE, BUTTON_EDIT_STYLE, BUTTON_PRIMARY_STYLE,
        CARD_STYLE, PANEL_STYLE,
    },
    panel::resource::{EntityId, PanelKind, Resource},
};

/// A whole panel: its header, create form and list.
///
/// The list starts out showing "Loading..." and fetches its cards as soon as
/// it is on the page, and again whenever the panel's changed event reaches
/// the document body. `static/app.js` puts "Loading..." back before each
/// reload.
pub fn panel_view<R: Resource>() -> Markup {
    let kind = R::KIND;
    let reload_trigger = format!("load, {} from:body", kind.changed_event());

    html!(
        section class=(PANEL_STYLE) aria-labelledby={ (kind.plural()) "-title" }
        {
            header class="panel-header"
            {
                h2 id={ (kind.plural()) "-title" } { (kind.title()) }

                button
                    type="button"
                    class=(BUTTON_DELETE_STYLE)
                    hx-delete=(kind.panel_route())
                    hx-confirm=(R::DELETE_ALL_CONFIRMATION)
                    hx-swap="none"
                {
                    "Delete all"
                }
            }

            (R::create_form())

            div
                id=(kind.list_id())
                class="panel-list"
                hx-get=(kind.panel_route())
                hx-trigger=(reload_trigger)
            {
                p { "Loading..." }
            }
        }
    )
}

/// The contents of a panel's list after a successful load.
pub fn panel_list_view<R: Resource>(entities: &[R::Entity]) -> Markup {
    html!(
        @if entities.is_empty() {
            p class="panel-message" { "No " (R::KIND.plural()) " found." }
        } @else {
            @for entity in entities {
                (R::card(entity))
            }
        }
    )
}

/// The contents of a panel's list after a failed load.
pub fn panel_error_view(kind: PanelKind) -> Markup {
    html!(
        p class="panel-message" { "Error loading " (kind.plural()) "." }
    )
}

/// The parts of a card that differ between resources.
pub struct CardParts<'a> {
    pub kind: PanelKind,
    pub id: EntityId,
    /// The label shown next to the ID in the card header, e.g. "USER".
    pub label: &'a str,
    pub details: Markup,
    /// Shown above the edit fields.
    pub edit_heading: Option<String>,
    /// Inputs named after the fields of the resource's form.
    pub edit_fields: Markup,
    pub delete_confirmation: String,
}

/// A card with a view block and a hidden edit block, keyed by the entity ID.
///
/// Edit and Cancel only switch which block is visible. Cancel also resets the
/// edit form, which puts back the values the card was rendered with.
pub fn card_view(parts: CardParts<'_>) -> Markup {
    let item_route = format_endpoint(parts.kind.panel_item_route(), parts.id);

    html!(
        div class=(CARD_STYLE) data-id=(parts.id)
        {
            div class="view-mode"
            {
                div class="card-header"
                {
                    span { "ID: " (parts.id) }
                    span { (parts.label) }
                }

                div class="card-details" { (parts.details) }

                div class="card-actions"
                {
                    button type="button" class=(BUTTON_EDIT_STYLE) onclick="startEdit(this)"
                    {
                        "Edit"
                    }

                    button
                        type="button"
                        class=(BUTTON_DELETE_STYLE)
                        hx-delete=(item_route)
                        hx-confirm=(parts.delete_confirmation)
                        hx-swap="none"
                    {
                        "Delete"
                    }
                }
            }

            form class="edit-mode hidden" hx-put=(item_route) hx-swap="none"
            {
                @if let Some(heading) = &parts.edit_heading {
                    h3 { (heading) }
                }

                (parts.edit_fields)

                div class="card-actions"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }

                    button type="button" class=(BUTTON_CANCEL_STYLE) onclick="cancelEdit(this)"
                    {
                        "Cancel"
                    }
                }
            }
        }
    )
}

/// A create form that posts to the panel.
///
/// `static/app.js` clears the form after a successful request. A failed
/// request leaves the entered values in place.
pub fn create_form_view(kind: PanelKind, title: &str, fields: Markup) -> Markup {
    html!(
        form
            class="create-form"
            hx-post=(kind.panel_route())
            hx-swap="none"
        {
            h3 { (title) }

            (fields)

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create" }
        }
    )
}
