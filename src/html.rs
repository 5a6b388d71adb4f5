use maud::{DOCTYPE, Markup, html};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "btn btn-primary";
pub const BUTTON_EDIT_STYLE: &str = "btn btn-edit";
pub const BUTTON_CANCEL_STYLE: &str = "btn btn-cancel";
pub const BUTTON_DELETE_STYLE: &str = "btn btn-delete";

// Form styles
pub const FORM_TEXT_INPUT_STYLE: &str = "retro-input";

// Panel styles
pub const PANEL_STYLE: &str = "retro-panel";
pub const CARD_STYLE: &str = "retro-card";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "console";

/// The htmx build the console is written against, served from `static/`.
const HTMX_SCRIPT: &str = "/static/htmx-2.0.8-min.js";
const HTMX_INTEGRITY: &str =
    "sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Account Console" }
                link href="/static/main.css" rel="stylesheet";

                script src=(HTMX_SCRIPT) integrity=(HTMX_INTEGRITY) {}

                script src="/static/app.js" defer {}
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="error-page"
        {
            h1 { (header) }

            p class="error-description" { (description) }

            p { (fix) }

            a href="/" class=(BUTTON_PRIMARY_STYLE) { "Back to Console" }
        }
    );

    base(title, &content)
}
