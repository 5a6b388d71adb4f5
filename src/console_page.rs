//! The console page: both panels side by side.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    account::AccountPanel,
    html::{PAGE_CONTAINER_STYLE, base},
    panel::panel_view,
    user::UserPanel,
};

fn console_view() -> Markup {
    let content = html!(
        header class="console-header"
        {
            h1 { "Account Console" }
        }

        main class=(PAGE_CONTAINER_STYLE)
        {
            (panel_view::<UserPanel>())
            (panel_view::<AccountPanel>())
        }
    );

    base("Console", &content)
}

/// Renders the console page.
///
/// The page holds no data of its own: each panel fetches its list once the
/// page has loaded.
pub async fn get_console_page() -> Response {
    console_view().into_response()
}
