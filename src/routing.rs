//! Application router configuration.

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    account::AccountPanel,
    console_page::get_console_page,
    endpoints,
    not_found::get_404_not_found,
    panel::{
        create_endpoint, delete_all_endpoint, delete_endpoint, load_panel_endpoint,
        update_endpoint,
    },
    user::UserPanel,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::CONSOLE_VIEW, get(get_console_page))
        .route(
            endpoints::USERS_PANEL,
            get(load_panel_endpoint::<UserPanel>)
                .post(create_endpoint::<UserPanel>)
                .delete(delete_all_endpoint::<UserPanel>),
        )
        .route(
            endpoints::USER_PANEL_ITEM,
            put(update_endpoint::<UserPanel>).delete(delete_endpoint::<UserPanel>),
        )
        .route(
            endpoints::ACCOUNTS_PANEL,
            get(load_panel_endpoint::<AccountPanel>)
                .post(create_endpoint::<AccountPanel>)
                .delete(delete_all_endpoint::<AccountPanel>),
        )
        .route(
            endpoints::ACCOUNT_PANEL_ITEM,
            put(update_endpoint::<AccountPanel>).delete(delete_endpoint::<AccountPanel>),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
