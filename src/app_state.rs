//! Implements a struct that holds the state of the console server.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    account::AccountPanel, api::Backend, panel::PanelController, user::UserPanel,
};

/// The state of the console server.
///
/// Holds one controller per panel. Both share the same backend handle and
/// nothing else, so neither depends on the other having been set up first.
#[derive(Debug, Clone)]
pub struct AppState {
    users: PanelController<UserPanel>,
    accounts: PanelController<AccountPanel>,
}

impl AppState {
    /// Create the state for a console that manages the data in `backend`.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            users: PanelController::new(backend.clone()),
            accounts: PanelController::new(backend),
        }
    }
}

impl FromRef<AppState> for PanelController<UserPanel> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for PanelController<AccountPanel> {
    fn from_ref(state: &AppState) -> Self {
        state.accounts.clone()
    }
}
