//! The console's routes and the backend paths it calls.
//!
//! For endpoints that take a parameter, e.g., '/panels/users/{user_id}', use [format_endpoint].

/// The console page with the users and accounts panels.
pub const CONSOLE_VIEW: &str = "/";
/// The users panel: GET loads the list, POST creates, DELETE removes all.
pub const USERS_PANEL: &str = "/panels/users";
/// A single user card: PUT updates, DELETE removes.
pub const USER_PANEL_ITEM: &str = "/panels/users/{user_id}";
/// The accounts panel: GET loads the list, POST creates, DELETE removes all.
pub const ACCOUNTS_PANEL: &str = "/panels/accounts";
/// A single account card: PUT updates, DELETE removes.
pub const ACCOUNT_PANEL_ITEM: &str = "/panels/accounts/{account_id}";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The backend's status message.
pub const API_HEALTH: &str = "/";
/// The backend's user collection.
pub const API_USERS: &str = "/users/";
/// A single user in the backend.
pub const API_USER: &str = "/users/{user_id}";
/// The backend's account collection.
pub const API_ACCOUNTS: &str = "/accounts/";
/// A single account in the backend.
pub const API_ACCOUNT: &str = "/accounts/{account_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with a right brace, e.g.
/// '{user_id}' in '/users/{user_id}'. Only the first parameter is replaced.
/// An unterminated parameter runs to the end of the path.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let end = endpoint_path[start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| start + offset + 1);

    format!("{}{id}{}", &endpoint_path[..start], &endpoint_path[end..])
}
