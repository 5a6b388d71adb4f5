//! Account Console is a web console for the users and accounts managed by a
//! REST backend.
//!
//! This library serves the console page and the HTML fragments that htmx
//! swaps into it. Every change made in the console is forwarded to the
//! backend, after which the affected panels are re-fetched from the backend.
//! The console itself keeps no copy of the data.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod account;
mod alert;
mod api;
mod app_state;
mod console_page;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod panel;
mod routing;
mod user;

#[cfg(test)]
mod test_utils;

pub use api::{Backend, DEFAULT_API_BASE_URL, HttpBackend};
pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// The display string of each variant is the message shown to the user in
/// the blocking notification, prefixed with "Error: ".
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backend answered with a status outside of the 2xx range.
    ///
    /// `message` is taken from the `detail` field of the error body, or
    /// "API Error" if the body has no usable detail.
    #[error("{message}")]
    Api {
        /// The HTTP status code returned by the backend.
        status: u16,
        /// The message to show to the user.
        message: String,
    },

    /// The backend could not be reached, or the connection failed part way
    /// through the request.
    #[error("{0}")]
    Transport(String),

    /// The backend's response body was not the JSON that was expected.
    #[error("could not parse the backend response: {0}")]
    InvalidResponse(String),

    /// The form submitted by the user was rejected before the backend was
    /// contacted.
    #[error("{0}")]
    InvalidForm(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("An unexpected error occurred: {}", self);
        InternalServerError::default().into_response()
    }
}

impl Error {
    /// The status code used when answering an htmx request that failed
    /// because of this error.
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidForm(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Api { .. } | Error::Transport(_) | Error::InvalidResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Answer an htmx request with a blocking notification describing this
    /// error.
    ///
    /// The response uses an error status code, so htmx neither swaps the
    /// response body nor treats the request as successful (e.g., forms are
    /// not reset).
    fn into_alert_response(self) -> Response {
        let status_code = self.status_code();

        (status_code, Alert::from_error(&self)).into_response()
    }
}
