pub mod contact;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        .route("/contact", post(contact::submit))
}

/// Fixed body, no collaborator involvement; answers even when the database
/// and the email API are down.
async fn index() -> &'static str {
    "Hello World!"
}
