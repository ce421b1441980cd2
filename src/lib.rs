pub mod config;
pub mod error;
pub mod mailer;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::mailer::Mailer;
use crate::state::{AppState, SharedState};
use crate::store::ContactStore;

/// Cap on incoming JSON bodies.
const MAX_BODY_SIZE: usize = 100 * 1024;

pub fn build_app(
    store: Arc<dyn ContactStore>,
    mailer: Arc<dyn Mailer>,
    config: Config,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_url.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let state: SharedState = Arc::new(AppState {
        config,
        store,
        mailer,
    });

    Router::new()
        .merge(routes::routes())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
