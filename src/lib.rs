pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::middleware::request_log::log_request;
use crate::state::{AppState, SharedState};
use crate::submission::recorder::RecordSink;

pub fn build_app(config: Config, recorder: Arc<dyn RecordSink>) -> Router {
    let state: SharedState = Arc::new(AppState { config, recorder });

    Router::new()
        .merge(routes::status_routes())
        .merge(routes::submit_routes())
        .layer(axum::middleware::from_fn(log_request))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}
