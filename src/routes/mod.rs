pub mod status;
pub mod submit;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn status_routes() -> Router<SharedState> {
    Router::new()
        .route("/health", get(status::health).fallback(status::method_not_supported))
        .route("/ready", get(status::ready).fallback(status::method_not_supported))
        .route("/about", get(status::about).fallback(status::method_not_supported))
        .route("/metrics", get(status::metrics).fallback(status::method_not_supported))
}

pub fn submit_routes() -> Router<SharedState> {
    Router::new().route(
        "/submit/{distro}/{variant}/{version}",
        post(submit::submit).fallback(status::method_not_supported),
    )
}
