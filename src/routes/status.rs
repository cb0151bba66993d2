use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::SharedState;

const METRICS_REPORT: &str = "\
# HELP ubuntu_reportd_requests_total The total number of processed requests
# TYPE ubuntu_reportd_requests_total counter
ubuntu_reportd_requests_total 1234

# HELP ubuntu_reportd_errors_total The total number of errors
# TYPE ubuntu_reportd_errors_total counter
ubuntu_reportd_errors_total 56

# HELP ubuntu_reportd_uptime_seconds The number of seconds the service has been up
# TYPE ubuntu_reportd_uptime_seconds gauge
ubuntu_reportd_uptime_seconds 3600
";

#[derive(Debug, Serialize)]
pub struct AboutResponse {
    pub version: &'static str,
}

/// Liveness only. Writability of the record file is reported by `/ready`.
pub async fn health() -> &'static str {
    "Health Check: Service is running\n"
}

pub async fn ready(State(state): State<SharedState>) -> (StatusCode, &'static str) {
    match state.recorder.check_writable().await {
        Ok(()) => (StatusCode::OK, "ready\n"),
        Err(e) => {
            tracing::error!("Readiness check failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "record log unavailable\n")
        }
    }
}

pub async fn about() -> Json<AboutResponse> {
    Json(AboutResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Static placeholder; nothing is counted.
pub async fn metrics() -> &'static str {
    METRICS_REPORT
}

pub async fn method_not_supported() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Method is not supported.\n")
}
