use axum::body::Body;
use axum::extract::{Path, State};

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::pipeline;

/// Rejected submissions still get a 200: rejection is recorded, not surfaced.
pub async fn submit(
    State(state): State<SharedState>,
    Path((distro, variant, version)): Path<(String, String, String)>,
    body: Body,
) -> Result<&'static str, AppError> {
    let body = axum::body::to_bytes(body, state.config.max_body_size)
        .await
        .map_err(|e| AppError::BodyRead(e.to_string()))?;

    pipeline::run(&state, distro, variant, version, &body).await?;

    Ok("POST request processed\n")
}
