use crate::models::SubmissionRecord;
use crate::state::SharedState;

use super::parser;
use super::recorder::RecordError;
use super::validate::Checks;

/// Validate one submission and append its record, accepted or not.
pub async fn run(
    state: &SharedState,
    distro: String,
    variant: String,
    version: String,
    body: &[u8],
) -> Result<SubmissionRecord, RecordError> {
    let payload = parser::parse_payload(body);
    let checks = Checks::evaluate(
        &state.config.allow_lists,
        &distro,
        &variant,
        &version,
        &payload,
    );

    let record = SubmissionRecord::new(checks, distro, variant, version, payload, body);
    state.recorder.append(&record).await?;

    tracing::debug!(
        "Recorded submission {} ({}/{}/{}, accepted: {})",
        record.id,
        record.distro,
        record.variant,
        record.version,
        record.accepted
    );

    Ok(record)
}
