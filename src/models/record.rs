use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::submission::validate::Checks;

/// One line of the submission log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub accepted: bool,
    pub distro: String,
    pub variant: String,
    pub version: String,
    pub checks: Checks,
    pub payload: Option<Map<String, Value>>,
    /// Body as received, kept only when it failed to parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl SubmissionRecord {
    pub fn new(
        checks: Checks,
        distro: String,
        variant: String,
        version: String,
        payload: Result<Map<String, Value>, String>,
        body: &[u8],
    ) -> Self {
        let (payload, raw) = match payload {
            Ok(map) => (Some(map), None),
            Err(_) => (None, Some(String::from_utf8_lossy(body).into_owned())),
        };

        SubmissionRecord {
            id: Uuid::now_v7(),
            received_at: Utc::now(),
            accepted: checks.accepted(),
            distro,
            variant,
            version,
            checks,
            payload,
            raw,
        }
    }
}
