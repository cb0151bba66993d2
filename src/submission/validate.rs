use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::AllowLists;

/// Two ASCII digits, a dot, then a month from 01 to 12. Broader than the
/// official release numbering so derivative distributions pass too.
const VERSION_PATTERN: &str = r"^[0-9]{2}\.(0[1-9]|1[0-2])$";

static VERSION_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN));

/// Compile the version grammar. Called once at startup so a bad pattern
/// stops the daemon before it serves anything.
pub fn init() -> Result<(), regex::Error> {
    VERSION_RE.as_ref().map(|_| ()).map_err(Clone::clone)
}

pub fn is_known_distro(distro: &str, allow_list: &[String]) -> bool {
    allow_list.iter().any(|known| known == distro)
}

pub fn is_known_variant(variant: &str, allow_list: &[String]) -> bool {
    allow_list.iter().any(|known| known == variant)
}

pub fn is_valid_version(version: &str) -> bool {
    match VERSION_RE.as_ref() {
        Ok(re) => re.is_match(version),
        Err(e) => {
            tracing::error!("Error compiling version pattern: {e}");
            false
        }
    }
}

/// Outcome of every individual check run against one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checks {
    pub distro: bool,
    pub variant: bool,
    pub version: bool,
    pub payload: bool,
}

impl Checks {
    /// Run all checks. None of them short-circuits, so each failing one is
    /// logged on its own.
    pub fn evaluate(
        allow_lists: &AllowLists,
        distro: &str,
        variant: &str,
        version: &str,
        payload: &Result<Map<String, Value>, String>,
    ) -> Self {
        let checks = Checks {
            distro: is_known_distro(distro, &allow_lists.distros),
            variant: is_known_variant(variant, &allow_lists.variants),
            version: is_valid_version(version),
            payload: payload.is_ok(),
        };

        if !checks.distro {
            tracing::warn!("Rejecting submission: unknown distro {distro:?}");
        }
        if !checks.variant {
            tracing::warn!("Rejecting submission: unknown variant {variant:?}");
        }
        if !checks.version {
            tracing::warn!("Rejecting submission: invalid version {version:?}");
        }
        if let Err(e) = payload {
            tracing::warn!("Rejecting submission: {e}");
        }

        checks
    }

    pub fn accepted(&self) -> bool {
        self.distro && self.variant && self.version && self.payload
    }
}
