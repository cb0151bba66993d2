use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub allow_lists: AllowLists,
    pub record_file: PathBuf,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub max_body_size: usize,
}

/// Known distribution and variant identifiers. Read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowLists {
    pub distros: Vec<String>,
    pub variants: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = env_or("REPORTD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid REPORTD_HOST: {e}"))?;

        let port: u16 = env_or("REPORTD_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid REPORTD_PORT: {e}"))?;

        let distros = parse_list("REPORTD_DISTROS", &env_or("REPORTD_DISTROS", "ubuntu"))?;
        let variants = parse_list(
            "REPORTD_VARIANTS",
            &env_or("REPORTD_VARIANTS", "desktop,server,cloud,wsl"),
        )?;

        let record_file = PathBuf::from(env_or(
            "REPORTD_RECORD_FILE",
            "/var/log/ubuntu-reportd/submissions.log",
        ));

        let log_file = lookup("REPORTD_LOG_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env_or("REPORTD_LOG_LEVEL", "warn");

        let max_body_size: usize = env_or("REPORTD_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid REPORTD_MAX_BODY_SIZE: {e}"))?;

        Ok(Config {
            host,
            port,
            allow_lists: AllowLists { distros, variants },
            record_file,
            log_file,
            log_level,
            max_body_size,
        })
    }
}

fn parse_list(key: &str, raw: &str) -> Result<Vec<String>, String> {
    let entries: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        return Err(format!("{key} must list at least one entry"));
    }
    Ok(entries)
}
