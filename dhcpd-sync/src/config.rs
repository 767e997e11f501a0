use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Settings for the sync daemon, loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Export endpoint URL.
    pub api_url: String,
    /// Bearer token sent as `Authorization: Token <token>`.
    pub api_token: String,
    /// Directory holding the managed configuration set.
    pub conf_dir: PathBuf,
    /// Managed reservations file. Relative paths resolve under `conf_dir`.
    pub target_file: PathBuf,
    /// Seconds to sleep between successful cycles.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Timeout for the export fetch, in seconds.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
    /// Syntax checker argv; the candidate directory is appended.
    #[serde(default = "default_check_command")]
    pub check_command: Vec<String>,
    /// Service restart argv.
    #[serde(default = "default_restart_command")]
    pub restart_command: Vec<String>,
    /// Filename prefix selecting managed files for fingerprinting.
    #[serde(default = "default_managed_prefix")]
    pub managed_prefix: String,
    /// Filename suffix selecting managed files for fingerprinting.
    #[serde(default = "default_managed_suffix")]
    pub managed_suffix: String,
}

impl SyncConfig {
    /// Load and validate settings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: SyncConfig = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Startup checks; must pass before the first cycle runs.
    fn validate(&mut self) -> Result<()> {
        if self.api_url.is_empty() {
            bail!("configuration error: api_url is not set");
        }
        if self.api_token.is_empty() {
            bail!("configuration error: api_token is not set");
        }
        if !self.conf_dir.is_dir() {
            bail!(
                "configuration error: conf_dir {} is not a directory",
                self.conf_dir.display()
            );
        }
        if self.check_command.is_empty() {
            bail!("configuration error: check_command must not be empty");
        }
        if self.restart_command.is_empty() {
            bail!("configuration error: restart_command must not be empty");
        }

        // An absolute target stays as-is; a relative one lands in conf_dir.
        self.target_file = self.conf_dir.join(&self.target_file);
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

fn default_poll_interval() -> u64 {
    30
}

fn default_fetch_timeout() -> u64 {
    10
}

fn default_check_command() -> Vec<String> {
    ["dhcpd", "-t", "-user", "dhcpd", "-group", "dhcpd"]
        .map(String::from)
        .to_vec()
}

fn default_restart_command() -> Vec<String> {
    ["systemctl", "restart", "dhcpd.service"]
        .map(String::from)
        .to_vec()
}

fn default_managed_prefix() -> String {
    "dhcpd".to_string()
}

fn default_managed_suffix() -> String {
    ".conf".to_string()
}
