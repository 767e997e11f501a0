use std::process::Command;

use tracing::{debug, info};

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::fingerprint::fingerprint_dir;
use crate::validate::{run_check, split_command, stderr_text};

/// Fingerprints the managed configuration set and conditionally restarts
/// the consuming service.
///
/// The last fingerprint is an explicit value owned by this instance; it is
/// never persisted, so a process restart forgets it and forces one extra
/// reload on the next comparison.
#[derive(Debug, Default)]
pub struct ReloadManager {
    last_fingerprint: Option<String>,
}

impl ReloadManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the service if the managed file set changed since the last
    /// successful restart. Returns whether a restart was triggered.
    ///
    /// On change: validate the candidate set, then run the restart
    /// command. The stored fingerprint is updated only after a successful
    /// restart, so a failed restart is retried on the next incarnation.
    /// Unchanged content never touches the running service.
    pub fn maybe_reload(&mut self, config: &SyncConfig) -> Result<bool, SyncError> {
        let current = fingerprint_dir(
            &config.conf_dir,
            &config.managed_prefix,
            &config.managed_suffix,
        )?;

        if self.last_fingerprint.as_deref() == Some(current.as_str()) {
            debug!("managed configuration unchanged, skipping service restart");
            return Ok(false);
        }

        run_check(&config.check_command, &config.conf_dir)?;
        run_restart(&config.restart_command)?;
        self.last_fingerprint = Some(current);
        info!("service restarted");
        Ok(true)
    }
}

fn run_restart(command: &[String]) -> Result<(), SyncError> {
    let (program, args) = split_command(command)?;
    let output = Command::new(program).args(args).output()?;

    if !output.status.success() {
        return Err(SyncError::Restart {
            status: output.status,
            stderr: stderr_text(&output.stderr),
        });
    }

    Ok(())
}
