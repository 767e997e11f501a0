use std::process::ExitStatus;

use thiserror::Error;

/// Failures that can end a reconciliation cycle.
///
/// Every variant is fatal to the process; the external supervisor is the
/// retry mechanism.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Export fetch timed out or could not connect.
    #[error("export request failed: {0}")]
    TransientNetwork(#[source] reqwest::Error),

    /// Export endpoint answered with a non-success status or an unexpected
    /// content type.
    #[error("unexpected export response: {0}")]
    Protocol(String),

    /// Fetched payload held no complete host reservation block.
    #[error("no complete host reservations in fetched payload, refusing to overwrite")]
    ParseSanity,

    /// Configuration checker rejected the candidate file set.
    #[error("configuration check failed with {status}:\n{stderr}")]
    Validation { status: ExitStatus, stderr: String },

    /// Service restart command exited non-zero.
    #[error("service restart failed with {status}: {stderr}")]
    Restart { status: ExitStatus, stderr: String },

    /// Local file operation failed while staging or fingerprinting.
    #[error("file operation failed: {0}")]
    Io(#[from] std::io::Error),
}
