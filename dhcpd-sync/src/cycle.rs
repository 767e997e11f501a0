use tracing::info;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::reload::ReloadManager;
use crate::writer;
use reservation_diff_core::count_reservation_blocks;

/// Apply one fetched payload to the managed configuration.
///
/// Sanity-checks the payload, atomically commits it to the target file,
/// and reloads the service if the managed set changed. Returns the number
/// of complete reservation blocks in the payload.
///
/// The sanity gate runs before the writer so an empty or garbled export
/// can never replace the managed file.
pub fn apply_payload(
    config: &SyncConfig,
    payload: &str,
    reload: &mut ReloadManager,
) -> Result<usize, SyncError> {
    let reservations = count_reservation_blocks(payload);
    if reservations < 1 {
        return Err(SyncError::ParseSanity);
    }

    let staged = writer::stage(&config.conf_dir, payload)?;
    staged.commit(&config.target_file)?;
    info!(
        reservations,
        target = %config.target_file.display(),
        "updated managed reservations file"
    );

    reload.maybe_reload(config)?;
    Ok(reservations)
}
