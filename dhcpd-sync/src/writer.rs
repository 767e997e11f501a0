use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::SyncError;

#[cfg(unix)]
const MANAGED_FILE_MODE: u32 = 0o644;

/// A fully written candidate file awaiting its atomic commit.
///
/// Dropping a `Staged` without committing removes the temporary file and
/// leaves the target untouched.
pub struct Staged {
    file: NamedTempFile,
}

/// Write `content` to a temporary file inside `dir`.
///
/// The temporary file lives in the same directory as the final target so
/// the later rename stays on one filesystem and is atomic. Content is
/// flushed to disk and the managed permission bits are set before the
/// stage is handed back.
pub fn stage(dir: &Path, content: &str) -> Result<Staged, SyncError> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(MANAGED_FILE_MODE))?;
    }

    Ok(Staged { file })
}

impl Staged {
    /// Atomically rename the staged file over `target`.
    ///
    /// A concurrent reader observes either the previous content or the new
    /// content in full, never a partial write. On failure the temporary
    /// file is removed and the previous target bytes are left in place.
    pub fn commit(self, target: &Path) -> Result<(), SyncError> {
        self.file
            .persist(target)
            .map_err(|err| SyncError::Io(err.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::stage;

    fn temp_entries(dir: &std::path::Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .expect("read_dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn commit_replaces_target_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("dhcpd-reservations.conf");
        std::fs::write(&target, "old content\n").expect("seed target");

        let staged = stage(dir.path(), "new content\n").expect("stage");
        staged.commit(&target).expect("commit");

        assert_eq!(
            std::fs::read_to_string(&target).expect("read target"),
            "new content\n"
        );
        assert_eq!(temp_entries(dir.path()), vec!["dhcpd-reservations.conf"]);
    }

    #[test]
    fn dropped_stage_leaves_target_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("dhcpd-reservations.conf");
        std::fs::write(&target, "old content\n").expect("seed target");

        let staged = stage(dir.path(), "never committed\n").expect("stage");
        drop(staged);

        assert_eq!(
            std::fs::read_to_string(&target).expect("read target"),
            "old content\n"
        );
        assert_eq!(temp_entries(dir.path()), vec!["dhcpd-reservations.conf"]);
    }

    #[cfg(unix)]
    #[test]
    fn committed_file_has_managed_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("dhcpd-reservations.conf");

        let staged = stage(dir.path(), "content\n").expect("stage");
        staged.commit(&target).expect("commit");

        let mode = std::fs::metadata(&target).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
