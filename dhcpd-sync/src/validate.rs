use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::SyncError;

/// Run the external syntax checker against the candidate configuration
/// directory.
///
/// The configured argv is executed with `conf_dir` appended as its final
/// argument. A non-zero exit maps to [`SyncError::Validation`] carrying
/// the captured error output verbatim; there is no partial acceptance.
pub fn run_check(command: &[String], conf_dir: &Path) -> Result<(), SyncError> {
    let (program, args) = split_command(command)?;
    let output = Command::new(program).args(args).arg(conf_dir).output()?;

    if !output.status.success() {
        return Err(SyncError::Validation {
            status: output.status,
            stderr: stderr_text(&output.stderr),
        });
    }

    debug!("configuration check passed");
    Ok(())
}

pub(crate) fn split_command(command: &[String]) -> Result<(&String, &[String]), SyncError> {
    command.split_first().ok_or_else(|| {
        SyncError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "command argv is empty",
        ))
    })
}

pub(crate) fn stderr_text(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::run_check;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zero_exit_passes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let command = argv(&["/bin/sh", "-c", "exit 0"]);

        assert!(run_check(&command, dir.path()).is_ok());
    }

    #[test]
    fn non_zero_exit_carries_stderr_verbatim() {
        let dir = tempfile::tempdir().expect("tempdir");
        let command = argv(&["/bin/sh", "-c", "echo 'bad config on line 3' >&2; exit 2"]);

        let err = run_check(&command, dir.path()).expect_err("check should fail");
        assert!(err.to_string().contains("bad config on line 3"));
    }

    #[test]
    fn candidate_directory_is_passed_to_the_checker() {
        let dir = tempfile::tempdir().expect("tempdir");
        // The shell probe fails unless its final argument is a directory.
        let command = argv(&["/bin/sh", "-c", "test -d \"$1\"", "check"]);

        assert!(run_check(&command, dir.path()).is_ok());
    }
}
