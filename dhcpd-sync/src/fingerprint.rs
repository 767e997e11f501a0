use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest over the managed configuration set.
///
/// Concatenates the bytes of every regular file in `dir` whose name starts
/// with `prefix` and ends with `suffix`, in sorted filename order, and
/// returns the hex digest. The value only lives in the running process; it
/// is compared across cycles to decide whether a reload is needed.
pub fn fingerprint_dir(dir: &Path, prefix: &str, suffix: &str) -> io::Result<String> {
    let mut names: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(prefix) && name.ends_with(suffix) {
            names.push(name);
        }
    }
    names.sort();

    let mut hasher = Sha256::new();
    for name in names {
        let path = dir.join(&name);
        if path.is_file() {
            hasher.update(std::fs::read(&path)?);
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}
