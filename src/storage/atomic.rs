//! Whole-file replacement without torn writes
//!
//! Content goes to a temp file in the destination directory, is fsynced, and is
//! renamed over the target. Readers see either the old file or the new one. A failure
//! before the rename drops the temp file and leaves the target untouched.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder;

const TEMP_PREFIX: &str = ".wallet-tmp-";
const TEMP_SUFFIX: &str = ".json";

/// Atomically replace `path` with `contents`, applying Unix `mode` to the new file
pub fn write_atomic(path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
    write_atomic_with(path, mode, |file| file.write_all(contents))
}

/// Atomically replace `path` with whatever `fill` writes into the temp file
pub fn write_atomic_with<F>(path: &Path, mode: u32, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Named so the `.wallet-*.json` exclusion also covers a temp file left by a crash
    let mut tmp = Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)?;
    fill(tmp.as_file_mut())?;
    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
