//! Version-control exclusion list (`.gitignore`) maintenance

use super::atomic::write_atomic;
use crate::domain::PersistError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Comment line introducing the appended block
pub const EXCLUSION_HEADER: &str = "# Agent wallets (NEVER COMMIT!)";

/// Default file name of the exclusion list
pub const EXCLUSION_FILE_NAME: &str = ".gitignore";

/// Mode for a newly created exclusion list (rw-r--r--)
const DEFAULT_MODE: u32 = 0o644;

/// What `ensure_excluded` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionOutcome {
    /// Every pattern was already listed, nothing was written
    Unchanged,
    /// These patterns were appended
    Appended(Vec<String>),
}

/// An exclusion list file
#[derive(Debug, Clone)]
pub struct ExclusionList {
    path: PathBuf,
}

impl ExclusionList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `.gitignore` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(EXCLUSION_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure every pattern is listed as a whole line.
    ///
    /// Missing patterns are appended under [`EXCLUSION_HEADER`]. Existing content is
    /// never removed or reordered. When nothing is missing the file is not touched.
    pub fn ensure_excluded<S: AsRef<str>>(
        &self,
        patterns: &[S],
    ) -> Result<ExclusionOutcome, PersistError> {
        let existing = self.read_existing()?;
        let content: &[u8] = existing.as_ref().map(|e| e.content.as_slice()).unwrap_or(&[]);

        let missing = missing_patterns(&String::from_utf8_lossy(content), patterns);
        if missing.is_empty() {
            log::debug!("{} already excludes wallet files", self.path.display());
            return Ok(ExclusionOutcome::Unchanged);
        }

        let updated = append_block(content, &missing);
        let (target, mode) = match &existing {
            Some(e) => (e.target.as_path(), e.mode),
            None => (self.path.as_path(), DEFAULT_MODE),
        };
        write_atomic(target, &updated, mode).map_err(|e| PersistError::io(target, e))?;

        log::info!(
            "Added {} pattern(s) to {}",
            missing.len(),
            self.path.display()
        );
        Ok(ExclusionOutcome::Appended(missing))
    }

    /// Current bytes, permission bits and resolved location, or `None` if the file
    /// does not exist. A symlinked list resolves to its target so the rename lands there.
    fn read_existing(&self) -> Result<Option<ExistingList>, PersistError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PersistError::io(&self.path, e)),
        };
        let target = fs::canonicalize(&self.path).map_err(|e| PersistError::io(&self.path, e))?;
        let mode = file_mode(&target).map_err(|e| PersistError::io(&target, e))?;
        Ok(Some(ExistingList {
            content,
            mode,
            target,
        }))
    }
}

struct ExistingList {
    content: Vec<u8>,
    mode: u32,
    target: PathBuf,
}

#[cfg(unix)]
fn file_mode(path: &Path) -> io::Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::metadata(path)?.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> io::Result<u32> {
    Ok(DEFAULT_MODE)
}

/// Requested patterns (deduplicated, in order) not yet present as a whole line.
///
/// Only trailing whitespace is ignored when comparing: git strips it from patterns,
/// but a leading space is part of the pattern and no longer matches the wallet files.
pub fn missing_patterns<S: AsRef<str>>(content: &str, patterns: &[S]) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        if pattern.trim().is_empty() || missing.iter().any(|m| m == pattern) {
            continue;
        }
        if !content.lines().any(|line| line.trim_end() == pattern) {
            missing.push(pattern.to_string());
        }
    }
    missing
}

/// `content` followed by a blank line, the header and one line per pattern.
/// Existing bytes are copied as-is, whatever their encoding.
pub fn append_block(content: &[u8], missing: &[String]) -> Vec<u8> {
    let mut updated = Vec::with_capacity(content.len() + 64);
    updated.extend_from_slice(content);
    if !content.is_empty() && !content.ends_with(b"\n") {
        updated.push(b'\n');
    }
    updated.push(b'\n');
    updated.extend_from_slice(EXCLUSION_HEADER.as_bytes());
    updated.push(b'\n');
    for pattern in missing {
        updated.extend_from_slice(pattern.as_bytes());
        updated.push(b'\n');
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PATTERNS: [&str; 2] = [".wallet-*.json", ".wallet-*.txt"];

    #[test]
    fn test_creates_missing_list() {
        let temp_dir = TempDir::new().unwrap();
        let list = ExclusionList::in_dir(temp_dir.path());

        let outcome = list.ensure_excluded(&PATTERNS).unwrap();
        assert_eq!(
            outcome,
            ExclusionOutcome::Appended(vec![".wallet-*.json".into(), ".wallet-*.txt".into()])
        );

        let content = fs::read_to_string(list.path()).unwrap();
        assert_eq!(
            content,
            "\n# Agent wallets (NEVER COMMIT!)\n.wallet-*.json\n.wallet-*.txt\n"
        );
    }

    #[test]
    fn test_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let list = ExclusionList::in_dir(temp_dir.path());

        list.ensure_excluded(&PATTERNS).unwrap();
        let first = fs::read(list.path()).unwrap();
        let first_mtime = fs::metadata(list.path()).unwrap().modified().unwrap();

        let outcome = list.ensure_excluded(&PATTERNS).unwrap();
        assert_eq!(outcome, ExclusionOutcome::Unchanged);
        assert_eq!(fs::read(list.path()).unwrap(), first);
        assert_eq!(
            fs::metadata(list.path()).unwrap().modified().unwrap(),
            first_mtime
        );
    }

    #[test]
    fn test_preserves_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let list = ExclusionList::in_dir(temp_dir.path());
        let original = "target/\n# build output\n*.log\n*.log\nnode_modules";
        fs::write(list.path(), original).unwrap();

        list.ensure_excluded(&PATTERNS).unwrap();

        let content = fs::read_to_string(list.path()).unwrap();
        assert!(content.starts_with("target/\n# build output\n*.log\n*.log\nnode_modules\n"));
        assert!(content.ends_with(
            "node_modules\n\n# Agent wallets (NEVER COMMIT!)\n.wallet-*.json\n.wallet-*.txt\n"
        ));
    }

    #[test]
    fn test_appends_only_missing_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let list = ExclusionList::in_dir(temp_dir.path());
        fs::write(list.path(), "target/\n.wallet-*.json  \n").unwrap();

        let outcome = list.ensure_excluded(&PATTERNS).unwrap();
        assert_eq!(outcome, ExclusionOutcome::Appended(vec![".wallet-*.txt".into()]));

        let content = fs::read_to_string(list.path()).unwrap();
        assert_eq!(
            content,
            "target/\n.wallet-*.json  \n\n# Agent wallets (NEVER COMMIT!)\n.wallet-*.txt\n"
        );
    }

    #[test]
    fn test_leading_whitespace_is_part_of_the_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let list = ExclusionList::in_dir(temp_dir.path());
        fs::write(list.path(), " .wallet-*.json\n\t.wallet-*.txt\n").unwrap();

        let outcome = list.ensure_excluded(&PATTERNS).unwrap();
        assert_eq!(
            outcome,
            ExclusionOutcome::Appended(vec![".wallet-*.json".into(), ".wallet-*.txt".into()])
        );
    }

    #[test]
    fn test_non_utf8_list_is_extended_byte_for_byte() {
        let temp_dir = TempDir::new().unwrap();
        let list = ExclusionList::in_dir(temp_dir.path());
        let original: &[u8] = b"caf\xe9.log\n/target\n";
        fs::write(list.path(), original).unwrap();

        let outcome = list.ensure_excluded(&PATTERNS).unwrap();
        assert!(matches!(outcome, ExclusionOutcome::Appended(_)));

        let mut expected = original.to_vec();
        expected.extend_from_slice(b"\n# Agent wallets (NEVER COMMIT!)\n.wallet-*.json\n.wallet-*.txt\n");
        assert_eq!(fs::read(list.path()).unwrap(), expected);

        assert_eq!(list.ensure_excluded(&PATTERNS).unwrap(), ExclusionOutcome::Unchanged);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_list_updates_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("dotfiles-gitignore");
        fs::write(&target, "target/\n").unwrap();
        let list = ExclusionList::in_dir(temp_dir.path());
        std::os::unix::fs::symlink(&target, list.path()).unwrap();

        list.ensure_excluded(&PATTERNS).unwrap();

        assert!(fs::symlink_metadata(list.path()).unwrap().file_type().is_symlink());
        let content = fs::read_to_string(&target).unwrap();
        assert!(content.starts_with("target/\n"));
        assert!(content.ends_with(".wallet-*.json\n.wallet-*.txt\n"));
    }

    #[test]
    fn test_partial_match_is_not_a_match() {
        // A line that merely contains the pattern does not exclude it
        let missing = missing_patterns("# .wallet-*.json\n!.wallet-*.json.bak\n", &PATTERNS);
        assert_eq!(missing, vec![".wallet-*.json", ".wallet-*.txt"]);
    }

    #[test]
    fn test_missing_patterns_deduplicates_request() {
        let missing = missing_patterns("", &["a", "a", " ", "", "b"]);
        assert_eq!(missing, vec!["a", "b"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let list = ExclusionList::in_dir(temp_dir.path());
        fs::write(list.path(), "target/\n").unwrap();
        fs::set_permissions(list.path(), fs::Permissions::from_mode(0o664)).unwrap();

        list.ensure_excluded(&PATTERNS).unwrap();
        let mode = fs::metadata(list.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o664);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_list_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let list = ExclusionList::in_dir(temp_dir.path());
        list.ensure_excluded(&PATTERNS).unwrap();

        let mode = fs::metadata(list.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
