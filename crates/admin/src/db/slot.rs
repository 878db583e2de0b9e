//! Key-value slot implementations.

use std::collections::HashMap;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::{KeyValueSlot, RepositoryError};

/// File-backed slot: each key is stored as `<dir>/<key>.json`.
///
/// The directory is created on first write. Values are written to a
/// temporary sibling and renamed into place.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Create a slot rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, RepositoryError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<(), RepositoryError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::Unavailable(io::Error::new(
            ErrorKind::InvalidInput,
            format!("invalid slot key: {key:?}"),
        )))
    }
}

/// In-memory slot.
///
/// Clones share the same storage, so a test can keep a handle while the
/// store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemorySlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds `value` under `key`.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let slot = Self::new();
        slot.lock().values.insert(key.to_string(), value.to_string());
        slot
    }

    /// Make every subsequent write fail with `RepositoryError::Unavailable`.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_writable(inner: &MemoryInner) -> Result<(), RepositoryError> {
        if inner.fail_writes {
            return Err(RepositoryError::Unavailable(io::Error::other(
                "slot writes disabled",
            )));
        }
        Ok(())
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.lock().values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let mut inner = self.lock();
        Self::check_writable(&inner)?;
        inner.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_file_slot_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        assert!(slot.get("authors").unwrap().is_none());
    }

    #[test]
    fn test_file_slot_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested"));

        slot.set("authors", "[1,2,3]").unwrap();
        assert_eq!(slot.get("authors").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(dir.path().join("nested").join("authors.json").exists());

        slot.set("authors", "[]").unwrap();
        assert_eq!(slot.get("authors").unwrap().as_deref(), Some("[]"));
        assert!(!dir.path().join("nested").join(".authors.json.tmp").exists());
    }

    #[test]
    fn test_file_slot_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());

        for key in ["", "../escape", "a/b", "a.b"] {
            assert!(
                matches!(slot.set(key, "x"), Err(RepositoryError::Unavailable(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_memory_slot_clones_share_storage() {
        let slot = MemorySlot::new();
        let handle = slot.clone();

        slot.set("authors", "[]").unwrap();
        assert_eq!(handle.get("authors").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_slot_fail_writes() {
        let slot = MemorySlot::with_value("authors", "[]");
        slot.fail_writes(true);

        assert!(slot.set("authors", "[1]").is_err());
        assert_eq!(slot.get("authors").unwrap().as_deref(), Some("[]"));

        slot.fail_writes(false);
        slot.set("authors", "[1]").unwrap();
        assert_eq!(slot.get("authors").unwrap().as_deref(), Some("[1]"));
    }
}
