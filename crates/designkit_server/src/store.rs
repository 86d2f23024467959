//! State storage
//!
//! The in-memory snapshot is the primary source. Every write is mirrored to
//! a JSON file so the state survives restarts and can be read by clients
//! that cannot reach the server.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use designkit_tokens::DesignKitState;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write state mirror {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode state: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Read and replace the whole state
pub trait StateStore: Send + Sync {
    /// `None` until a state has been recorded
    fn get_state(&self) -> Option<DesignKitState>;

    /// Total replace
    fn set_state(&self, state: DesignKitState) -> Result<()>;
}

/// Memory-first store with a JSON mirror on disk
#[derive(Debug)]
pub struct FileStateStore {
    path: PathBuf,
    memory: RwLock<Option<DesignKitState>>,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            memory: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_mirror(&self, state: &DesignKitState) -> Result<()> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        let json = serde_json::to_vec_pretty(state)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

/// Last durable snapshot, if one is readable
///
/// Missing files are silent; unreadable or malformed ones are logged.
pub fn read_mirror(path: &Path) -> Option<DesignKitState> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "state mirror unreadable");
            return None;
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(state) => Some(state),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "state mirror malformed");
            None
        }
    }
}

impl StateStore for FileStateStore {
    fn get_state(&self) -> Option<DesignKitState> {
        if let Some(state) = self
            .memory
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Some(state.clone());
        }

        let state = read_mirror(&self.path)?;
        debug!(path = %self.path.display(), "state restored from mirror");
        let mut memory = self.memory.write().unwrap_or_else(PoisonError::into_inner);
        // A write may have landed while the mirror was being read
        Some(memory.get_or_insert(state).clone())
    }

    fn set_state(&self, state: DesignKitState) -> Result<()> {
        // Held across the disk write so readers never see an unmirrored state
        let mut memory = self.memory.write().unwrap_or_else(PoisonError::into_inner);
        self.write_mirror(&state)?;
        debug!(
            selections = state.selections.len(),
            path = %self.path.display(),
            "state replaced"
        );
        *memory = Some(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_store_has_no_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::new(dir.path().join("state.json"));
        assert_eq!(store.get_state(), None);
    }

    #[test]
    fn writes_are_mirrored_and_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/state.json");
        let state = DesignKitState::new().with_selection("radius", "pill");

        FileStateStore::new(&path).set_state(state.clone()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let reopened = FileStateStore::new(&path);
        assert_eq!(reopened.get_state(), Some(state));
    }

    #[test]
    fn memory_wins_over_a_changed_mirror() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let store = FileStateStore::new(&path);
        let state = DesignKitState::new().with_selection("cards", "elevated");
        store.set_state(state.clone()).unwrap();

        fs::write(&path, "{}").unwrap();
        assert_eq!(store.get_state(), Some(state));
    }

    #[test]
    fn malformed_mirror_means_no_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(FileStateStore::new(&path).get_state(), None);
    }

    #[test]
    fn unwritable_mirror_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let store = FileStateStore::new(blocker.join("state.json"));
        let err = store
            .set_state(DesignKitState::new().with_selection("radius", "pill"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(store.get_state(), None);
    }

    #[test]
    fn failed_write_keeps_the_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let store = FileStateStore::new(&path);
        let before = DesignKitState::new().with_selection("cards", "bordered");
        store.set_state(before.clone()).unwrap();

        // A directory where the temp file should go makes the write fail
        fs::create_dir(path.with_extension("json.tmp")).unwrap();
        let after = DesignKitState::new().with_selection("cards", "elevated");
        assert!(store.set_state(after).is_err());
        assert_eq!(store.get_state(), Some(before.clone()));
        assert_eq!(FileStateStore::new(&path).get_state(), Some(before));
    }
}
