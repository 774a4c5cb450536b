//! Durable slots: the single named location that holds the serialized
//! employee collection between sessions.

use crate::error::{RosterError, RosterResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// A named key holding one JSON document
pub trait DurableSlot: Send + Sync {
    /// Slot name, used in logs and errors
    fn name(&self) -> &str;

    /// Read the stored document; `Ok(None)` when nothing has been written yet
    fn load(&self) -> RosterResult<Option<String>>;

    /// Overwrite the stored document
    fn store(&self, contents: &str) -> RosterResult<()>;
}

/// Slot backed by `<dir>/<name>.json`
#[derive(Debug, Clone)]
pub struct FileSlot {
    name: String,
    path: PathBuf,
}

impl FileSlot {
    pub fn new<P: AsRef<Path>>(dir: P, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: dir.as_ref().join(format!("{}.json", name)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DurableSlot for FileSlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> RosterResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        debug!("Read {} bytes from {}", contents.len(), self.path.display());
        Ok(Some(contents))
    }

    /// Writes go to a temporary file in the same directory and are renamed over
    /// the slot, so a failed write leaves the previous contents intact.
    fn store(&self, contents: &str) -> RosterResult<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| RosterError::slot(&self.name, "slot path has no parent directory"))?;
        fs::create_dir_all(dir)?;

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        file.persist(&self.path)
            .map_err(|e| RosterError::slot(&self.name, format!("failed to replace slot file: {}", e)))?;

        debug!("Wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemorySlotState {
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

/// In-process slot; clones share the same contents
///
/// Writes can be made to fail on demand to exercise quota/IO failures.
#[derive(Debug, Clone)]
pub struct MemorySlot {
    name: String,
    state: Arc<RwLock<MemorySlotState>>,
}

impl MemorySlot {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: Arc::new(RwLock::new(MemorySlotState::default())),
        }
    }

    /// Slot that already holds `contents`
    pub fn with_contents(name: &str, contents: &str) -> Self {
        let slot = Self::new(name);
        if let Ok(mut state) = slot.state.write() {
            state.contents = Some(contents.to_string());
        }
        slot
    }

    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_writes = fail;
        }
    }

    /// Current raw contents
    pub fn contents(&self) -> Option<String> {
        self.state.read().ok().and_then(|state| state.contents.clone())
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.state.read().map(|state| state.writes).unwrap_or(0)
    }
}

impl DurableSlot for MemorySlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> RosterResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|_| RosterError::lock("Failed to acquire read lock on memory slot"))?;
        Ok(state.contents.clone())
    }

    fn store(&self, contents: &str) -> RosterResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| RosterError::lock("Failed to acquire write lock on memory slot"))?;

        if state.fail_writes {
            return Err(RosterError::slot(&self.name, "storage quota exceeded"));
        }
        state.contents = Some(contents.to_string());
        state.writes += 1;
        Ok(())
    }
}
