//! Command history: the `History` seam plus in-memory and file-backed stores.

use crate::error::ApiError;
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// Ordered command log consulted by the router.
pub trait History {
    fn append(&mut self, entry: String);

    /// Entries, oldest first.
    fn entries(&self) -> Vec<String>;

    /// Write the log to its backing store, if any.
    fn persist(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Bounded history kept in memory.
///
/// Empty entries and consecutive duplicates are skipped; the oldest entry is
/// dropped once `max_size` is reached.
#[derive(Debug, Clone)]
pub struct InMemoryHistory {
    entries: Vec<String>,
    max_size: usize,
}

impl InMemoryHistory {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn trim(&mut self) {
        if self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(..excess);
        }
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

impl History for InMemoryHistory {
    fn append(&mut self, entry: String) {
        if entry.trim().is_empty() {
            return;
        }
        if self.entries.last() == Some(&entry) {
            return;
        }
        self.entries.push(entry);
        self.trim();
    }

    fn entries(&self) -> Vec<String> {
        self.entries.clone()
    }
}

/// History persisted to a line-per-entry file.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    path: PathBuf,
    inner: InMemoryHistory,
}

impl HistoryManager {
    /// Open the history at `path`, loading existing entries. A missing file is
    /// an empty history.
    pub fn open(path: impl Into<PathBuf>, max_size: usize) -> Result<Self, ApiError> {
        let mut manager = Self {
            path: path.into(),
            inner: InMemoryHistory::new(max_size),
        };
        match manager.load() {
            Ok(()) => {}
            Err(ApiError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %manager.path.display(), "No history file yet");
            }
            Err(e) => return Err(e),
        }
        Ok(manager)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace in-memory entries with the file's contents, keeping the newest
    /// `max_size` lines.
    pub fn load(&mut self) -> Result<(), ApiError> {
        let file = fs::File::open(&self.path)?;
        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            entries.push(line?);
        }
        self.inner.entries = entries;
        self.inner.trim();
        debug!(path = %self.path.display(), entries = self.inner.len(), "History loaded");
        Ok(())
    }

    pub fn save(&self) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = fs::File::create(&self.path)?;
        for entry in &self.inner.entries {
            writeln!(file, "{}", entry)?;
        }
        file.flush()?;
        debug!(path = %self.path.display(), entries = self.inner.len(), "History saved");
        Ok(())
    }
}

impl History for HistoryManager {
    fn append(&mut self, entry: String) {
        if entry.contains('\n') {
            warn!("Skipping multi-line history entry");
            return;
        }
        self.inner.append(entry);
    }

    fn entries(&self) -> Vec<String> {
        self.inner.entries()
    }

    fn persist(&self) -> Result<(), ApiError> {
        self.save()
    }
}
