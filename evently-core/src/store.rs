//! Key-value storage and the catalog accessor built on top of it.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::constants::EVENTS_KEY;
use crate::error::{EventlyError, EventlyResult};
use crate::seed;

/// A flat string-to-string store (one persisted slot per key).
pub trait KeyValueStore {
    /// Ok(None) when the key has never been written.
    fn get(&self, key: &str) -> EventlyResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> EventlyResult<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> EventlyResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| EventlyError::StorageRead {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> EventlyResult<()> {
        let write_error = |e: std::io::Error| EventlyError::StorageWrite {
            key: key.to_string(),
            reason: e.to_string(),
        };

        std::fs::create_dir_all(&self.dir).map_err(write_error)?;

        // Write to a temp file first so a crash never leaves half a catalog behind
        let path = self.path_for(key);
        let temp = self.dir.join(format!("{}.json.tmp", key));
        std::fs::write(&temp, value).map_err(write_error)?;
        std::fs::rename(&temp, &path).map_err(write_error)?;
        Ok(())
    }
}

/// In-memory store, optionally failing reads or writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> EventlyResult<Option<String>> {
        if self.fail_reads {
            return Err(EventlyError::StorageRead {
                key: key.to_string(),
                reason: "store is unavailable".to_string(),
            });
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> EventlyResult<()> {
        if self.fail_writes {
            return Err(EventlyError::StorageWrite {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the catalog under the `events` key.
#[derive(Debug, Clone)]
pub struct EventStore<S> {
    backend: S,
}

impl<S: KeyValueStore> EventStore<S> {
    pub fn new(backend: S) -> Self {
        EventStore { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the stored catalog, never failing.
    ///
    /// - nothing stored yet: the seed catalog is returned and written back
    /// - unreadable or invalid blob: the seed catalog is returned, the blob is
    ///   left untouched
    pub fn load(&mut self) -> Catalog {
        match self.try_load() {
            Ok(Some(catalog)) => {
                debug!(events = catalog.len(), "loaded catalog from storage");
                catalog
            }
            Ok(None) => {
                debug!("no stored catalog, seeding");
                let catalog = seed::catalog();
                if let Err(e) = self.save(&catalog) {
                    warn!(error = %e, "could not persist seed catalog");
                }
                catalog
            }
            Err(e) => {
                warn!(error = %e, "falling back to seed catalog");
                seed::catalog()
            }
        }
    }

    /// Load the stored catalog, surfacing read and parse errors.
    pub fn try_load(&self) -> EventlyResult<Option<Catalog>> {
        let Some(raw) = self.backend.get(EVENTS_KEY)? else {
            return Ok(None);
        };

        // An empty slot counts as never written
        if raw.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| EventlyError::Deserialization(e.to_string()))
    }

    /// Replace the stored catalog.
    pub fn save(&mut self, catalog: &Catalog) -> EventlyResult<()> {
        let json = serde_json::to_string(catalog)
            .map_err(|e| EventlyError::Serialization(e.to_string()))?;
        self.backend.set(EVENTS_KEY, &json)?;
        debug!(events = catalog.len(), "saved catalog");
        Ok(())
    }

    /// Overwrite the stored catalog with the seed data.
    pub fn reset(&mut self) -> EventlyResult<Catalog> {
        let catalog = seed::catalog();
        self.save(&catalog)?;
        Ok(catalog)
    }
}
