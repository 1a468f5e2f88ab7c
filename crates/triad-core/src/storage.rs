//! Key/value persistence of JSON-serialized lists.
//!
//! One JSON file per key under the data directory. When the directory fails
//! a write/delete probe at open time, an in-process map takes over for the
//! life of the process; data in that fallback does not survive exit.
//!
//! No operation here returns an error. Read failures degrade to an empty
//! result, write failures to a logged no-op, so callers never have to
//! handle storage faults.

use serde::{Serialize, de::DeserializeOwned};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

const PROBE_FILE: &str = ".storage-probe";

#[derive(Debug)]
enum Backend {
    Disk(PathBuf),
    Memory(RefCell<BTreeMap<String, String>>),
}

/// Persistence medium for the list stores and the active-tab key.
#[derive(Debug)]
pub struct Storage {
    backend: Backend,
}

impl Storage {
    /// Open storage rooted at `dir`, probing it once with a write/delete
    /// round trip. On probe failure the volatile in-memory backend is used
    /// instead and a warning is logged.
    #[must_use]
    pub fn open(dir: &Path) -> Self {
        match probe(dir) {
            Ok(()) => Self {
                backend: Backend::Disk(dir.to_path_buf()),
            },
            Err(err) => {
                warn!(
                    dir = %dir.display(),
                    %err,
                    "storage unavailable, falling back to in-memory store; data will not survive exit"
                );
                Self::in_memory()
            }
        }
    }

    /// Volatile storage, used as the fallback backend and by tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(RefCell::new(BTreeMap::new())),
        }
    }

    /// Whether values written here survive process exit.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        matches!(self.backend, Backend::Disk(_))
    }

    /// Load the stored list for `key`. Absent key, unreadable medium, and
    /// unparseable content all yield an empty vec.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.get(key).unwrap_or_default()
    }

    /// Persist `items` under `key`. Failures are logged, never propagated.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) {
        self.put(key, &items);
    }

    /// Load any stored JSON value for `key`. `None` when absent or when the
    /// stored content fails to parse (logged).
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, %err, "stored content is not valid JSON, treating as absent");
                None
            }
        }
    }

    /// Store any JSON value under `key`. Failures are logged, never propagated.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.write_raw(key, &raw),
            Err(err) => error!(key, %err, "failed to serialize value"),
        }
    }

    /// Remove one key. Missing keys are a no-op.
    pub fn clear(&self, key: &str) {
        match &self.backend {
            Backend::Disk(dir) => {
                if let Err(err) = fs::remove_file(key_path(dir, key)) {
                    if err.kind() != io::ErrorKind::NotFound {
                        error!(key, %err, "failed to clear key");
                    }
                }
            }
            Backend::Memory(map) => {
                map.borrow_mut().remove(key);
            }
        }
    }

    /// Remove every application key.
    pub fn clear_all(&self) {
        match &self.backend {
            Backend::Disk(_) => {
                for key in self.keys() {
                    self.clear(&key);
                }
            }
            Backend::Memory(map) => map.borrow_mut().clear(),
        }
    }

    /// All list data as one pretty-printed JSON object keyed by list name.
    /// Only `*Items` keys are exported; unreadable entries are skipped and a
    /// failed render yields `{}`.
    #[must_use]
    pub fn export_data(&self) -> String {
        let mut object = serde_json::Map::new();
        for key in self.keys() {
            if !key.ends_with("Items") {
                continue;
            }
            if let Some(value) = self.get::<serde_json::Value>(&key) {
                object.insert(key, value);
            }
        }
        serde_json::to_string_pretty(&serde_json::Value::Object(object)).unwrap_or_else(|err| {
            error!(%err, "failed to render export");
            "{}".to_string()
        })
    }

    /// Import a JSON object of key -> value, overwriting each present key.
    /// Returns false (with a log) when `json` is not an object.
    pub fn import_data(&self, json: &str) -> bool {
        let parsed: serde_json::Map<String, serde_json::Value> = match serde_json::from_str(json) {
            Ok(map) => map,
            Err(err) => {
                error!(%err, "import data is not a JSON object");
                return false;
            }
        };
        for (key, value) in parsed {
            self.put(&key, &value);
        }
        true
    }

    fn keys(&self) -> Vec<String> {
        match &self.backend {
            Backend::Disk(dir) => {
                let entries = match fs::read_dir(dir) {
                    Ok(entries) => entries,
                    Err(err) => {
                        error!(dir = %dir.display(), %err, "failed to list storage keys");
                        return Vec::new();
                    }
                };
                let mut keys: Vec<String> = entries
                    .filter_map(Result::ok)
                    .filter_map(|entry| {
                        let path = entry.path();
                        if path.extension().is_some_and(|ext| ext == "json") {
                            path.file_stem()
                                .map(|stem| stem.to_string_lossy().into_owned())
                        } else {
                            None
                        }
                    })
                    .collect();
                keys.sort();
                keys
            }
            Backend::Memory(map) => map.borrow().keys().cloned().collect(),
        }
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match &self.backend {
            Backend::Disk(dir) => match fs::read_to_string(key_path(dir, key)) {
                Ok(raw) => Some(raw),
                Err(err) if err.kind() == io::ErrorKind::NotFound => None,
                Err(err) => {
                    error!(key, %err, "failed to read key");
                    None
                }
            },
            Backend::Memory(map) => map.borrow().get(key).cloned(),
        }
    }

    fn write_raw(&self, key: &str, raw: &str) {
        match &self.backend {
            Backend::Disk(dir) => {
                if let Err(err) = fs::write(key_path(dir, key), raw) {
                    error!(key, %err, "failed to write key");
                } else {
                    debug!(key, bytes = raw.len(), "persisted");
                }
            }
            Backend::Memory(map) => {
                map.borrow_mut().insert(key.to_string(), raw.to_string());
            }
        }
    }
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

fn probe(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let sentinel = dir.join(PROBE_FILE);
    fs::write(&sentinel, b"probe")?;
    fs::remove_file(&sentinel)
}
