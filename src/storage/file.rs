//! JSON-file key-value store.
//!
//! The whole map is kept in memory and rewritten on each mutation through a temp
//! file in the same directory, so a crash mid-write never leaves a truncated file.

use super::KeyValueStore;
use crate::error::StorageResult;
use anyhow::Context as _;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

const STORE_FILE_NAME: &str = "storage.json";

/// Default location: `<data dir>/zoneboard/storage.json`.
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("zoneboard").join(STORE_FILE_NAME))
}

pub struct FileStore {
    path: PathBuf,
    data: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file starts empty. A file that is not a JSON object of strings is
    /// logged and ignored; it gets replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), "Ignoring malformed storage file: {}", e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    /// Open the store at the platform default location.
    pub fn open_default() -> anyhow::Result<Self> {
        let path = default_storage_path().context("No data directory on this platform")?;
        Self::open(&path).with_context(|| format!("Failed to open store at {}", path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, data: &BTreeMap<String, String>) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(tmp.as_file_mut(), data)?;
        tmp.as_file_mut().flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut data = self.data.lock();
        data.insert(key.to_string(), value.to_string());
        self.flush(&data)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut data = self.data.lock();
        if data.remove(key).is_some() {
            self.flush(&data)?;
        }
        Ok(())
    }
}
