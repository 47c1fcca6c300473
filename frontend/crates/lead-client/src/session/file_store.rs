//! Session persisted as a flat JSON object on disk.

use crate::{SessionError, SessionResult, SessionStore};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};

type Entries = BTreeMap<String, String>;

/// File-backed store used by the CLI.
///
/// Every write replaces the whole file through a temp file and rename, so
/// a crash mid-write leaves the previous session intact.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file reads as an empty session. A corrupted file is logged
    /// and also treated as empty; the next write replaces it.
    fn read_entries(&self) -> SessionResult<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| SessionError::file_read(self.path.clone(), e))?;

        match serde_json::from_str::<Entries>(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Session file corrupted at {:?}: {e}", self.path);
                Ok(Entries::new())
            }
        }
    }

    fn write_entries(&self, entries: &Entries) -> SessionResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| SessionError::dir_creation(dir.to_path_buf(), e))?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let temp_path = self
            .path
            .with_extension(format!("json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })?;

        debug!("Session written to {:?}", self.path);
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| SessionError::poisoned())?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let _guard = self.lock.lock().map_err(|_| SessionError::poisoned())?;
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let _guard = self.lock.lock().map_err(|_| SessionError::poisoned())?;
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
