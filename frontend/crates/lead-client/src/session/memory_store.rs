use crate::{SessionError, SessionResult, SessionStore};

use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local store. Used by the web proxy and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| SessionError::poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut entries = self.entries.lock().map_err(|_| SessionError::poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut entries = self.entries.lock().map_err(|_| SessionError::poisoned())?;
        entries.remove(key);
        Ok(())
    }
}
