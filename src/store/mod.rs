pub mod file;
pub mod memory;

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage keys for the three persisted records.
pub const USERS_KEY: &str = "users";
pub const JOBS_KEY: &str = "jobs";
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Current schema version written into every persisted envelope.
pub const SCHEMA_VERSION: u32 = 1;

/// Raw key-value storage over string keys and string values.
///
/// Implementations are synchronous and local; there are no transactions and
/// concurrent writers follow last-write-wins.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Envelope around every persisted value carrying a schema version tag.
#[derive(Debug, Serialize, Deserialize)]
struct Versioned<T> {
    schema: u32,
    data: T,
}

/// Typed view over a [`KvStore`]: owns the JSON (de)serialization boundary.
///
/// A record that fails to deserialize, or whose schema tag is unknown, is
/// treated as absent and the bad record is removed from storage.
#[derive(Clone)]
pub struct Store {
    inner: Arc<dyn KvStore>,
}

impl Store {
    pub fn new(inner: Arc<dyn KvStore>) -> Self {
        Self { inner }
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.inner.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Versioned<T>>(&raw) {
            Ok(envelope) if envelope.schema == SCHEMA_VERSION => Ok(Some(envelope.data)),
            Ok(envelope) => {
                warn!(key, schema = envelope.schema, "unknown schema version, clearing record");
                self.inner.remove(key)?;
                Ok(None)
            }
            Err(err) => {
                warn!(key, error = %err, "malformed persisted record, clearing");
                self.inner.remove(key)?;
                Ok(None)
            }
        }
    }

    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let envelope = Versioned {
            schema: SCHEMA_VERSION,
            data: value,
        };
        let raw = serde_json::to_string(&envelope)?;
        self.inner.set(key, &raw)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }
}
