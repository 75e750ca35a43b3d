//! In-Memory Backend
//!
//! A process-local `BlobStore` with TTL expiration. Serves as the test
//! double for the memcached backend and as a dry-run target for workloads
//! that should not touch a live cluster.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::backend::BlobStore;
use crate::error::Result;

// == Stored Blob ==
/// A single stored blob with its expiration metadata.
#[derive(Debug, Clone)]
struct StoredBlob {
    blob: Vec<u8>,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    expires_at: Option<u64>,
}

impl StoredBlob {
    fn new(blob: Vec<u8>, ttl_secs: u32) -> Self {
        // TTL 0 keeps the entry forever, as memcached does.
        let expires_at = if ttl_secs > 0 {
            Some(current_timestamp_ms() + u64::from(ttl_secs) * 1000)
        } else {
            None
        };
        Self { blob, expires_at }
    }

    /// An entry is expired once the current time reaches its expiration time.
    fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Memory Store ==
/// In-memory blob store with millisecond-granularity expiration.
///
/// Expired entries are dropped lazily on access. The mutex exists only
/// because `BlobStore` takes `&self`; there is no contention in the
/// one-adapter-per-worker usage this crate is built for.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, StoredBlob>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap();
        entries.values().filter(|e| !e.is_expired()).count()
    }

    /// Returns true if the store holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlobStore for MemoryStore {
    fn fetch(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut entries = self.entries.lock().unwrap();

        if let Some(entry) = entries.get(key) {
            if entry.is_expired() {
                entries.remove(key);
                return Ok(None);
            }
            return Ok(Some(entry.blob.clone()));
        }

        Ok(None)
    }

    fn store(&self, key: &str, blob: &[u8], ttl_secs: u32) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), StoredBlob::new(blob.to_vec(), ttl_secs));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut entries = self.entries.lock().unwrap();
        Ok(entries.remove(key).is_some())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_fetch_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.fetch("nothing").unwrap(), None);
    }

    #[test]
    fn test_store_and_fetch() {
        let store = MemoryStore::new();

        store.store("k", b"blob", 0).unwrap();
        assert_eq!(store.fetch("k").unwrap(), Some(b"blob".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrites() {
        let store = MemoryStore::new();

        store.store("k", b"first", 0).unwrap();
        store.store("k", b"second", 0).unwrap();

        assert_eq!(store.fetch("k").unwrap(), Some(b"second".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_reports_existence() {
        let store = MemoryStore::new();

        store.store("k", b"blob", 0).unwrap();
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
        assert_eq!(store.fetch("k").unwrap(), None);
    }

    #[test]
    fn test_ttl_expiration() {
        let store = MemoryStore::new();

        store.store("k", b"blob", 1).unwrap();
        assert!(store.fetch("k").unwrap().is_some());

        sleep(Duration::from_millis(1100));

        assert_eq!(store.fetch("k").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_ttl_never_expires() {
        let entry = StoredBlob::new(b"blob".to_vec(), 0);
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = StoredBlob {
            blob: b"blob".to_vec(),
            // Expires exactly at creation time
            expires_at: Some(current_timestamp_ms()),
        };
        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
