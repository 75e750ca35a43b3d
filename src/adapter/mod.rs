//! Adapter Module
//!
//! The record adapter: translates the generic table/key/fields benchmark
//! interface into blob-store operations. Three translations happen here:
//! key composition (`table:key`), record encoding (one serialized field
//! map per cache value), and status translation (backend outcomes mapped
//! to a small result enum the harness can aggregate).


use std::collections::HashSet;
use std::fmt;

use tracing::{debug, info, warn};

use crate::backend::{BlobStore, MemcachedStore};
use crate::config::Config;
use crate::error::Result;
use crate::record::{self, record_key, Record};

// == Public Constants ==
/// Expiration applied to every stored record, in seconds.
///
/// Writes always use this fixed window; there is no per-record override.
pub const RECORD_TTL_SECS: u32 = 3600;

// == Status ==
/// Outcome of a single adapter operation.
///
/// This is the whole error taxonomy the harness sees. Library-level
/// failures are collapsed to `Error` after being logged; `NotImplemented`
/// is reserved for operations the backend cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed and found what it needed
    Ok,
    /// The record (or a requested field of it) does not exist
    NotFound,
    /// The operation failed; details were logged, not returned
    Error,
    /// The operation is not supported by this adapter
    NotImplemented,
}

impl Status {
    /// Returns true for `Status::Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "OK",
            Status::NotFound => "NOT_FOUND",
            Status::Error => "ERROR",
            Status::NotImplemented => "NOT_IMPLEMENTED",
        };
        f.write_str(name)
    }
}

// == Record Adapter ==
/// Adapter between the benchmark interface and a blob store.
///
/// The backend is injected at construction and owned by the adapter, so
/// the same code path runs against a live cluster (`MemcachedStore`) or an
/// in-process double (`MemoryStore`). One adapter instance serves one
/// worker thread by harness convention; nothing here locks.
#[derive(Debug)]
pub struct RecordAdapter<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> RecordAdapter<S> {
    /// Creates an adapter over an already-constructed backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Reads a record.
    ///
    /// Fetches the blob at `table:key` and copies the requested fields
    /// (or all fields when `fields` is `None`) into `result`.
    ///
    /// Returns `NotFound` when the blob is absent, decodes to an empty
    /// map, or is missing any explicitly requested field.
    pub fn read(
        &self,
        table: &str,
        key: &str,
        fields: Option<&HashSet<String>>,
        result: &mut Record,
    ) -> Status {
        collapse("read", self.try_read(table, key, fields, result))
    }

    /// Performs a range scan. Always unsupported: memcached offers no
    /// key ordering to scan over.
    pub fn scan(
        &self,
        table: &str,
        _start_key: &str,
        _record_count: usize,
        _fields: Option<&HashSet<String>>,
        _result: &mut Vec<Record>,
    ) -> Status {
        debug!("scan on table {} rejected: not supported", table);
        Status::NotImplemented
    }

    /// Updates a record, unconditionally replacing the stored blob with
    /// the given field map.
    ///
    /// There is no read-modify-merge: fields absent from `values` are
    /// discarded along with the previous blob.
    pub fn update(&self, table: &str, key: &str, values: &Record) -> Status {
        collapse("update", self.try_write(table, key, values))
    }

    /// Inserts a record. Identical to `update`: an existing record under
    /// the same key is silently overwritten.
    pub fn insert(&self, table: &str, key: &str, values: &Record) -> Status {
        collapse("insert", self.try_write(table, key, values))
    }

    /// Deletes a record.
    ///
    /// The backend acknowledgement is awaited and checked: a transport
    /// failure reports `Error`, while deleting a key that never existed
    /// still reports `Ok`.
    pub fn delete(&self, table: &str, key: &str) -> Status {
        collapse("delete", self.try_delete(table, key))
    }

    /// Shuts the adapter down, releasing the backend and whatever
    /// connections it holds.
    pub fn shutdown(self) {
        info!("adapter shut down, backend released");
    }

    fn try_read(
        &self,
        table: &str,
        key: &str,
        fields: Option<&HashSet<String>>,
        result: &mut Record,
    ) -> Result<Status> {
        let cache_key = record_key(table, key);

        let blob = match self.store.fetch(&cache_key)? {
            Some(blob) => blob,
            None => return Ok(Status::NotFound),
        };

        let mut stored = record::decode(&blob)?;
        if stored.is_empty() {
            return Ok(Status::NotFound);
        }

        match fields {
            Some(wanted) => {
                // A single missing requested field fails the whole read.
                if wanted.iter().any(|field| !stored.contains_key(field)) {
                    return Ok(Status::NotFound);
                }
                for field in wanted {
                    if let Some(value) = stored.remove(field) {
                        result.insert(field.clone(), value);
                    }
                }
            }
            None => result.extend(stored),
        }

        Ok(Status::Ok)
    }

    fn try_write(&self, table: &str, key: &str, values: &Record) -> Result<Status> {
        let blob = record::encode(values)?;
        self.store
            .store(&record_key(table, key), &blob, RECORD_TTL_SECS)?;
        Ok(Status::Ok)
    }

    fn try_delete(&self, table: &str, key: &str) -> Result<Status> {
        // Whether or not the key existed, a completed delete is Ok.
        self.store.remove(&record_key(table, key))?;
        Ok(Status::Ok)
    }
}

impl RecordAdapter<MemcachedStore> {
    /// Connects to the memcached cluster described by `config` and wraps
    /// it in an adapter. Fails if the connection pool cannot be
    /// established.
    pub fn connect(config: &Config) -> Result<Self> {
        Ok(Self::new(MemcachedStore::connect(config)?))
    }
}

/// Collapses an internal result into the harness-facing status, logging
/// the error it swallows.
fn collapse(op: &str, result: Result<Status>) -> Status {
    match result {
        Ok(status) => status,
        Err(err) => {
            warn!("{} failed: {}", op, err);
            Status::Error
        }
    }
}
