//! Membench - A memcached record adapter for key-value benchmark workloads
//!
//! Translates a generic table/key/fields interface into memcached
//! get/set/delete calls, storing each multi-field record as one
//! serialized blob.

pub mod adapter;
pub mod backend;
pub mod config;
pub mod error;
pub mod record;
pub mod stats;

pub use adapter::{RecordAdapter, Status, RECORD_TTL_SECS};
pub use backend::{BlobStore, MemcachedStore, MemoryStore};
pub use config::Config;
pub use error::{AdapterError, Result};
pub use record::{record_key, Record};
pub use stats::OpStats;
