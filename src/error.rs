//! Error types for the adapter
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Adapter Error Enum ==
/// Unified error type for the adapter and its backends.
///
/// These errors stay internal to the crate: the benchmark-facing surface
/// collapses every variant to `Status::Error` after logging it.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Missing or unparseable configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The connection pool could not be established at startup
    #[error("failed to connect to memcached cluster: {0}")]
    Connect(#[source] memcache::MemcacheError),

    /// A request to the cluster failed after initialization
    #[error("memcached request failed: {0}")]
    Client(#[from] memcache::MemcacheError),

    /// A record could not be serialized into its blob form
    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),

    /// A stored blob could not be deserialized back into a record
    #[error("failed to decode record blob: {0}")]
    Decode(#[source] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the adapter.
pub type Result<T> = std::result::Result<T, AdapterError>;
