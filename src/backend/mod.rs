//! Backend Module
//!
//! The blob store seam between the adapter and whatever actually holds the
//! data. The adapter owns a `BlobStore` passed in at construction, so the
//! real cluster client and in-process test doubles are interchangeable.

mod memcached;
mod memory;

// Re-export public types
pub use memcached::MemcachedStore;
pub use memory::MemoryStore;

use crate::error::Result;

// == Blob Store Trait ==
/// A key-addressed store of opaque blobs with per-write expiration.
///
/// Implementations decide how blobs are kept; the adapter only composes
/// keys and encodes records. A TTL of 0 means the entry never expires,
/// following memcached convention.
pub trait BlobStore {
    /// Fetches the blob stored under `key`, if any.
    fn fetch(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `blob` under `key` with the given expiration, overwriting
    /// any prior value.
    fn store(&self, key: &str, blob: &[u8], ttl_secs: u32) -> Result<()>;

    /// Removes the blob under `key`. Returns whether the key existed.
    fn remove(&self, key: &str) -> Result<bool>;
}
