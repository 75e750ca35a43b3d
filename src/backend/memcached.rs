//! Memcached Backend
//!
//! `BlobStore` implementation over the `memcache` client library. All
//! connection pooling, request multiplexing, and timeout handling is the
//! library's; this wrapper only shapes calls and errors.

use std::fmt;

use tracing::{debug, info};

use crate::backend::BlobStore;
use crate::config::Config;
use crate::error::{AdapterError, Result};

// == Memcached Store ==
/// Blob store backed by a pool of persistent memcached connections.
pub struct MemcachedStore {
    client: memcache::Client,
}

impl MemcachedStore {
    /// Establishes the connection pool described by `config`.
    ///
    /// One connection is opened per endpoint URL, and the URL list is
    /// replicated round-robin across servers (see `Config::endpoints`).
    /// A version round-trip to the cluster verifies the pool before the
    /// store is handed out; failure here is an initialization error.
    pub fn connect(config: &Config) -> Result<Self> {
        config.validate()?;

        let endpoints = config.endpoints();
        debug!("opening {} connections: {:?}", endpoints.len(), endpoints);

        let client = memcache::Client::connect(endpoints).map_err(AdapterError::Connect)?;
        client.version().map_err(AdapterError::Connect)?;

        info!(
            "connected to {} memcached server(s) on port {}",
            config.servers.len(),
            config.port
        );
        Ok(Self { client })
    }
}

impl BlobStore for MemcachedStore {
    fn fetch(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.client.get::<Vec<u8>>(key)?)
    }

    fn store(&self, key: &str, blob: &[u8], ttl_secs: u32) -> Result<()> {
        Ok(self.client.set(key, blob, ttl_secs)?)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.client.delete(key)?)
    }
}

// memcache::Client has no Debug impl of its own.
impl fmt::Debug for MemcachedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemcachedStore")
            .field("client", &"<memcache::Client>")
            .finish()
    }
}
