//! Configuration Module
//!
//! Handles loading and managing adapter configuration from environment variables.

use std::env;

use crate::error::{AdapterError, Result};

// == Defaults ==
/// Default TCP port for every backend endpoint
pub const DEFAULT_PORT: u16 = 8888;

/// Default number of sockets per worker per server
pub const DEFAULT_CONNS_PER_SERVER: usize = 1;

/// Default worker thread count used for connection replication
pub const DEFAULT_WORKER_THREADS: usize = 4;

/// Adapter configuration parameters.
///
/// The server list is required; all other values can be configured via
/// environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend hostnames, without port
    pub servers: Vec<String>,
    /// TCP port shared by every backend endpoint
    pub port: u16,
    /// Number of sockets per worker per server
    pub conns_per_server: usize,
    /// Worker thread count, used to compute total connection replication
    pub worker_threads: usize,
}

impl Config {
    /// Creates a new Config for the given servers with default settings.
    pub fn new(servers: Vec<String>) -> Self {
        Self {
            servers,
            port: DEFAULT_PORT,
            conns_per_server: DEFAULT_CONNS_PER_SERVER,
            worker_threads: DEFAULT_WORKER_THREADS,
        }
    }

    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMCACHED_SERVERS` - Space-separated backend hostnames (required)
    /// - `MEMCACHED_PORT` - TCP port for every endpoint (default: 8888)
    /// - `MEMCACHED_CONNS_PER_SERVER` - Sockets per worker per server (default: 1)
    /// - `MEMCACHED_WORKER_THREADS` - Worker thread count (default: 4)
    pub fn from_env() -> Result<Self> {
        let servers: Vec<String> = env::var("MEMCACHED_SERVERS")
            .map_err(|_| AdapterError::Config("MEMCACHED_SERVERS is not set".to_string()))?
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let config = Self {
            servers,
            port: env::var("MEMCACHED_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            conns_per_server: env::var("MEMCACHED_CONNS_PER_SERVER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CONNS_PER_SERVER),
            worker_threads: env::var("MEMCACHED_WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_WORKER_THREADS),
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can produce at least one endpoint.
    pub fn validate(&self) -> Result<()> {
        if self.servers.is_empty() {
            return Err(AdapterError::Config(
                "server list must not be empty".to_string(),
            ));
        }
        if self.conns_per_server == 0 {
            return Err(AdapterError::Config(
                "connections per server must be at least 1".to_string(),
            ));
        }
        if self.worker_threads == 0 {
            return Err(AdapterError::Config(
                "worker thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the connection URL list for the client pool.
    ///
    /// The order of the list matters: it must round-robin across servers,
    /// replicated per worker and per connection multiplier --
    /// `[s0, s1, s2, s0, s1, s2, ...]`, never `[s0, s0, s1, s1, ...]` --
    /// so the client library's internal dispatch stays fair across servers.
    pub fn endpoints(&self) -> Vec<String> {
        let mut endpoints =
            Vec::with_capacity(self.servers.len() * self.conns_per_server * self.worker_threads);

        for _ in 0..self.conns_per_server {
            for _ in 0..self.worker_threads {
                for server in &self.servers {
                    endpoints.push(format!("memcache://{}:{}", server, self.port));
                }
            }
        }

        endpoints
    }
}
