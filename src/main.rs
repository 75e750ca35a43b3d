//! Membench - A memcached record adapter for key-value benchmark workloads
//!
//! The binary runs a smoke workload against a live cluster: insert a batch
//! of synthetic records, read them back, overwrite them, delete them, and
//! report outcome counts and throughput.

use std::env;
use std::time::Instant;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use membench::{Config, OpStats, Record, RecordAdapter};

/// Table name used for all smoke-workload records.
const SMOKE_TABLE: &str = "bench";

/// Fields per synthetic record.
const SMOKE_FIELDS: usize = 10;

/// Bytes per synthetic field value.
const SMOKE_FIELD_LEN: usize = 100;

/// Builds the synthetic record for one key. The generation pass is mixed
/// into the bytes so overwrites are observable.
fn synthetic_record(index: usize, pass: u8) -> Record {
    (0..SMOKE_FIELDS)
        .map(|field| {
            let byte = (index + field) as u8 ^ pass;
            (format!("field{}", field), vec![byte; SMOKE_FIELD_LEN])
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "membench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting membench smoke workload");

    // Load configuration from environment variables
    let config = Config::from_env().context("loading configuration")?;
    info!(
        "Configuration loaded: servers={:?}, port={}, conns_per_server={}, worker_threads={}",
        config.servers, config.port, config.conns_per_server, config.worker_threads
    );

    let records: usize = env::var("MEMBENCH_RECORDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000);

    // Connect the adapter to the cluster
    let db = RecordAdapter::connect(&config).context("connecting to memcached")?;
    info!("Adapter connected, running {} records per phase", records);

    let mut stats = OpStats::new();
    let started = Instant::now();

    // Phase 1: insert
    for i in 0..records {
        let key = format!("user{}", i);
        stats.record(db.insert(SMOKE_TABLE, &key, &synthetic_record(i, 0)));
    }

    // Phase 2: read back every record, all fields
    for i in 0..records {
        let key = format!("user{}", i);
        let mut result = Record::new();
        let status = db.read(SMOKE_TABLE, &key, None, &mut result);
        if status.is_ok() && result != synthetic_record(i, 0) {
            warn!("read of {} returned unexpected field values", key);
        }
        stats.record(status);
    }

    // Phase 3: overwrite every record
    for i in 0..records {
        let key = format!("user{}", i);
        stats.record(db.update(SMOKE_TABLE, &key, &synthetic_record(i, 1)));
    }

    // Phase 4: delete every record
    for i in 0..records {
        let key = format!("user{}", i);
        stats.record(db.delete(SMOKE_TABLE, &key));
    }

    let elapsed = started.elapsed();
    let throughput = stats.total() as f64 / elapsed.as_secs_f64();

    info!(
        "Workload complete in {:.2?}: {} ops, {:.0} ops/sec, error rate {:.4}",
        elapsed,
        stats.total(),
        throughput,
        stats.error_rate()
    );
    info!("Outcome counts: {}", serde_json::to_string(&stats)?);

    db.shutdown();
    Ok(())
}
