//! Memory, throughput and CPU-load probes
//!
//! The probes only encode. Per-call errors are ignored: these measure cost
//! under load, correctness is covered by the timed round-trip pass.

use super::heap_gauge::HeapGauge;
use crate::codec::CodecRegistry;
use crate::config::BenchConfig;
use crate::fixture::Dataset;
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::info;

/// Heap growth attributed to batch-encoding the dataset with one codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryReading {
    /// Format name
    pub format: String,
    /// Bytes still allocated after encoding, never negative
    pub bytes: u64,
}

/// Encode rate of one codec over repeated passes of a fixed subset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThroughputReading {
    /// Format name
    pub format: String,
    /// Encode calls made, failed ones included
    pub operations: u64,
    /// Wall time for all calls
    pub elapsed: Duration,
    /// `operations / elapsed` in calls per second
    pub ops_per_sec: f64,
}

/// Wall time of one codec under the sustained CPU-load loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuReading {
    /// Format name
    pub format: String,
    /// Encode calls made
    pub operations: u64,
    /// Wall time for all calls
    pub elapsed: Duration,
}

/// Heap delta between two snapshots, clamped at zero
pub fn heap_delta(before: u64, after: u64) -> u64 {
    after.saturating_sub(before)
}

/// Operations per second, zero when no time elapsed
pub fn ops_per_second(operations: u64, elapsed: Duration) -> f64 {
    let seconds = elapsed.as_secs_f64();
    if seconds > 0.0 {
        operations as f64 / seconds
    } else {
        0.0
    }
}

/// Measure heap growth from batch-encoding the whole dataset, per codec.
///
/// Protocol per codec: reclaim, snapshot, encode every record into a list of
/// buffers, reclaim, snapshot, then release the batch and reclaim once more so
/// the next codec starts clean.
pub fn measure_memory(
    registry: &CodecRegistry,
    dataset: &Dataset,
    gauge: &dyn HeapGauge,
) -> Vec<MemoryReading> {
    info!(formats = registry.len(), records = dataset.len(), "measuring memory usage");

    registry
        .iter()
        .map(|(name, codec)| {
            gauge.reclaim();
            let before = gauge.allocated_bytes();

            let batch: Vec<Vec<u8>> = dataset
                .iter()
                .map(|record| codec.encode(record).unwrap_or_default())
                .collect();

            gauge.reclaim();
            let after = gauge.allocated_bytes();

            drop(black_box(batch));
            gauge.reclaim();

            MemoryReading {
                format: name.to_string(),
                bytes: heap_delta(before, after),
            }
        })
        .collect()
}

/// Encode calls made by `iterations` passes over `subset_len` records,
/// saturating at `u64::MAX`
pub fn operation_count(iterations: usize, subset_len: usize) -> u64 {
    (iterations as u64).saturating_mul(subset_len as u64)
}

/// Measure encode throughput over `throughput_iterations` passes of the first
/// `throughput_subset` records
pub fn measure_throughput(
    config: &BenchConfig,
    registry: &CodecRegistry,
    dataset: &Dataset,
) -> Vec<ThroughputReading> {
    let subset = dataset.head(config.throughput_subset);
    let operations = operation_count(config.throughput_iterations, subset.len());
    info!(operations, "measuring throughput");

    registry
        .iter()
        .map(|(name, codec)| {
            let started = Instant::now();
            for _ in 0..config.throughput_iterations {
                for record in subset {
                    let _ = black_box(codec.encode(record));
                }
            }
            let elapsed = started.elapsed();

            ThroughputReading {
                format: name.to_string(),
                operations,
                elapsed,
                ops_per_sec: ops_per_second(operations, elapsed),
            }
        })
        .collect()
}

/// Keep each codec busy for `cpu_iterations` passes of the first `cpu_subset`
/// records and report the wall time
pub fn measure_cpu_load(
    config: &BenchConfig,
    registry: &CodecRegistry,
    dataset: &Dataset,
) -> Vec<CpuReading> {
    let subset = dataset.head(config.cpu_subset);
    let operations = operation_count(config.cpu_iterations, subset.len());
    info!(operations, "running CPU load test");

    registry
        .iter()
        .map(|(name, codec)| {
            let started = Instant::now();
            for _ in 0..config.cpu_iterations {
                for record in subset {
                    let _ = black_box(codec.encode(record));
                }
            }

            CpuReading {
                format: name.to_string(),
                operations,
                elapsed: started.elapsed(),
            }
        })
        .collect()
}
