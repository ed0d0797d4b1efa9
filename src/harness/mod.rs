//! Benchmark harness
//!
//! Drives one run of the suite:
//!
//! 1. generate the dataset from [`BenchConfig`]
//! 2. [`warmup`] every codec
//! 3. [`run_format`] for each codec (timed round trips)
//! 4. [`measure_memory`], [`measure_throughput`], [`measure_cpu_load`]
//! 5. merge probe readings into the per-format results
//!
//! Everything runs on the calling thread, one phase after another. Each phase
//! returns its readings by value; nothing is accumulated in shared state.

pub mod harness_probes;
pub mod harness_runner;
pub mod heap_gauge;

pub use harness_probes::{
    heap_delta, measure_cpu_load, measure_memory, measure_throughput, operation_count,
    ops_per_second, CpuReading, MemoryReading, ThroughputReading,
};
pub use harness_runner::{average, run_format, warmup, WarmupStats};
pub use heap_gauge::{AllocatorGauge, CountingAllocator, HeapGauge};

use crate::codec::CodecRegistry;
use crate::config::BenchConfig;
use crate::error::Result;
use crate::fixture::Dataset;
use crate::report::BenchmarkResult;
use tracing::info;

/// Everything measured during one run
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// Configuration the run used
    pub config: BenchConfig,
    /// Number of records benchmarked
    pub records: usize,
    /// Warmup phase outcome
    pub warmup: WarmupStats,
    /// One result per format, with memory and throughput merged in
    pub results: Vec<BenchmarkResult>,
    /// Memory probe readings
    pub memory: Vec<MemoryReading>,
    /// Throughput probe readings
    pub throughput: Vec<ThroughputReading>,
    /// CPU-load probe readings
    pub cpu: Vec<CpuReading>,
}

/// Generate the dataset described by `config` and run the whole suite on it
pub fn run_suite(
    config: &BenchConfig,
    registry: &CodecRegistry,
    gauge: &dyn HeapGauge,
) -> Result<SuiteReport> {
    config.validate()?;
    let dataset = Dataset::generate(config.dataset_size, config.seed);
    info!(records = dataset.len(), seed = config.seed, "generated test data");
    run_suite_on(config, registry, &dataset, gauge)
}

/// Run the whole suite on an existing dataset
pub fn run_suite_on(
    config: &BenchConfig,
    registry: &CodecRegistry,
    dataset: &Dataset,
    gauge: &dyn HeapGauge,
) -> Result<SuiteReport> {
    config.validate()?;

    info!(passes = config.warmup_passes(), "performing warmup");
    let warmup = warmup(config, registry, dataset);

    let timed: Vec<BenchmarkResult> = registry
        .iter()
        .map(|(name, codec)| {
            info!(format = name, "benchmarking format");
            run_format(name, codec, dataset)
        })
        .collect();

    let memory = measure_memory(registry, dataset, gauge);
    let throughput = measure_throughput(config, registry, dataset);
    let cpu = measure_cpu_load(config, registry, dataset);

    let results = timed
        .into_iter()
        .map(|result| result.with_probe_readings(&memory, &throughput))
        .collect();

    Ok(SuiteReport {
        config: config.clone(),
        records: dataset.len(),
        warmup,
        results,
        memory,
        throughput,
        cpu,
    })
}
