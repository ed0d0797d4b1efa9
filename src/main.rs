//! Runs the full serialization benchmark suite with the default configuration.
//!
//! Progress and per-record errors go to stderr through `tracing` (`RUST_LOG`
//! controls the filter); the report goes to stdout.

use serbench::codec::CodecRegistry;
use serbench::config::BenchConfig;
use serbench::harness::{self, AllocatorGauge, CountingAllocator};
use serbench::report;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL_ALLOCATOR: CountingAllocator = CountingAllocator;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BenchConfig::default();
    let mut stdout = std::io::stdout().lock();
    report::write_banner(&mut stdout, &config)?;

    let gauge = AllocatorGauge;
    if !gauge.is_tracking() {
        tracing::warn!("counting allocator is not installed; memory readings will be zero");
    }

    let registry = CodecRegistry::with_default_codecs();
    let suite = harness::run_suite(&config, &registry, &gauge)?;
    report::write_console(&mut stdout, &suite)?;

    let rendered = match report::render(&suite.results) {
        Ok(rendered) => rendered,
        Err(err) => {
            tracing::error!(error = %err, "Error saving results");
            return Err(err.into());
        }
    };
    report::write_dump(&mut stdout, &rendered)?;

    Ok(())
}
