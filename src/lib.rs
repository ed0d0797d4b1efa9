//! # serbench
//!
//! A benchmark harness comparing serialization formats on a single, fixed user
//! record: encode/decode latency, encoded size, heap usage and throughput.
//!
//! ## Modules
//!
//! - **Fixture**: the [`fixture::Record`] shape and deterministic dataset generation
//! - **Codec**: JSON, XML, Protobuf and FlatBuffers adapters behind one trait
//! - **Harness**: warmup, timed round trips, memory, throughput and CPU-load probes
//! - **Report**: console sections and the structured result dump
//!
//! ## Example
//!
//! ```rust
//! use serbench::prelude::*;
//!
//! let config = BenchConfig {
//!     dataset_size: 20,
//!     throughput_iterations: 2,
//!     cpu_iterations: 2,
//!     ..Default::default()
//! };
//! let registry = CodecRegistry::with_default_codecs();
//! let report = run_suite(&config, &registry, &AllocatorGauge)?;
//! let dump = render(&report.results)?;
//! assert!(dump.contains("FlatBuffers"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core error types
pub use error::{Error, Result};

// Core modules
pub mod codec;
pub mod config;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod report;

// Re-export commonly used types
pub mod prelude {
    //! Common types and traits for convenient importing

    pub use crate::codec::{Codec, CodecRegistry};
    pub use crate::config::BenchConfig;
    pub use crate::error::{AggregationError, DecodeError, EncodeError, Error, Result};
    pub use crate::fixture::{Dataset, Record};
    pub use crate::harness::{run_suite, AllocatorGauge, HeapGauge, SuiteReport};
    pub use crate::report::{render, BenchmarkResult};
}

// Version information
/// The version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(CRATE_NAME, "serbench");
    }
}
