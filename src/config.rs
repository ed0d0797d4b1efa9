//! Run parameters for the benchmark suite
//!
//! Every knob the harness reads lives in [`BenchConfig`]. The defaults are the
//! fixed values the suite has always run with; nothing here is exposed as a
//! command line flag.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration constants
pub mod constants {
    //! Default values for [`super::BenchConfig`]

    /// Number of records in the generated dataset
    pub const DATA_SIZE: usize = 1000;

    /// Warmup iteration budget; the harness runs `WARMUP_ITERATIONS / 100` passes
    pub const WARMUP_ITERATIONS: usize = 1000;

    /// Divisor turning the warmup budget into outer passes
    pub const WARMUP_PASS_DIVISOR: usize = 100;

    /// Records exercised per warmup pass
    pub const WARMUP_SUBSET: usize = 10;

    /// Measurement iteration count reported in the banner
    pub const MEASUREMENT_ITERATIONS: usize = 10_000;

    /// Outer iterations of the throughput probe
    pub const THROUGHPUT_ITERATIONS: usize = 10_000;

    /// Records encoded per throughput iteration
    pub const THROUGHPUT_SUBSET: usize = 100;

    /// Outer iterations of the CPU-load probe
    pub const CPU_ITERATIONS: usize = 100_000;

    /// Records encoded per CPU-load iteration
    pub const CPU_SUBSET: usize = 10;

    /// Seed for the record generator
    pub const SEED: u64 = 42;
}

/// Parameters for one benchmark run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Number of records to generate
    pub dataset_size: usize,
    /// Seed for the record generator
    pub seed: u64,
    /// Warmup budget, divided by 100 to get the number of passes
    pub warmup_iterations: usize,
    /// Leading records used during warmup
    pub warmup_subset: usize,
    /// Reported in the banner; the probes carry their own counts
    pub measurement_iterations: usize,
    /// Outer iterations of the throughput probe
    pub throughput_iterations: usize,
    /// Leading records encoded by the throughput probe
    pub throughput_subset: usize,
    /// Outer iterations of the CPU-load probe
    pub cpu_iterations: usize,
    /// Leading records encoded by the CPU-load probe
    pub cpu_subset: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dataset_size: constants::DATA_SIZE,
            seed: constants::SEED,
            warmup_iterations: constants::WARMUP_ITERATIONS,
            warmup_subset: constants::WARMUP_SUBSET,
            measurement_iterations: constants::MEASUREMENT_ITERATIONS,
            throughput_iterations: constants::THROUGHPUT_ITERATIONS,
            throughput_subset: constants::THROUGHPUT_SUBSET,
            cpu_iterations: constants::CPU_ITERATIONS,
            cpu_subset: constants::CPU_SUBSET,
        }
    }
}

impl BenchConfig {
    /// Number of outer warmup passes
    pub fn warmup_passes(&self) -> usize {
        self.warmup_iterations / constants::WARMUP_PASS_DIVISOR
    }

    /// Check that every loop in the suite would actually run
    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("warmup_subset", self.warmup_subset),
            ("throughput_iterations", self.throughput_iterations),
            ("throughput_subset", self.throughput_subset),
            ("cpu_iterations", self.cpu_iterations),
            ("cpu_subset", self.cpu_subset),
        ];

        for (field, value) in counts {
            if value == 0 {
                return Err(Error::Configuration {
                    message: format!("{} must be greater than zero", field),
                });
            }
        }

        if self.warmup_passes() == 0 {
            return Err(Error::Configuration {
                message: format!(
                    "warmup_iterations must be at least {}, got {}",
                    constants::WARMUP_PASS_DIVISOR,
                    self.warmup_iterations
                ),
            });
        }

        Ok(())
    }
}
