//! Warmup and the timed per-format round-trip pass

use crate::codec::{Codec, CodecRegistry};
use crate::config::BenchConfig;
use crate::fixture::Dataset;
use crate::report::BenchmarkResult;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Outcome of the warmup phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarmupStats {
    /// Outer passes over the warmup subset
    pub passes: usize,
    /// Encode attempts across every codec
    pub attempts: usize,
    /// Attempts whose encode or decode failed
    pub failures: usize,
}

/// Exercise every codec on the leading records before anything is timed.
///
/// Runs `config.warmup_passes()` passes over the first `config.warmup_subset`
/// records, encoding and decoding with each codec. Results are discarded and
/// failures only logged.
pub fn warmup(config: &BenchConfig, registry: &CodecRegistry, dataset: &Dataset) -> WarmupStats {
    let subset = dataset.head(config.warmup_subset);
    let mut stats = WarmupStats {
        passes: config.warmup_passes(),
        ..Default::default()
    };

    for _ in 0..stats.passes {
        for record in subset {
            for (name, codec) in registry.iter() {
                stats.attempts += 1;
                let outcome = codec
                    .encode(record)
                    .map_err(|err| err.to_string())
                    .and_then(|bytes| codec.decode(&bytes).map_err(|err| err.to_string()));
                if let Err(error) = outcome {
                    stats.failures += 1;
                    debug!(format = name, record = %record.id, %error, "warmup round trip skipped");
                }
            }
        }
    }

    stats
}

/// Round-trip every record once with `codec` and average the timings.
///
/// A record whose encode fails is skipped without attempting decode; a record
/// whose decode fails is skipped and its encode time discarded. Totals are
/// divided by the dataset length, not by the number of successful round
/// trips, so failing formats report averages pulled toward zero.
pub fn run_format(name: &str, codec: &dyn Codec, dataset: &Dataset) -> BenchmarkResult {
    let mut total_encode = Duration::ZERO;
    let mut total_decode = Duration::ZERO;
    let mut total_bytes = 0usize;
    let mut round_trips = 0usize;

    for record in dataset {
        let started = Instant::now();
        let encoded = codec.encode(record);
        let encode_time = started.elapsed();

        let bytes = match encoded {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!(format = name, record = %record.id, %error, "Serialization error");
                continue;
            }
        };

        let started = Instant::now();
        let decoded = codec.decode(&bytes);
        let decode_time = started.elapsed();

        if let Err(error) = decoded {
            warn!(format = name, record = %record.id, %error, "Deserialization error");
            continue;
        }

        total_encode += encode_time;
        total_decode += decode_time;
        total_bytes += bytes.len();
        round_trips += 1;
    }

    let count = dataset.len();
    BenchmarkResult {
        format: name.to_string(),
        avg_serialize_time: average(total_encode, count),
        avg_deserialize_time: average(total_decode, count),
        avg_data_size: if count == 0 {
            0.0
        } else {
            total_bytes as f64 / count as f64
        },
        memory_usage: 0,
        throughput: 0.0,
        round_trips,
    }
}

/// `total / count` truncated to whole nanoseconds; zero for an empty count
pub fn average(total: Duration, count: usize) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / count as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}
