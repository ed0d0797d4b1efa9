//! Result aggregation and console reporting
//!
//! [`render`] produces the structured dump of the per-format results;
//! [`write_console`] writes the human-readable sections printed while a run
//! is summarized.

use crate::config::BenchConfig;
use crate::error::{AggregationError, Result as HarnessResult};
use crate::harness::{CpuReading, MemoryReading, SuiteReport, ThroughputReading};
use serde::{Serialize, Serializer};
use std::io::{self, Write};
use std::time::Duration;

/// Per-format benchmark outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BenchmarkResult {
    /// Format name
    pub format: String,
    /// Average encode time per record
    #[serde(serialize_with = "serialize_nanos")]
    pub avg_serialize_time: Duration,
    /// Average decode time per record
    #[serde(serialize_with = "serialize_nanos")]
    pub avg_deserialize_time: Duration,
    /// Average encoded size in bytes
    pub avg_data_size: f64,
    /// Heap bytes held by the encoded dataset, 0 if not measured
    pub memory_usage: u64,
    /// Encode operations per second, 0 if not measured
    pub throughput: f64,
    /// Records that completed a full round trip
    #[serde(skip)]
    pub round_trips: usize,
}

impl BenchmarkResult {
    /// Copy in the memory and throughput readings recorded for this format
    pub fn with_probe_readings(
        mut self,
        memory: &[MemoryReading],
        throughput: &[ThroughputReading],
    ) -> Self {
        if let Some(reading) = memory.iter().find(|r| r.format == self.format) {
            self.memory_usage = reading.bytes;
        }
        if let Some(reading) = throughput.iter().find(|r| r.format == self.format) {
            self.throughput = reading.ops_per_sec;
        }
        self
    }
}

fn serialize_nanos<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
}

/// Render the result list as indented JSON
pub fn render(results: &[BenchmarkResult]) -> Result<String, AggregationError> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Write the run banner
pub fn write_banner<W: Write>(out: &mut W, config: &BenchConfig) -> HarnessResult<()> {
    writeln!(out, "Starting Rust Serialization Benchmark...")?;
    writeln!(out, "Warmup iterations: {}", config.warmup_iterations)?;
    writeln!(out, "Measurement iterations: {}", config.measurement_iterations)?;
    writeln!(out, "Data size: {} objects", config.dataset_size)?;
    writeln!(out)?;
    Ok(())
}

/// Write one format's timed round-trip section
pub fn write_format_result<W: Write>(out: &mut W, result: &BenchmarkResult) -> io::Result<()> {
    writeln!(out, "\n=== {} Benchmark ===", result.format)?;
    writeln!(out, "Avg Serialization Time: {:?}", result.avg_serialize_time)?;
    writeln!(out, "Avg Deserialization Time: {:?}", result.avg_deserialize_time)?;
    writeln!(out, "Avg Data Size: {:.2} bytes", result.avg_data_size)
}

/// Write the memory probe section
pub fn write_memory<W: Write>(out: &mut W, readings: &[MemoryReading]) -> io::Result<()> {
    writeln!(out, "\n=== Memory Usage Comparison ===")?;
    for reading in readings {
        writeln!(out, "{} Memory Used: {} bytes", reading.format, reading.bytes)?;
    }
    Ok(())
}

/// Write the throughput probe section
pub fn write_throughput<W: Write>(out: &mut W, readings: &[ThroughputReading]) -> io::Result<()> {
    writeln!(out, "\n=== Throughput Test ===")?;
    for reading in readings {
        writeln!(out, "{} Throughput: {:.2} ops/sec", reading.format, reading.ops_per_sec)?;
    }
    Ok(())
}

/// Write the CPU-load probe section
pub fn write_cpu<W: Write>(out: &mut W, readings: &[CpuReading]) -> io::Result<()> {
    writeln!(out, "\n=== CPU Utilization Test ===")?;
    for reading in readings {
        writeln!(out, "{} CPU Time: {:?}", reading.format, reading.elapsed)?;
    }
    Ok(())
}

/// Write every console section of a finished run, banner excluded
pub fn write_console<W: Write>(out: &mut W, report: &SuiteReport) -> HarnessResult<()> {
    for result in &report.results {
        write_format_result(out, result)?;
    }
    write_memory(out, &report.memory)?;
    write_throughput(out, &report.throughput)?;
    write_cpu(out, &report.cpu)?;
    Ok(())
}

/// Write the final structured dump
pub fn write_dump<W: Write>(out: &mut W, rendered: &str) -> HarnessResult<()> {
    writeln!(out, "\n=== Results Saved ===\n{}", rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> BenchmarkResult {
        BenchmarkResult {
            format: "JSON".to_string(),
            avg_serialize_time: Duration::from_nanos(1_500),
            avg_deserialize_time: Duration::from_nanos(2_250),
            avg_data_size: 151.5,
            memory_usage: 0,
            throughput: 0.0,
            round_trips: 5,
        }
    }

    #[test]
    fn test_render_schema() {
        let rendered = render(&[sample_result()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let entry = &value[0];
        assert_eq!(entry["Format"], "JSON");
        assert_eq!(entry["AvgSerializeTime"], 1_500);
        assert_eq!(entry["AvgDeserializeTime"], 2_250);
        assert_eq!(entry["AvgDataSize"], 151.5);
        assert_eq!(entry["MemoryUsage"], 0);
        assert_eq!(entry["Throughput"], 0.0);
        assert!(entry.get("RoundTrips").is_none());
        assert!(rendered.contains("\n  {"), "dump is indented");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_with_probe_readings() {
        let memory = vec![
            MemoryReading {
                format: "XML".to_string(),
                bytes: 9,
            },
            MemoryReading {
                format: "JSON".to_string(),
                bytes: 4_096,
            },
        ];
        let throughput = vec![ThroughputReading {
            format: "JSON".to_string(),
            operations: 100,
            elapsed: Duration::from_millis(10),
            ops_per_sec: 10_000.0,
        }];
        let result = sample_result().with_probe_readings(&memory, &throughput);
        assert_eq!(result.memory_usage, 4_096);
        assert_eq!(result.throughput, 10_000.0);

        let untouched = sample_result().with_probe_readings(&[], &[]);
        assert_eq!(untouched, sample_result());
    }

    #[test]
    fn test_console_sections() {
        let mut out = Vec::new();
        write_banner(&mut out, &BenchConfig::default()).unwrap();
        write_format_result(&mut out, &sample_result()).unwrap();
        write_memory(&mut out, &[]).unwrap();
        write_dump(&mut out, "[]").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Data size: 1000 objects"));
        assert!(text.contains("=== JSON Benchmark ==="));
        assert!(text.contains("Avg Serialization Time: 1.5µs"));
        assert!(text.contains("Avg Data Size: 151.50 bytes"));
        assert!(text.contains("=== Memory Usage Comparison ==="));
        assert!(text.contains("=== Results Saved ===\n[]"));
    }

    /// Sink that refuses every write
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let err = write_dump(&mut ClosedPipe, "[]").unwrap_err();
        assert!(matches!(err, crate::Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(err.to_string().starts_with("I/O error"));

        let err = write_banner(&mut ClosedPipe, &BenchConfig::default()).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
