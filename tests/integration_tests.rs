//! Integration tests for the serbench harness

use serbench::codec::{FlatBuffersCodec, JsonCodec};
use serbench::harness::{run_format, run_suite_on, HeapGauge};
use serbench::prelude::*;
use std::time::Duration;

/// Gauge for runs that do not care about memory readings
struct FlatGauge;

impl HeapGauge for FlatGauge {
    fn reclaim(&self) {}

    fn allocated_bytes(&self) -> u64 {
        0
    }
}

fn fixed_records() -> Dataset {
    let ages = [25, 31, 47, 52, 68];
    let balances = [1500.25, 2999.99, 4500.0, 7250.5, 9999.0];
    (0..5)
        .map(|i| Record {
            id: format!("user_{}", i),
            name: format!("User Name {}", i),
            email: format!("user{}@example.com", i),
            age: ages[i],
            active: i % 2 == 0,
            roles: vec!["user".to_string(), "admin".to_string(), "moderator".to_string()],
            balance: balances[i],
        })
        .collect::<Vec<_>>()
        .into()
}

#[test]
fn test_library_version() {
    assert!(!serbench::VERSION.is_empty());
    assert_eq!(serbench::CRATE_NAME, "serbench");
}

#[test]
fn test_end_to_end_fixed_records() {
    let dataset = fixed_records();
    let registry = CodecRegistry::with_default_codecs();
    let config = BenchConfig {
        dataset_size: dataset.len(),
        throughput_iterations: 3,
        cpu_iterations: 3,
        ..Default::default()
    };

    let report = run_suite_on(&config, &registry, &dataset, &FlatGauge).expect("suite failed");

    assert_eq!(report.warmup.failures, 0);
    assert_eq!(report.results.len(), 4);
    for result in &report.results {
        assert_eq!(result.round_trips, 5, "{} dropped records", result.format);
        assert!(result.avg_data_size > 0.0, "{} reported no bytes", result.format);
        assert!(result.avg_serialize_time >= Duration::ZERO);
        assert!(result.throughput > 0.0);
    }
    for reading in &report.throughput {
        assert_eq!(reading.operations, 3 * 5);
    }

    let dump = render(&report.results).expect("render failed");
    for name in ["JSON", "XML", "Protobuf", "FlatBuffers"] {
        assert!(dump.contains(&format!("\"Format\": \"{}\"", name)));
    }
}

#[test]
fn test_generation_is_repeatable() {
    let first = Dataset::generate(1000, 42);
    let second = Dataset::generate(1000, 42);
    assert_eq!(first, second);
    assert_eq!(first.records()[999].id, "user_999");
}

#[test]
fn test_round_trip_every_codec() {
    let dataset = Dataset::generate(100, 42);
    let registry = CodecRegistry::with_default_codecs();
    for (name, codec) in registry.iter() {
        for record in &dataset {
            let bytes = codec.encode(record).expect("encode failed");
            assert_eq!(&codec.decode(&bytes).expect("decode failed"), record, "{}", name);
        }
    }
}

#[test]
fn test_flatbuffers_role_order() {
    let mut record = Dataset::generate(1, 42).records()[0].clone();
    record.roles = vec!["admin".to_string(), "user".to_string(), "moderator".to_string()];
    let bytes = FlatBuffersCodec.encode(&record).expect("encode failed");
    let decoded = FlatBuffersCodec.decode(&bytes).expect("decode failed");
    assert_eq!(decoded.roles, record.roles);
}

/// Wraps JSON but refuses one record id
struct RefusingCodec {
    refused: &'static str,
}

impl Codec for RefusingCodec {
    fn encode(&self, record: &Record) -> serbench::error::EncodeResult<Vec<u8>> {
        if record.id == self.refused {
            return Err(EncodeError::Failed {
                format: "Refusing",
                reason: "injected failure".to_string(),
            });
        }
        JsonCodec.encode(record)
    }

    fn decode(&self, bytes: &[u8]) -> serbench::error::DecodeResult<Record> {
        JsonCodec.decode(bytes)
    }
}

#[test]
fn test_failed_record_counts_in_divisor() {
    let dataset = fixed_records();
    let refusing = run_format("Refusing", &RefusingCodec { refused: "user_3" }, &dataset);
    let plain = run_format("JSON", &JsonCodec, &dataset);

    let refused_len = JsonCodec.encode(&dataset.records()[3]).unwrap().len() as f64;
    let total_plain = plain.avg_data_size * 5.0;

    assert_eq!(refusing.round_trips, 4);
    assert!((refusing.avg_data_size - (total_plain - refused_len) / 5.0).abs() < 1e-9);
}

#[test]
fn test_error_types() {
    let err = Error::from(EncodeError::Failed {
        format: "JSON",
        reason: "test error".to_string(),
    });
    assert!(err.to_string().contains("Encode error"));
}
