//! Codec adapters for the formats under test
//!
//! Each adapter wraps a third-party serialization crate behind the [`Codec`]
//! trait so the harness can treat every format the same way:
//!
//! - **JSON** via `serde_json`
//! - **XML** via `quick-xml`
//! - **Protobuf** via `prost`
//! - **FlatBuffers** via `flatbuffers`
//!
//! # Example
//!
//! ```rust
//! use serbench::codec::{Codec, JsonCodec};
//! use serbench::fixture::Dataset;
//!
//! let dataset = Dataset::generate(1, 42);
//! let record = &dataset.records()[0];
//! let bytes = JsonCodec.encode(record)?;
//! assert_eq!(&JsonCodec.decode(&bytes)?, record);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec_flatbuffers;
pub mod codec_json;
pub mod codec_protobuf;
pub mod codec_registry;
pub mod codec_xml;
pub mod user_generated;

pub use codec_flatbuffers::FlatBuffersCodec;
pub use codec_json::JsonCodec;
pub use codec_protobuf::ProtobufCodec;
pub use codec_registry::CodecRegistry;
pub use codec_xml::XmlCodec;

use crate::error::{DecodeResult, EncodeResult};
use crate::fixture::Record;
use std::time::{Duration, Instant};

/// Stable format names used as registry keys and in reports
pub mod constants {
    //! Format names

    /// Tagged text format
    pub const JSON: &str = "JSON";

    /// Markup text format
    pub const XML: &str = "XML";

    /// Schema-driven binary format
    pub const PROTOBUF: &str = "Protobuf";

    /// Zero-copy binary format
    pub const FLATBUFFERS: &str = "FlatBuffers";
}

/// Uniform encode/decode contract implemented by every format adapter
pub trait Codec {
    /// Encode a record into an owned byte buffer
    fn encode(&self, record: &Record) -> EncodeResult<Vec<u8>>;

    /// Decode a record from bytes produced by [`Codec::encode`]
    fn decode(&self, bytes: &[u8]) -> DecodeResult<Record>;

    /// Average wall time of encoding `record` `iterations` times.
    ///
    /// Each call is timed on its own and failures still count as an
    /// iteration. Returns zero when `iterations` is zero.
    fn measure_encode_time(&self, record: &Record, iterations: u32) -> Duration {
        if iterations == 0 {
            return Duration::ZERO;
        }

        let mut total = Duration::ZERO;
        for _ in 0..iterations {
            let start = Instant::now();
            let _ = std::hint::black_box(self.encode(record));
            total += start.elapsed();
        }
        total / iterations
    }

    /// Average wall time of decoding `bytes` `iterations` times
    fn measure_decode_time(&self, bytes: &[u8], iterations: u32) -> Duration {
        if iterations == 0 {
            return Duration::ZERO;
        }

        let mut total = Duration::ZERO;
        for _ in 0..iterations {
            let start = Instant::now();
            let _ = std::hint::black_box(self.decode(bytes));
            total += start.elapsed();
        }
        total / iterations
    }
}
