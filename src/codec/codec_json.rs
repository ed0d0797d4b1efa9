//! JSON adapter over `serde_json`

use super::{constants, Codec};
use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use crate::fixture::Record;

/// Tagged text format backed by `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, record: &Record) -> EncodeResult<Vec<u8>> {
        // serde_json writes non-finite floats as `null`, which would not decode
        if !record.balance.is_finite() {
            return Err(EncodeError::Unrepresentable {
                format: constants::JSON,
                field: "balance",
                reason: format!("{} has no JSON literal", record.balance),
            });
        }

        serde_json::to_vec(record).map_err(|e| EncodeError::Failed {
            format: constants::JSON,
            reason: e.to_string(),
        })
    }

    fn decode(&self, bytes: &[u8]) -> DecodeResult<Record> {
        serde_json::from_slice(bytes).map_err(|e| DecodeError::Malformed {
            format: constants::JSON,
            reason: e.to_string(),
        })
    }
}
