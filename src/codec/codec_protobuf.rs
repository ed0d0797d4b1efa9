//! Protobuf adapter over `prost`
//!
//! [`UserProto`] mirrors `schemas/user.proto`; the message is declared with
//! the `prost` derive rather than generated at build time.

use super::{constants, Codec};
use crate::error::{DecodeError, DecodeResult, EncodeResult};
use crate::fixture::Record;
use prost::Message;

/// Schema-driven binary format backed by `prost`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufCodec;

/// Wire message for `User` in `schemas/user.proto`
#[derive(Clone, PartialEq, Message)]
pub struct UserProto {
    /// Field 1
    #[prost(string, tag = "1")]
    pub id: String,
    /// Field 2
    #[prost(string, tag = "2")]
    pub name: String,
    /// Field 3
    #[prost(string, tag = "3")]
    pub email: String,
    /// Field 4
    #[prost(int32, tag = "4")]
    pub age: i32,
    /// Field 5
    #[prost(bool, tag = "5")]
    pub active: bool,
    /// Field 6
    #[prost(string, repeated, tag = "6")]
    pub roles: Vec<String>,
    /// Field 7
    #[prost(double, tag = "7")]
    pub balance: f64,
}

impl From<&Record> for UserProto {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            age: record.age,
            active: record.active,
            roles: record.roles.clone(),
            balance: record.balance,
        }
    }
}

impl From<UserProto> for Record {
    fn from(user: UserProto) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            active: user.active,
            roles: user.roles,
            balance: user.balance,
        }
    }
}

impl Codec for ProtobufCodec {
    fn encode(&self, record: &Record) -> EncodeResult<Vec<u8>> {
        Ok(UserProto::from(record).encode_to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> DecodeResult<Record> {
        UserProto::decode(bytes)
            .map(Record::from)
            .map_err(|e| DecodeError::Malformed {
                format: constants::PROTOBUF,
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Dataset;

    #[test]
    fn test_first_field_tag() {
        let dataset = Dataset::generate(1, 42);
        let bytes = ProtobufCodec.encode(&dataset.records()[0]).unwrap();
        // field 1, length-delimited, then "user_0"
        assert_eq!(bytes[0], 0x0a);
        assert_eq!(bytes[1], 6);
        assert_eq!(&bytes[2..8], b"user_0");
    }

    #[test]
    fn test_truncated_payload() {
        let dataset = Dataset::generate(1, 42);
        let bytes = ProtobufCodec.encode(&dataset.records()[0]).unwrap();
        let err = ProtobufCodec.decode(&bytes[..5]).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { format: "Protobuf", .. }));
    }

    #[test]
    fn test_smaller_than_json() {
        use crate::codec::JsonCodec;

        let dataset = Dataset::generate(1, 42);
        let record = &dataset.records()[0];
        let proto = ProtobufCodec.encode(record).unwrap();
        let json = JsonCodec.encode(record).unwrap();
        assert!(proto.len() < json.len());
    }
}
