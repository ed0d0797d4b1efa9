//! FlatBuffers adapter over the `flatbuffers` builder
//!
//! A FlatBuffer is built back to front: every string and the role vector must
//! be written before the `User` table that points at them. Vector elements are
//! prepended, so role offsets are pushed last-to-first to read back in the
//! original order.

use super::user_generated::{root_as_user, User, UserArgs};
use super::{constants, Codec};
use crate::error::{DecodeError, DecodeResult, EncodeResult};
use crate::fixture::Record;
use flatbuffers::{FlatBufferBuilder, ForwardsUOffset, Vector, WIPOffset};

/// Initial builder capacity; one record fits without reallocating
pub const INITIAL_BUFFER_SIZE: usize = 1024;

/// Zero-copy binary format backed by `flatbuffers`
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatBuffersCodec;

impl Codec for FlatBuffersCodec {
    fn encode(&self, record: &Record) -> EncodeResult<Vec<u8>> {
        let mut builder = FlatBufferBuilder::with_capacity(INITIAL_BUFFER_SIZE);

        let id = builder.create_string(&record.id);
        let name = builder.create_string(&record.name);
        let email = builder.create_string(&record.email);

        let role_offsets: Vec<WIPOffset<&str>> = record
            .roles
            .iter()
            .map(|role| builder.create_string(role))
            .collect();
        builder.start_vector::<WIPOffset<&str>>(role_offsets.len());
        for offset in role_offsets.iter().rev() {
            builder.push(*offset);
        }
        let roles: WIPOffset<Vector<'_, ForwardsUOffset<&str>>> = WIPOffset::new(
            builder
                .end_vector::<WIPOffset<&str>>(role_offsets.len())
                .value(),
        );

        let user = User::create(
            &mut builder,
            &UserArgs {
                id: Some(id),
                name: Some(name),
                email: Some(email),
                age: record.age,
                active: record.active,
                roles: Some(roles),
                balance: record.balance,
            },
        );
        builder.finish(user, None);

        Ok(builder.finished_data().to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> DecodeResult<Record> {
        let user = root_as_user(bytes).map_err(|e| DecodeError::Malformed {
            format: constants::FLATBUFFERS,
            reason: e.to_string(),
        })?;

        let roles = user
            .roles()
            .map(|roles| roles.iter().map(str::to_owned).collect())
            .unwrap_or_default();

        Ok(Record {
            id: required(user.id(), "id")?.to_owned(),
            name: required(user.name(), "name")?.to_owned(),
            email: required(user.email(), "email")?.to_owned(),
            age: user.age(),
            active: user.active(),
            roles,
            balance: user.balance(),
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> DecodeResult<&'a str> {
    value.ok_or(DecodeError::MissingField {
        format: constants::FLATBUFFERS,
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Dataset;

    fn sample() -> Record {
        Dataset::generate(1, 42).records()[0].clone()
    }

    #[test]
    fn test_role_order_preserved() {
        let mut record = sample();
        record.roles = vec![
            "admin".to_string(),
            "user".to_string(),
            "moderator".to_string(),
        ];
        let bytes = FlatBuffersCodec.encode(&record).unwrap();
        let decoded = FlatBuffersCodec.decode(&bytes).unwrap();
        assert_eq!(decoded.roles, vec!["admin", "user", "moderator"]);
    }

    #[test]
    fn test_zero_copy_access() {
        let record = sample();
        let bytes = FlatBuffersCodec.encode(&record).unwrap();
        let user = root_as_user(&bytes).unwrap();
        assert_eq!(user.id(), Some("user_0"));
        assert_eq!(user.roles().unwrap().len(), 3);
        assert_eq!(user.roles().unwrap().get(2), "moderator");
    }

    #[test]
    fn test_empty_roles_and_defaults() {
        let mut record = sample();
        record.roles.clear();
        record.age = 0;
        record.active = false;
        record.balance = 0.0;
        let bytes = FlatBuffersCodec.encode(&record).unwrap();
        assert_eq!(FlatBuffersCodec.decode(&bytes).unwrap(), record);
    }

    #[test]
    fn test_missing_id() {
        let mut builder = FlatBufferBuilder::new();
        let name = builder.create_string("nobody");
        let user = User::create(
            &mut builder,
            &UserArgs {
                name: Some(name),
                ..Default::default()
            },
        );
        builder.finish(user, None);
        let err = FlatBuffersCodec.decode(builder.finished_data()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                format: "FlatBuffers",
                field: "id",
            }
        );
    }

    #[test]
    fn test_truncated_payload() {
        let bytes = FlatBuffersCodec.encode(&sample()).unwrap();
        assert!(FlatBuffersCodec.decode(&bytes[..bytes.len() / 2]).is_err());
        assert!(FlatBuffersCodec.decode(&[]).is_err());
    }
}
