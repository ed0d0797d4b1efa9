//! Name to codec mapping iterated by the harness

use super::{constants, Codec, FlatBuffersCodec, JsonCodec, ProtobufCodec, XmlCodec};
use crate::error::{Error, Result};

/// Registry of codecs keyed by their report name.
///
/// Codecs are visited in registration order so console output and the final
/// dump list formats in a stable order from run to run.
#[derive(Default)]
pub struct CodecRegistry {
    entries: Vec<(&'static str, Box<dyn Codec>)>,
}

impl CodecRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the four formats under test
    pub fn with_default_codecs() -> Self {
        let mut registry = Self::new();
        registry.insert(constants::JSON, Box::new(JsonCodec));
        registry.insert(constants::XML, Box::new(XmlCodec));
        registry.insert(constants::PROTOBUF, Box::new(ProtobufCodec));
        registry.insert(constants::FLATBUFFERS, Box::new(FlatBuffersCodec));
        registry
    }

    /// Register `codec` under `name`; names must be unique
    pub fn register<C: Codec + 'static>(&mut self, name: &'static str, codec: C) -> Result<()> {
        if self.get(name).is_some() {
            return Err(Error::Configuration {
                message: format!("codec `{}` is already registered", name),
            });
        }
        self.insert(name, Box::new(codec));
        Ok(())
    }

    fn insert(&mut self, name: &'static str, codec: Box<dyn Codec>) {
        self.entries.push((name, codec));
    }

    /// Look up a codec by name
    pub fn get(&self, name: &str) -> Option<&dyn Codec> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, codec)| codec.as_ref())
    }

    /// Iterate over `(name, codec)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &dyn Codec)> + '_ {
        self.entries.iter().map(|(name, codec)| (*name, codec.as_ref()))
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    /// Number of registered codecs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no codec is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("names", &self.names())
            .finish()
    }
}
