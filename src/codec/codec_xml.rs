//! XML adapter over `quick-xml`
//!
//! Records are written as a `<user>` element with one child per field; the
//! role list nests as `<roles><role>..</role></roles>`.
//!
//! Text nodes lose carriage returns to line-ending normalization and lose
//! leading and trailing whitespace on read, and XML 1.0 has no encoding for
//! most C0 control characters. Records carrying such text are refused at
//! encode time rather than written as markup that decodes differently.

use super::{constants, Codec};
use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use crate::fixture::Record;
use serde::{Deserialize, Serialize};

/// Markup text format backed by `quick-xml`
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCodec;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "user")]
struct XmlUser {
    id: String,
    name: String,
    email: String,
    age: i32,
    active: bool,
    #[serde(default)]
    roles: XmlRoles,
    balance: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct XmlRoles {
    #[serde(default)]
    role: Vec<String>,
}

impl From<&Record> for XmlUser {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            age: record.age,
            active: record.active,
            roles: XmlRoles {
                role: record.roles.clone(),
            },
            balance: record.balance,
        }
    }
}

impl From<XmlUser> for Record {
    fn from(user: XmlUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            active: user.active,
            roles: user.roles.role,
            balance: user.balance,
        }
    }
}

/// Why `text` would not survive a write and read as an element's content
fn text_defect(text: &str) -> Option<&'static str> {
    let is_xml_space = |ch: char| matches!(ch, ' ' | '\t' | '\n' | '\r');

    if text.contains('\r') {
        Some("carriage returns are normalized to line feeds")
    } else if text.starts_with(is_xml_space) || text.ends_with(is_xml_space) {
        Some("leading or trailing whitespace is trimmed")
    } else if text.chars().any(|ch| {
        matches!(
            ch,
            '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
        )
    }) {
        Some("contains a character XML 1.0 cannot carry")
    } else {
        None
    }
}

fn check_text(field: &'static str, text: &str) -> EncodeResult<()> {
    match text_defect(text) {
        Some(reason) => Err(EncodeError::Unrepresentable {
            format: constants::XML,
            field,
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

impl Codec for XmlCodec {
    fn encode(&self, record: &Record) -> EncodeResult<Vec<u8>> {
        check_text("id", &record.id)?;
        check_text("name", &record.name)?;
        check_text("email", &record.email)?;
        for role in &record.roles {
            check_text("roles", role)?;
        }

        quick_xml::se::to_string(&XmlUser::from(record))
            .map(String::into_bytes)
            .map_err(|e| EncodeError::Failed {
                format: constants::XML,
                reason: e.to_string(),
            })
    }

    fn decode(&self, bytes: &[u8]) -> DecodeResult<Record> {
        let text = std::str::from_utf8(bytes).map_err(|e| DecodeError::Malformed {
            format: constants::XML,
            reason: e.to_string(),
        })?;

        quick_xml::de::from_str::<XmlUser>(text)
            .map(Record::from)
            .map_err(|e| DecodeError::Malformed {
                format: constants::XML,
                reason: e.to_string(),
            })
    }
}
