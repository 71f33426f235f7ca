// libcardreader/src/types.rs

use crate::{Error, Result};
use derive_more::Display;

/// Hardware family of a reader, fixed at construction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ReaderKind {
    /// Cards are inserted and powered through electrical contacts.
    #[display(fmt = "contact")]
    Contact,
    /// Cards communicate over the RF field.
    #[display(fmt = "contactless")]
    Contactless,
}

impl ReaderKind {
    pub fn is_contactless(&self) -> bool {
        matches!(self, ReaderKind::Contactless)
    }
}

impl Default for ReaderKind {
    fn default() -> Self {
        ReaderKind::Contact
    }
}

/// Non-empty protocol identifier - Newtype Pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display(fmt = "{}", _0)]
pub struct ProtocolName(String);

impl ProtocolName {
    /// Validate `name`; `what` names the argument in the error message.
    pub fn parse(name: &str, what: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(format!("{} is empty", what)));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for ProtocolName {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Self::parse(name, "protocol name")
    }
}

impl AsRef<str> for ProtocolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One activated protocol: the hardware name and the application name it is
/// reported under.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{} -> {}", reader_protocol, card_protocol)]
pub struct ProtocolBinding {
    reader_protocol: String,
    card_protocol: String,
}

impl ProtocolBinding {
    pub fn new(reader_protocol: ProtocolName, card_protocol: ProtocolName) -> Self {
        Self {
            reader_protocol: reader_protocol.into_string(),
            card_protocol: card_protocol.into_string(),
        }
    }

    pub fn reader_protocol(&self) -> &str {
        &self.reader_protocol
    }

    pub fn card_protocol(&self) -> &str {
        &self.card_protocol
    }
}
