// libcardreader/src/registry.rs

//! Authoritative set of activated reader protocols and the application
//! names they are reported under.

use std::collections::HashMap;

use log::{debug, trace};

use crate::transport::Transport;
use crate::types::{ProtocolBinding, ProtocolName};
use crate::{Error, Result};

/// Mapping `reader protocol -> binding`. Keys are unique.
#[derive(Debug, Default)]
pub struct ProtocolRegistry {
    bindings: HashMap<String, ProtocolBinding>,
}

impl ProtocolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `reader_protocol` under the application name
    /// `card_protocol`, or replace the application name if it is already
    /// active. The binding is only committed once the hardware accepted the
    /// protocol.
    pub fn add(
        &mut self,
        transport: &mut dyn Transport,
        reader_protocol: &str,
        card_protocol: &str,
    ) -> Result<()> {
        let reader = ProtocolName::parse(reader_protocol, "reader protocol")?;
        let card = ProtocolName::parse(card_protocol, "card protocol")?;

        if !transport.supports_protocol(reader.as_str()) {
            return Err(Error::UnsupportedProtocol(reader.into_string()));
        }

        if let Some(existing) = self.bindings.get_mut(reader.as_str()) {
            // Hardware already accepts it; only the name changes.
            debug!(
                "rebinding reader protocol {} from {} to {}",
                reader,
                existing.card_protocol(),
                card
            );
            *existing = ProtocolBinding::new(reader, card);
            return Ok(());
        }

        transport
            .begin_accepting(reader.as_str())
            .map_err(|e| Error::from_driver(reader.as_str(), e))?;

        debug!("activated reader protocol {} as {}", reader, card);
        self.bindings
            .insert(reader.as_str().to_string(), ProtocolBinding::new(reader, card));
        Ok(())
    }

    /// Ensure `reader_protocol` is inactive. Removing a protocol that is not
    /// active succeeds without touching the hardware.
    pub fn remove(&mut self, transport: &mut dyn Transport, reader_protocol: &str) -> Result<()> {
        let reader = ProtocolName::parse(reader_protocol, "reader protocol")?;

        if !transport.supports_protocol(reader.as_str()) {
            return Err(Error::UnsupportedProtocol(reader.into_string()));
        }

        if !self.bindings.contains_key(reader.as_str()) {
            trace!("reader protocol {} already inactive", reader);
            return Ok(());
        }

        transport
            .stop_accepting(reader.as_str())
            .map_err(|e| Error::from_driver(reader.as_str(), e))?;

        self.bindings.remove(reader.as_str());
        debug!("deactivated reader protocol {}", reader);
        Ok(())
    }

    pub fn is_active(&self, reader_protocol: &str) -> bool {
        self.bindings.contains_key(reader_protocol)
    }

    /// Application name bound to `reader_protocol`, if active.
    pub fn card_protocol_of(&self, reader_protocol: &str) -> Option<&str> {
        self.bindings
            .get(reader_protocol)
            .map(ProtocolBinding::card_protocol)
    }

    /// Reader protocols currently bound to `card_protocol`, sorted.
    pub fn reader_protocols_for(&self, card_protocol: &str) -> Vec<String> {
        let mut found: Vec<String> = self
            .bindings
            .values()
            .filter(|b| b.card_protocol() == card_protocol)
            .map(|b| b.reader_protocol().to_string())
            .collect();
        found.sort();
        found
    }

    /// Snapshot of all bindings, sorted by reader protocol.
    pub fn bindings(&self) -> Vec<ProtocolBinding> {
        let mut all: Vec<ProtocolBinding> = self.bindings.values().cloned().collect();
        all.sort_by(|a, b| a.reader_protocol().cmp(b.reader_protocol()));
        all
    }

    /// Active reader protocol names, sorted.
    pub fn active_protocols(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bindings.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Forget every binding without touching the hardware.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}
