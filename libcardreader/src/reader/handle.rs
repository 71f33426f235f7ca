// libcardreader/src/reader/handle.rs

use std::fmt;

use log::{debug, warn};
use parking_lot::Mutex;

use crate::presence::PresenceMonitor;
use crate::reader::traits::CardReader;
use crate::registry::ProtocolRegistry;
use crate::transport::Transport;
use crate::types::{ProtocolBinding, ProtocolName, ReaderKind};
use crate::{Error, Result};

/// Hardware channel and the protocol state bound to it. Always accessed
/// with the reader lock held.
struct Channel {
    transport: Box<dyn Transport>,
    registry: ProtocolRegistry,
    released: bool,
}

impl Channel {
    /// Force every protocol inactive and release the transport. Runs at most
    /// once; the first failure is returned after all steps were attempted.
    fn shutdown(&mut self, reader_name: &str) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;

        let mut first_err: Option<Error> = None;
        for protocol in self.registry.active_protocols() {
            if let Err(e) = self.transport.stop_accepting(&protocol) {
                warn!(
                    "reader {}: failed to stop accepting {} on disposal: {}",
                    reader_name, protocol, e
                );
                first_err.get_or_insert(Error::from_driver(&protocol, e));
            }
        }
        self.registry.clear();

        if let Err(e) = self.transport.release() {
            warn!("reader {}: failed to release transport: {}", reader_name, e);
            first_err.get_or_insert(Error::ReaderCommunication(e));
        }
        debug!("reader {} released", reader_name);

        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Reader facade: immutable identity plus a transport shared under one
/// exclusive lock.
pub struct Reader {
    name: String,
    kind: ReaderKind,
    monitor: PresenceMonitor,
    channel: Mutex<Channel>,
}

impl Reader {
    /// Create a reader owning `transport`. The hardware channel is held
    /// until the reader is closed or dropped.
    pub fn new(
        name: impl Into<String>,
        kind: ReaderKind,
        transport: Box<dyn Transport>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument("reader name is empty".to_string()));
        }
        debug!("reader {} opened ({})", name, kind);
        Ok(Self {
            name,
            kind,
            monitor: PresenceMonitor::new(),
            channel: Mutex::new(Channel {
                transport,
                registry: ProtocolRegistry::new(),
                released: false,
            }),
        })
    }

    pub fn kind(&self) -> ReaderKind {
        self.kind
    }

    pub fn is_protocol_active(&self, reader_protocol: &str) -> bool {
        self.channel.lock().registry.is_active(reader_protocol)
    }

    /// Snapshot of the active bindings, sorted by reader protocol.
    pub fn activated_protocols(&self) -> Vec<ProtocolBinding> {
        self.channel.lock().registry.bindings()
    }

    /// Reader protocols currently reported under `card_protocol`.
    pub fn reader_protocols_for(&self, card_protocol: &str) -> Vec<String> {
        self.channel.lock().registry.reader_protocols_for(card_protocol)
    }

    /// Application name of the protocol presented by the card in the field.
    ///
    /// Returns `None` when no card is detected or when the card presents a
    /// protocol that is not active on this reader.
    pub fn current_protocol(&self) -> Result<Option<String>> {
        let mut channel = self.channel.lock();
        let detected = channel
            .transport
            .detected_protocol()
            .map_err(Error::ReaderCommunication)?;
        Ok(detected.and_then(|reader_protocol| {
            channel
                .registry
                .card_protocol_of(&reader_protocol)
                .map(str::to_string)
        }))
    }

    /// Deactivate every protocol and release the hardware channel.
    pub fn close(self) -> Result<()> {
        let mut channel = self.channel.lock();
        channel.shutdown(&self.name)
    }
}

impl CardReader for Reader {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_contactless(&self) -> bool {
        self.kind.is_contactless()
    }

    fn is_card_present(&self) -> Result<bool> {
        let mut channel = self.channel.lock();
        self.monitor.probe(&mut *channel.transport)
    }

    fn activate_protocol(&self, reader_protocol: &str, card_protocol: &str) -> Result<()> {
        let reader = ProtocolName::parse(reader_protocol, "reader protocol")?;
        let card = ProtocolName::parse(card_protocol, "card protocol")?;

        let mut channel = self.channel.lock();
        let Channel {
            transport,
            registry,
            ..
        } = &mut *channel;
        registry.add(&mut **transport, reader.as_str(), card.as_str())
    }

    fn deactivate_protocol(&self, reader_protocol: &str) -> Result<()> {
        let reader = ProtocolName::parse(reader_protocol, "reader protocol")?;

        let mut channel = self.channel.lock();
        let Channel {
            transport,
            registry,
            ..
        } = &mut *channel;
        registry.remove(&mut **transport, reader.as_str())
    }
}

impl Drop for Reader {
    fn drop(&mut self) {
        let _ = self.channel.get_mut().shutdown(&self.name);
    }
}

impl fmt::Debug for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
