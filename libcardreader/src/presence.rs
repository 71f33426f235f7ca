// libcardreader/src/presence.rs

//! Card presence queries. Results are never cached: the card may be
//! inserted or removed between two calls.

use log::trace;

use crate::transport::Transport;
use crate::{Error, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct PresenceMonitor;

impl PresenceMonitor {
    pub fn new() -> Self {
        Self
    }

    /// Probe the hardware once.
    pub fn probe(&self, transport: &mut dyn Transport) -> Result<bool> {
        let present = transport
            .probe_presence()
            .map_err(Error::ReaderCommunication)?;
        trace!("presence probe: card present = {}", present);
        Ok(present)
    }
}
