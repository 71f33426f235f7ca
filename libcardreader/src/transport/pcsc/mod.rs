// libcardreader/src/transport/pcsc/mod.rs

//! PC/SC hardware family. Reader-native protocol names are the PC/SC
//! transmission protocols `"T=0"`, `"T=1"` and `"RAW"`.

use std::collections::BTreeSet;
use std::ffi::CString;
use std::fmt;

use log::{debug, trace};
use pcsc::{Context, Disposition, Protocols, ReaderState, Scope, State};

use crate::constants::{PCSC_RAW, PCSC_T0, PCSC_T1};
use crate::transport::traits::Transport;
use crate::{DriverError, DriverResult, Error, Result};

mod config;
pub use config::{PcscConfig, ShareMode};

fn protocol_flag(reader_protocol: &str) -> Option<Protocols> {
    match reader_protocol {
        PCSC_T0 => Some(Protocols::T0),
        PCSC_T1 => Some(Protocols::T1),
        PCSC_RAW => Some(Protocols::RAW),
        _ => None,
    }
}

fn map_pcsc_error(err: pcsc::Error) -> DriverError {
    match err {
        pcsc::Error::Timeout => DriverError::Timeout,
        pcsc::Error::ReaderUnavailable
        | pcsc::Error::UnknownReader
        | pcsc::Error::NoService
        | pcsc::Error::ServiceStopped
        | pcsc::Error::NoReadersAvailable => DriverError::Disconnected,
        other => DriverError::Other(other.to_string()),
    }
}

/// Transport backed by one PC/SC reader slot.
pub struct PcscTransport {
    context: Context,
    reader: CString,
    config: PcscConfig,
    accepted: BTreeSet<String>,
}

impl fmt::Debug for PcscTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PcscTransport")
            .field("reader", &self.reader)
            .field("config", &self.config)
            .field("accepted", &self.accepted)
            .finish()
    }
}

impl PcscTransport {
    /// Names of the readers known to the PC/SC service.
    pub fn list_readers() -> Result<Vec<String>> {
        let context = Context::establish(Scope::User)
            .map_err(|e| Error::ReaderCommunication(map_pcsc_error(e)))?;
        let readers = context
            .list_readers_owned()
            .map_err(|e| Error::ReaderCommunication(map_pcsc_error(e)))?;
        Ok(readers
            .into_iter()
            .map(|r| r.to_string_lossy().into_owned())
            .collect())
    }

    /// Open the PC/SC reader called `reader_name`.
    pub fn open(reader_name: &str, config: PcscConfig) -> Result<Self> {
        let reader = CString::new(reader_name)
            .map_err(|_| Error::InvalidArgument("reader name contains NUL".to_string()))?;
        let context = Context::establish(Scope::User)
            .map_err(|e| Error::ReaderCommunication(map_pcsc_error(e)))?;

        let known = context
            .list_readers_owned()
            .map_err(|e| Error::ReaderCommunication(map_pcsc_error(e)))?;
        if !known.iter().any(|r| r.as_c_str() == reader.as_c_str()) {
            return Err(Error::ReaderCommunication(DriverError::Disconnected));
        }

        debug!("pcsc reader {:?} opened", reader);
        Ok(Self {
            context,
            reader,
            config,
            accepted: BTreeSet::new(),
        })
    }

    /// Try a shared connection restricted to `flag`; the card is left
    /// untouched afterwards.
    fn card_speaks(&self, flag: Protocols) -> DriverResult<bool> {
        match self
            .context
            .connect(&self.reader, self.config.share_mode.into(), flag)
        {
            Ok(card) => {
                let _ = card.disconnect(Disposition::LeaveCard);
                Ok(true)
            }
            Err(pcsc::Error::ProtocolMismatch)
            | Err(pcsc::Error::NoSmartcard)
            | Err(pcsc::Error::RemovedCard)
            | Err(pcsc::Error::UnsupportedCard)
            | Err(pcsc::Error::UnpoweredCard)
            | Err(pcsc::Error::UnresponsiveCard) => Ok(false),
            Err(e) => Err(map_pcsc_error(e)),
        }
    }
}

impl Transport for PcscTransport {
    fn supports_protocol(&self, reader_protocol: &str) -> bool {
        protocol_flag(reader_protocol).is_some()
    }

    fn begin_accepting(&mut self, reader_protocol: &str) -> DriverResult<()> {
        if protocol_flag(reader_protocol).is_none() {
            return Err(DriverError::Unsupported(reader_protocol.to_string()));
        }
        self.accepted.insert(reader_protocol.to_string());
        Ok(())
    }

    fn stop_accepting(&mut self, reader_protocol: &str) -> DriverResult<()> {
        self.accepted.remove(reader_protocol);
        Ok(())
    }

    fn probe_presence(&mut self) -> DriverResult<bool> {
        let mut states = [ReaderState::new(self.reader.clone(), State::UNAWARE)];
        self.context
            .get_status_change(Some(self.config.probe_timeout), &mut states)
            .map_err(map_pcsc_error)?;
        let event = states[0].event_state();
        if event.contains(State::UNAVAILABLE) || event.contains(State::UNKNOWN) {
            return Err(DriverError::Disconnected);
        }
        let present = event.contains(State::PRESENT) && !event.contains(State::EMPTY);
        trace!("pcsc reader {:?} event state {:?}", self.reader, event);
        Ok(present)
    }

    fn detected_protocol(&mut self) -> DriverResult<Option<String>> {
        for name in &self.accepted {
            if let Some(flag) = protocol_flag(name) {
                if self.card_speaks(flag)? {
                    return Ok(Some(name.clone()));
                }
            }
        }
        Ok(None)
    }

    fn release(&mut self) -> DriverResult<()> {
        // The PC/SC context itself is released when the transport is dropped.
        self.accepted.clear();
        debug!("pcsc reader {:?} released", self.reader);
        Ok(())
    }
}
