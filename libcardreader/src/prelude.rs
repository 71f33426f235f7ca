// libcardreader/src/prelude.rs

pub use crate::presence::PresenceMonitor;
pub use crate::reader::{CardReader, Reader, ReaderBuilder};
pub use crate::registry::ProtocolRegistry;
pub use crate::transport::{MockTransport, Transport};
#[cfg(feature = "pcsc")]
pub use crate::transport::{PcscConfig, PcscTransport};
pub use crate::{
    DriverError, DriverResult, Error, ProtocolBinding, ProtocolName, ReaderKind, Result,
};

pub use crate::utils::{default_probe_timeout, ms};
