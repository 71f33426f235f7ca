// libcardreader/src/reader/builder.rs

use crate::reader::handle::Reader;
use crate::transport::Transport;
use crate::types::ReaderKind;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    name: Option<String>,
    kind: ReaderKind,
    transport: Option<Box<dyn Transport>>,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Hardware family. Defaults to [`ReaderKind::Contact`].
    pub fn kind(mut self, kind: ReaderKind) -> Self {
        self.kind = kind;
        self
    }

    /// Provide the hardware channel (e.g. MockTransport, PcscTransport).
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Consume the builder and return the reader.
    /// Requires a transport; otherwise returns ReaderNotConfigured.
    pub fn build(self) -> Result<Reader> {
        let transport = self.transport.ok_or(Error::ReaderNotConfigured)?;
        Reader::new(self.name.unwrap_or_default(), self.kind, transport)
    }
}
