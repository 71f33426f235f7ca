// libcardreader/src/transport/traits.rs

use crate::DriverResult;

/// Transport trait abstracts the hardware probe capability away from the
/// reader facade. One implementation exists per hardware family.
///
/// Implementations are owned by exactly one reader and are only ever called
/// with the reader's lock held, so they need not be internally synchronized.
pub trait Transport: Send {
    /// Whether the hardware can accept cards presenting `reader_protocol`.
    fn supports_protocol(&self, reader_protocol: &str) -> bool;

    /// Start accepting cards presenting `reader_protocol` during selection.
    fn begin_accepting(&mut self, reader_protocol: &str) -> DriverResult<()>;

    /// Stop accepting cards presenting `reader_protocol`.
    fn stop_accepting(&mut self, reader_protocol: &str) -> DriverResult<()>;

    /// Probe the hardware for a card. Each call re-probes.
    fn probe_presence(&mut self) -> DriverResult<bool>;

    /// Reader-native protocol presented by the card currently in the field,
    /// if the hardware can tell. Default implementation reports nothing.
    fn detected_protocol(&mut self) -> DriverResult<Option<String>> {
        Ok(None)
    }

    /// Release the hardware channel. Called once when the reader is
    /// disposed. Default implementation is a no-op.
    fn release(&mut self) -> DriverResult<()> {
        Ok(())
    }
}
