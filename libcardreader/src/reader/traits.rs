// libcardreader/src/reader/traits.rs

use crate::Result;

/// Card reader driving the underlying hardware to manage card detection.
///
/// This is the capability set consumed by the card-selection layer:
/// identity, presence and protocol activation. Hardware-touching methods
/// take `&self`; implementations serialize them internally.
pub trait CardReader {
    /// Name of the reader. Never empty.
    fn name(&self) -> &str;

    /// True if cards communicate with this reader over the RF field.
    fn is_contactless(&self) -> bool;

    /// Probe the hardware for a card.
    ///
    /// Fails with `ReaderCommunication` if the hardware channel is broken.
    fn is_card_present(&self) -> Result<bool>;

    /// Activate `reader_protocol` and report cards presenting it under the
    /// application name `card_protocol`.
    ///
    /// - Activates the detection of cards using the reader protocol.
    /// - Asks the reader to accept any such card during selection.
    /// - Associates the two names; activating an active protocol again
    ///   replaces the application name.
    ///
    /// Fails with `InvalidArgument` if a name is empty and with
    /// `UnsupportedProtocol` if the hardware cannot accept the protocol.
    fn activate_protocol(&self, reader_protocol: &str, card_protocol: &str) -> Result<()>;

    /// Deactivate `reader_protocol`: cards presenting it are no longer
    /// detected nor accepted during selection. Deactivating an inactive
    /// protocol succeeds.
    ///
    /// Fails with `InvalidArgument` if the name is empty and with
    /// `UnsupportedProtocol` if the hardware does not know the protocol.
    fn deactivate_protocol(&self, reader_protocol: &str) -> Result<()>;
}
