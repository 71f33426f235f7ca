// libcardreader/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "pcsc")]
pub mod pcsc;
pub mod traits;

pub use mock::{MockCall, MockTransport};
#[cfg(feature = "pcsc")]
pub use self::pcsc::{PcscConfig, PcscTransport};
pub use traits::Transport;
