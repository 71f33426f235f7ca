// libcardreader/src/lib.rs

//! libcardreader
//!
//! Smart card reader abstraction: card presence probing and activation of
//! reader-native protocols mapped to application protocol names.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod presence;
pub mod reader;
pub mod registry;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
