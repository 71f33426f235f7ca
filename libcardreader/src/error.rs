// libcardreader/src/error.rs

use thiserror::Error;

/// Failure reported by a hardware transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("reader disconnected")]
    Disconnected,

    #[error("driver operation timed out")]
    Timeout,

    #[error("protocol not supported by driver: {0}")]
    Unsupported(String),

    #[error("driver error: {0}")]
    Other(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("reader protocol not supported: {0}")]
    UnsupportedProtocol(String),

    #[error("reader communication failed: {0}")]
    ReaderCommunication(#[source] DriverError),

    #[error("reader not configured: no transport provided")]
    ReaderNotConfigured,
}

impl Error {
    /// Translate a driver failure raised while handling `reader_protocol`.
    ///
    /// An explicit refusal of the protocol becomes `UnsupportedProtocol`;
    /// every other driver failure is a communication error.
    pub fn from_driver(reader_protocol: &str, err: DriverError) -> Self {
        match err {
            DriverError::Unsupported(_) => Error::UnsupportedProtocol(reader_protocol.to_string()),
            other => Error::ReaderCommunication(other),
        }
    }

    /// True when retrying after re-establishing the channel may succeed.
    pub fn is_communication(&self) -> bool {
        matches!(self, Error::ReaderCommunication(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Result type returned by [`crate::transport::Transport`] implementations.
pub type DriverResult<T> = std::result::Result<T, DriverError>;
