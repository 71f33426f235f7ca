//! Configuration options for the PC/SC transport

use std::time::Duration;

use pcsc::ShareMode as PcscShareMode;

use crate::utils::default_probe_timeout;

/// Sharing mode used when connecting to the card to read its protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMode {
    /// Exclusive access to the card
    Exclusive,
    /// Shared access to the card (default)
    Shared,
}

impl From<ShareMode> for PcscShareMode {
    fn from(mode: ShareMode) -> Self {
        match mode {
            ShareMode::Exclusive => Self::Exclusive,
            ShareMode::Shared => Self::Shared,
        }
    }
}

/// Configuration options for [`super::PcscTransport`]
#[derive(Debug, Clone)]
pub struct PcscConfig {
    pub share_mode: ShareMode,

    /// Upper bound for one presence probe
    pub probe_timeout: Duration,
}

impl Default for PcscConfig {
    fn default() -> Self {
        Self {
            share_mode: ShareMode::Shared,
            probe_timeout: default_probe_timeout(),
        }
    }
}

impl PcscConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_share_mode(mut self, share_mode: ShareMode) -> Self {
        self.share_mode = share_mode;
        self
    }

    pub const fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }
}
