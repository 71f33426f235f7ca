// libcardreader/src/transport/mock.rs

use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::transport::traits::Transport;
use crate::{DriverError, DriverResult};

/// A call observed by the mock, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    BeginAccepting(String),
    StopAccepting(String),
    ProbePresence,
    DetectedProtocol,
    Release,
}

#[derive(Debug, Default)]
struct MockState {
    supported: BTreeSet<String>,
    accepting: BTreeSet<String>,
    present: bool,
    presence_script: VecDeque<bool>,
    fail_next: Option<DriverError>,
    disconnected: bool,
    detected: Option<String>,
    calls: Vec<MockCall>,
    releases: usize,
}

impl MockState {
    fn check_channel(&mut self) -> DriverResult<()> {
        if self.disconnected {
            return Err(DriverError::Disconnected);
        }
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Mock transport for tests and virtual readers. Clones share the same
/// state, so a test can keep one handle and give the other to a reader.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Create a mock hardware supporting the given reader protocols.
    pub fn new(supported: &[&str]) -> Self {
        let mock = Self::default();
        {
            let mut st = mock.state.lock();
            st.supported = supported.iter().map(|p| p.to_string()).collect();
        }
        mock
    }

    /// Set the presence reported once any scripted values are consumed.
    pub fn set_present(&self, present: bool) {
        self.state.lock().present = present;
    }

    /// Queue presence results returned by the next probes, in order.
    pub fn push_presence(&self, present: bool) {
        self.state.lock().presence_script.push_back(present);
    }

    /// Make the next hardware call fail with `err`.
    pub fn fail_next(&self, err: DriverError) {
        self.state.lock().fail_next = Some(err);
    }

    /// Simulate an unplugged cable: every call fails until reconnected.
    pub fn set_disconnected(&self, disconnected: bool) {
        self.state.lock().disconnected = disconnected;
    }

    /// Reader-native protocol presented by the card in the field.
    pub fn set_detected_protocol(&self, reader_protocol: Option<&str>) {
        self.state.lock().detected = reader_protocol.map(str::to_string);
    }

    /// Protocols the hardware is currently accepting.
    pub fn accepting(&self) -> Vec<String> {
        self.state.lock().accepting.iter().cloned().collect()
    }

    pub fn is_accepting(&self, reader_protocol: &str) -> bool {
        self.state.lock().accepting.contains(reader_protocol)
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    pub fn release_count(&self) -> usize {
        self.state.lock().releases
    }
}

impl Transport for MockTransport {
    fn supports_protocol(&self, reader_protocol: &str) -> bool {
        self.state.lock().supported.contains(reader_protocol)
    }

    fn begin_accepting(&mut self, reader_protocol: &str) -> DriverResult<()> {
        let mut st = self.state.lock();
        st.calls
            .push(MockCall::BeginAccepting(reader_protocol.to_string()));
        st.check_channel()?;
        if !st.supported.contains(reader_protocol) {
            return Err(DriverError::Unsupported(reader_protocol.to_string()));
        }
        st.accepting.insert(reader_protocol.to_string());
        Ok(())
    }

    fn stop_accepting(&mut self, reader_protocol: &str) -> DriverResult<()> {
        let mut st = self.state.lock();
        st.calls
            .push(MockCall::StopAccepting(reader_protocol.to_string()));
        st.check_channel()?;
        st.accepting.remove(reader_protocol);
        Ok(())
    }

    fn probe_presence(&mut self) -> DriverResult<bool> {
        let mut st = self.state.lock();
        st.calls.push(MockCall::ProbePresence);
        st.check_channel()?;
        Ok(st.presence_script.pop_front().unwrap_or(st.present))
    }

    fn detected_protocol(&mut self) -> DriverResult<Option<String>> {
        let mut st = self.state.lock();
        st.calls.push(MockCall::DetectedProtocol);
        st.check_channel()?;
        // The hardware ignores cards whose protocol it is not accepting.
        Ok(st
            .detected
            .clone()
            .filter(|p| st.accepting.contains(p)))
    }

    fn release(&mut self) -> DriverResult<()> {
        let mut st = self.state.lock();
        st.calls.push(MockCall::Release);
        st.releases += 1;
        Ok(())
    }
}
