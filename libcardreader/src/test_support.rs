//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::reader::{Reader, ReaderBuilder};
use crate::transport::mock::MockTransport;
use crate::types::ReaderKind;
use crate::Result;

/// Build a reader over a fresh MockTransport supporting `supported`, and
/// return it together with a handle sharing the mock's state.
#[doc(hidden)]
pub fn mock_reader(
    name: &str,
    kind: ReaderKind,
    supported: &[&str],
) -> Result<(Reader, MockTransport)> {
    let mock = MockTransport::new(supported);
    let reader = ReaderBuilder::new()
        .name(name)
        .kind(kind)
        .with_transport(Box::new(mock.clone()))
        .build()?;
    Ok((reader, mock))
}

/// Queue presence results on a MockTransport, in probe order.
#[doc(hidden)]
pub fn seed_presence(mock: &MockTransport, sequence: &[bool]) {
    for &present in sequence {
        mock.push_presence(present);
    }
}
