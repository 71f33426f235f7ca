#[path = "../common/mod.rs"]
mod common;

use libcardreader::transport::mock::{MockCall, MockTransport};
use libcardreader::transport::Transport;

#[test]
fn mock_transport_accepts_supported_protocols() {
    let mut m = MockTransport::new(&["T=0", "T=1"]);
    assert!(m.supports_protocol("T=0"));
    assert!(!m.supports_protocol("ISO_14443_4"));

    m.begin_accepting("T=0").unwrap();
    m.begin_accepting("T=1").unwrap();
    assert_eq!(m.accepting(), vec!["T=0".to_string(), "T=1".to_string()]);
}

#[test]
fn mock_transport_records_calls() {
    let mut m = MockTransport::new(&["T=0"]);
    m.begin_accepting("T=0").unwrap();
    let _ = m.probe_presence().unwrap();
    m.stop_accepting("T=0").unwrap();

    assert_eq!(
        m.calls(),
        vec![
            MockCall::BeginAccepting("T=0".into()),
            MockCall::ProbePresence,
            MockCall::StopAccepting("T=0".into()),
        ]
    );
    m.clear_calls();
    assert!(m.calls().is_empty());
}
