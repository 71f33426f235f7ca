#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libcardreader::constants::{INNOVATRON_B_PRIME_CARD, ISO_14443_4};
use libcardreader::transport::MockCall;
use libcardreader::{CardReader, DriverError, Error, ReaderKind};

#[test]
fn identity_survives_activation_history() {
    let (reader, _mock) =
        common::mock_reader(CONTACTLESS_READER, ReaderKind::Contactless, &contactless_protocols())
            .unwrap();

    let name = reader.name().to_string();
    let contactless = reader.is_contactless();

    reader.activate_protocol(ISO_14443_4, APP_ISO14443).unwrap();
    let _ = reader.activate_protocol("T=1", "ISO7816");
    reader.deactivate_protocol(ISO_14443_4).unwrap();
    let _ = reader.activate_protocol("", "");

    assert_eq!(reader.name(), name);
    assert_eq!(reader.is_contactless(), contactless);
    assert!(contactless);
}

#[test]
fn contact_reader_is_not_contactless() {
    let (reader, _mock) =
        common::mock_reader(CONTACT_READER, ReaderKind::Contact, &contact_protocols()).unwrap();
    assert!(!reader.is_contactless());
    assert_eq!(reader.name(), CONTACT_READER);
}

#[test]
fn driver_failure_during_activation_commits_nothing() {
    let (reader, mock) =
        common::mock_reader(CONTACTLESS_READER, ReaderKind::Contactless, &contactless_protocols())
            .unwrap();
    mock.fail_next(DriverError::Timeout);

    let err = reader
        .activate_protocol(ISO_14443_4, APP_ISO14443)
        .unwrap_err();
    assert!(matches!(err, Error::ReaderCommunication(DriverError::Timeout)));
    assert!(!reader.is_protocol_active(ISO_14443_4));

    // Caller retries explicitly.
    reader.activate_protocol(ISO_14443_4, APP_ISO14443).unwrap();
    assert!(reader.is_protocol_active(ISO_14443_4));
}

#[test]
fn driver_failure_during_deactivation_keeps_binding() {
    let (reader, mock) =
        common::mock_reader(CONTACTLESS_READER, ReaderKind::Contactless, &contactless_protocols())
            .unwrap();
    reader.activate_protocol(ISO_14443_4, APP_ISO14443).unwrap();
    mock.fail_next(DriverError::Disconnected);

    assert!(reader.deactivate_protocol(ISO_14443_4).is_err());
    assert!(reader.is_protocol_active(ISO_14443_4));
    assert!(mock.is_accepting(ISO_14443_4));
}

#[test]
fn close_forces_every_protocol_inactive() {
    let (reader, mock) =
        common::mock_reader(CONTACTLESS_READER, ReaderKind::Contactless, &contactless_protocols())
            .unwrap();
    reader.activate_protocol(ISO_14443_4, APP_ISO14443).unwrap();
    reader
        .activate_protocol(INNOVATRON_B_PRIME_CARD, APP_CALYPSO_B_PRIME)
        .unwrap();

    reader.close().unwrap();

    assert!(mock.accepting().is_empty());
    assert_eq!(mock.release_count(), 1);
    assert_eq!(mock.calls().last(), Some(&MockCall::Release));
}

#[test]
fn dropping_reader_releases_channel_once() {
    let (reader, mock) =
        common::mock_reader(CONTACT_READER, ReaderKind::Contact, &contact_protocols()).unwrap();
    reader.activate_protocol("T=0", "ISO7816_T0").unwrap();
    drop(reader);

    assert!(mock.accepting().is_empty());
    assert_eq!(mock.release_count(), 1);
}
