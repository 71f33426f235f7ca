#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libcardreader::{CardReader, Error, ReaderKind};
use proptest::prelude::*;

fn protocol_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_=]{0,15}"
}

proptest! {
    #[test]
    fn supported_activation_is_reported(reader_protocol in protocol_name(), card_protocol in protocol_name()) {
        let (reader, mock) = common::mock_reader(
            CONTACTLESS_READER,
            ReaderKind::Contactless,
            &[reader_protocol.as_str()],
        ).unwrap();

        reader.activate_protocol(&reader_protocol, &card_protocol).unwrap();
        prop_assert!(reader.is_protocol_active(&reader_protocol));

        mock.set_detected_protocol(Some(reader_protocol.as_str()));
        prop_assert_eq!(reader.current_protocol().unwrap(), Some(card_protocol));
    }

    #[test]
    fn last_activation_wins(reader_protocol in protocol_name(), names in prop::collection::vec(protocol_name(), 1..8)) {
        let (reader, _mock) = common::mock_reader(
            CONTACTLESS_READER,
            ReaderKind::Contactless,
            &[reader_protocol.as_str()],
        ).unwrap();

        for n in &names {
            reader.activate_protocol(&reader_protocol, n).unwrap();
        }
        let bindings = reader.activated_protocols();
        prop_assert_eq!(bindings.len(), 1);
        prop_assert_eq!(bindings[0].card_protocol(), names.last().unwrap().as_str());
    }

    #[test]
    fn unsupported_activation_changes_nothing(reader_protocol in protocol_name()) {
        let (reader, mock) = common::mock_reader(CONTACT_READER, ReaderKind::Contact, &[]).unwrap();
        let err = reader.activate_protocol(&reader_protocol, "APP").unwrap_err();
        prop_assert!(matches!(err, Error::UnsupportedProtocol(_)));
        prop_assert!(reader.activated_protocols().is_empty());
        prop_assert!(mock.calls().is_empty());
    }

    #[test]
    fn presence_tracks_script(script in prop::collection::vec(any::<bool>(), 1..16)) {
        let (reader, mock) = common::mock_reader(CONTACT_READER, ReaderKind::Contact, &[]).unwrap();
        common::seed_presence(&mock, &script);
        for expected in script {
            prop_assert_eq!(reader.is_card_present().unwrap(), expected);
        }
    }
}
