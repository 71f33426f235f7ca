#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;
use std::thread;

use common::fixtures::*;
use libcardreader::constants::ISO_14443_4;
use libcardreader::{CardReader, Reader, ReaderKind};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn reader_is_shareable_across_threads() {
    assert_send_sync::<Reader>();
}

#[test]
fn concurrent_callers_are_serialized() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (reader, mock) =
        common::mock_reader(CONTACTLESS_READER, ReaderKind::Contactless, &contactless_protocols())
            .unwrap();
    mock.set_present(true);
    let reader = Arc::new(reader);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let reader = Arc::clone(&reader);
            thread::spawn(move || {
                for _ in 0..50 {
                    if i % 2 == 0 {
                        reader
                            .activate_protocol(ISO_14443_4, &format!("APP_{}", i))
                            .unwrap();
                    } else {
                        reader.deactivate_protocol(ISO_14443_4).unwrap();
                    }
                    assert!(reader.is_card_present().unwrap());
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    // Registry and hardware agree once all callers are done.
    assert_eq!(
        reader.is_protocol_active(ISO_14443_4),
        mock.is_accepting(ISO_14443_4)
    );
    assert!(reader.activated_protocols().len() <= 1);
}
