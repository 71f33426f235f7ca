// Virtual contactless reader example
//
// Drives a reader backed by the in-memory MockTransport through a typical
// selection preparation: activate protocols, wait for a card, report which
// application protocol it presents. Run with RUST_LOG=debug to see the
// reader's log output.

use libcardreader::constants::{INNOVATRON_B_PRIME_CARD, ISO_14443_4, MIFARE_ULTRALIGHT};
use libcardreader::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let hardware = MockTransport::new(&[ISO_14443_4, INNOVATRON_B_PRIME_CARD]);
    let reader = ReaderBuilder::new()
        .name("Virtual Contactless 0")
        .kind(ReaderKind::Contactless)
        .with_transport(Box::new(hardware.clone()))
        .build()?;

    println!(
        "Reader {} (contactless: {})",
        reader.name(),
        reader.is_contactless()
    );

    reader.activate_protocol(ISO_14443_4, "ISO14443")?;
    reader.activate_protocol(INNOVATRON_B_PRIME_CARD, "CALYPSO_B_PRIME")?;

    match reader.activate_protocol(MIFARE_ULTRALIGHT, "MIFARE") {
        Err(Error::UnsupportedProtocol(p)) => println!("{} not supported by this hardware", p),
        other => println!("unexpected result: {:?}", other),
    }

    println!("\n=== Active protocols ===");
    for binding in reader.activated_protocols() {
        println!("  {}", binding);
    }

    // Simulate a card tapped on the third probe.
    hardware.push_presence(false);
    hardware.push_presence(false);
    hardware.push_presence(true);
    hardware.set_detected_protocol(Some(INNOVATRON_B_PRIME_CARD));

    println!("\n=== Waiting for a card ===");
    let mut attempts = 0;
    while !reader.is_card_present()? {
        attempts += 1;
        println!("  no card (probe {})", attempts);
    }

    match reader.current_protocol()? {
        Some(app) => println!("Card detected, application protocol = {}", app),
        None => println!("Card detected, protocol not activated"),
    }

    reader.close()?;
    println!("\nReader closed.");
    Ok(())
}
