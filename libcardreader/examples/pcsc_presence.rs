// PC/SC presence example
//
// Lists PC/SC readers, opens the first one, activates T=0 and T=1 and
// reports card presence. Requires `--features pcsc`.

use libcardreader::constants::{ISO_7816_3_T0, ISO_7816_3_T1, PCSC_T0, PCSC_T1};
use libcardreader::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let readers = PcscTransport::list_readers()?;
    if readers.is_empty() {
        println!("No PC/SC readers found");
        return Ok(());
    }
    for (i, name) in readers.iter().enumerate() {
        println!("  Reader {}: {}", i + 1, name);
    }

    let name = &readers[0];
    let transport = PcscTransport::open(name, PcscConfig::default())?;
    let reader = ReaderBuilder::new()
        .name(name.as_str())
        .kind(ReaderKind::Contact)
        .with_transport(Box::new(transport))
        .build()?;

    reader.activate_protocol(PCSC_T0, ISO_7816_3_T0)?;
    reader.activate_protocol(PCSC_T1, ISO_7816_3_T1)?;

    if reader.is_card_present()? {
        match reader.current_protocol()? {
            Some(p) => println!("Card present, protocol = {}", p),
            None => println!("Card present, protocol not recognised"),
        }
    } else {
        println!("No card in {}", reader.name());
    }

    reader.close()
}
