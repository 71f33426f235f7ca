// libcardreader/src/constants.rs
//! Well-known protocol names shared by readers and applications

/// ISO 14443-4 contactless cards (type A and B)
pub const ISO_14443_4: &str = "ISO_14443_4";

/// Calypso Innovatron B Prime contactless cards
pub const INNOVATRON_B_PRIME_CARD: &str = "INNOVATRON_B_PRIME_CARD";

/// NXP Mifare Ultralight and Ultralight C
pub const MIFARE_ULTRALIGHT: &str = "MIFARE_ULTRALIGHT";

/// NXP Mifare Classic 1K / 4K
pub const MIFARE_CLASSIC: &str = "MIFARE_CLASSIC";

/// STMicroelectronics ST25 / SRT512
pub const ST25_SRT512: &str = "ST25_SRT512";

/// ISO 7816-3 contact cards, any transmission protocol
pub const ISO_7816_3: &str = "ISO_7816_3";

/// ISO 7816-3 contact cards using T=0
pub const ISO_7816_3_T0: &str = "ISO_7816_3_T0";

/// ISO 7816-3 contact cards using T=1
pub const ISO_7816_3_T1: &str = "ISO_7816_3_T1";

/// PC/SC reader-native protocol names
pub const PCSC_T0: &str = "T=0";
pub const PCSC_T1: &str = "T=1";
pub const PCSC_RAW: &str = "RAW";
