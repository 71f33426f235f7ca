// libcardreader/src/reader/mod.rs

pub mod builder;
pub mod handle;
pub mod traits;

pub use builder::ReaderBuilder;
pub use handle::Reader;
pub use traits::CardReader;
