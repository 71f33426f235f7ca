// Shared helpers for integration tests.
#![allow(dead_code)]


pub use libcardreader::test_support::{mock_reader, seed_presence};
