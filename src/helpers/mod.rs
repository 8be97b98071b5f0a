//! Helpers shared by the generator: byte-level decoding of uploaded files.
pub(crate) mod decoder;
