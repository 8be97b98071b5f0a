//! Decoding of uploaded template files into text.

use crate::error::RustyLetterError;
use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum DecodeError {
    /// Invalid character encoding code page requested
    #[error("Invalid Code page '{0}'")]
    CodePageError(u16),
}

/// Decodes raw template bytes.
///
/// A byte order mark always wins and is stripped. Without one, the Windows code page
/// (if any) selects the encoding, falling back to UTF-8. Malformed sequences are
/// replaced with U+FFFD rather than rejected.
pub fn decode_template(bytes: &[u8], code_page: Option<u16>) -> Result<String, RustyLetterError> {
    let (encoding, offset): (&'static Encoding, usize) = match Encoding::for_bom(bytes) {
        Some(found) => found,
        None => match code_page {
            Some(code_page) => (codepage::to_encoding(code_page).ok_or(DecodeError::CodePageError(code_page))?, 0),
            None => (UTF_8, 0),
        },
    };
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[offset..]);
    if had_errors {
        warn!(encoding = encoding.name(), "template contains malformed byte sequences");
    }
    debug!(encoding = encoding.name(), bytes = bytes.len(), "decoded template");
    Ok(text.into_owned())
}
