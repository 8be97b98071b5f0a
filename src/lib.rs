//! # Rusty Letter
//!
//! Fills a free-text template with values taken from rows of tabular data, producing one
//! document per row and cycling through the rows on repeated generation.
//!
//! ## Features
//!
//! - **Row normalization**: trims column names and values, drops empty cells and rows
//!   that end up with no columns
//! - **Placeholder discovery**: any `[NAME]` token with at least one character between the
//!   brackets, reported once each in first-occurrence order
//! - **Rendering**: exact column lookup, case-insensitive replacement of every occurrence,
//!   unknown placeholders left visible in the output
//! - **Sessions**: row cycling, previews, export file naming and pluggable exporters
//! - **Template decoding**: UTF-8/UTF-16 byte order marks and Windows code pages
//!
//! Parsing tabular files is left to the caller: rows arrive already split into
//! header-keyed records of [`RawCell`] values.
//!
//! ## Example
//!
//! ```
//! use rusty_letter::{normalize_rows, render, RawCell, RawRow};
//!
//! let raw: Vec<RawRow> = vec![vec![
//!     (" NAME ".to_owned(), RawCell::from(" Ann ")),
//!     ("COMPANY".to_owned(), RawCell::Null),
//! ]];
//! let rows = normalize_rows(&raw);
//! assert_eq!(render("Dear [NAME] at [COMPANY]", &rows[0]), "Dear Ann at [COMPANY]");
//! ```
pub mod error;
pub mod generator;
pub(crate) mod helpers;
pub mod table;
pub mod template;

pub use error::RustyLetterError;
pub use generator::{
    DirectoryExporter, Exporter, GeneratedLetter, GeneratorError, GeneratorOptions, LetterGenerator,
};
pub use helpers::decoder::{decode_template, DecodeError};
pub use table::{normalize_row, normalize_rows, RawCell, RawRow, Row};
pub use template::{find_placeholders, render, Template};
