//! # Table Module
//!
//! Turns records produced by an external tabular parser into clean [`Row`]s that the
//! template engine can look values up in.
pub(crate) mod cell;
pub(crate) mod normalizer;
pub(crate) mod row;

pub use cell::RawCell;
pub use normalizer::{normalize_row, normalize_rows};
pub use row::{RawRow, Row};
