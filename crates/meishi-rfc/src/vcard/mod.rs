//! Contact-card (vCard-style) parsing.
//!
//! ## Overview
//!
//! This module parses one or more `BEGIN`…`END` bracketed contact records
//! from loosely-standardized interchange text. It is deliberately lenient:
//! unknown fields, vendor extensions, and malformed values never abort the
//! parse. Diagnostics flow through a caller-supplied
//! [`meishi_core::Reporter`], and the result is always a well-formed
//! (possibly empty) sequence of records.
//!
//! ## Usage
//!
//! ```rust
//! use meishi_core::report::MemoryReporter;
//! use meishi_rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! FN:John Doe\r\n\
//! TEL;TYPE=home:555-1234\r\n\
//! END:VCARD\r\n";
//!
//! let mut reporter = MemoryReporter::new();
//! let cards = parse(input, &mut reporter);
//! assert_eq!(cards.len(), 1);
//! assert_eq!(cards[0].display_name(), Some("John Doe"));
//! ```
//!
//! ## Submodules
//!
//! - [`parse`] - the parsing pipeline and entry points

pub mod parse;

#[cfg(test)]
mod tests;

pub use parse::{ParseOptions, parse, parse_logged, parse_with_options};
