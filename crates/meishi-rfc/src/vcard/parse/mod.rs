//! Parsing pipeline for contact-card text.
//!
//! Stages, in order: unfold and split the raw text into logical lines,
//! tokenize each line into name/parameters/value, interpret the value per
//! property kind, and assemble records on `BEGIN`…`END` boundaries.
//!
//! The pipeline is a pure fold over the logical-line sequence; the only
//! side channel is the caller-supplied reporting sink.

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ValueError, ValueResult};
pub use lexer::{ContentLine, Parameter, split_lines, tokenize, unfold};
pub use parser::{ParseOptions, parse, parse_logged, parse_with_options};
pub use values::{
    parse_address, parse_date_value, parse_structured_name, strip_enclosing_quotes,
    unescape_newline,
};
