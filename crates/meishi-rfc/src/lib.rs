//! Contact-card interchange format parsing.
//!
//! This crate turns loosely-standardized contact-card text (the vCard-style
//! line-oriented format) into structured [`meishi_core::Card`] records. It
//! is an importer, not a validator: malformed input degrades to diagnostics
//! on a caller-supplied reporting sink and parsing always runs to
//! completion.

pub mod vcard;
