//! Property dispatch, value interpretation, and record assembly.

use std::collections::BTreeMap;

use meishi_core::{
    AttributeValue, Card, EntryValue, Reporter, TracingReporter, TypedEntry, attributes,
};

use super::lexer::{ContentLine, Parameter, split_lines, tokenize, unfold};
use super::values::{parse_address, parse_date_value, parse_structured_name, unescape_newline};

/// Interpretation strategy for a known property name.
///
/// Exhaustive by construction: adding a kind forces every dispatch site to
/// handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PropertyKind {
    /// Recognized and ignored (`BEGIN`, `VERSION`).
    Ignored,
    /// Commits the pending record (`END`).
    Boundary,
    /// Free text; repeated fields accumulate on new lines.
    Text,
    /// Comma-separated list of strings.
    CommaList,
    /// Positional structured name components.
    StructuredName,
    /// Calendar date.
    Date,
    /// Parameterized entry list.
    Typed,
    /// Parameterized entry list with positional address components.
    TypedAddress,
}

impl PropertyKind {
    /// Maps an upper-cased field name to its interpretation strategy.
    fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "BEGIN" | "VERSION" => Some(Self::Ignored),
            "END" => Some(Self::Boundary),
            "TITLE" | "FN" | "NOTE" | "URL" | "ORG" | "UID" | "PHOTO" => Some(Self::Text),
            "NICKNAME" | "CATEGORIES" => Some(Self::CommaList),
            "N" => Some(Self::StructuredName),
            "BDAY" => Some(Self::Date),
            "TEL" | "EMAIL" => Some(Self::Typed),
            "ADR" => Some(Self::TypedAddress),
            _ => None,
        }
    }
}

/// Maps a field name to the attribute name stored in the record.
fn attribute_name(field: &str) -> Option<&'static str> {
    match field {
        "TITLE" => Some(attributes::TITLE),
        "TEL" => Some(attributes::TELEPHONE),
        "FN" => Some(attributes::DISPLAY_NAME),
        "N" => Some(attributes::NAME),
        "EMAIL" => Some(attributes::EMAIL),
        "CATEGORIES" => Some(attributes::CATEGORIES),
        "ADR" => Some(attributes::ADDRESS),
        "URL" => Some(attributes::URL),
        "NOTE" => Some(attributes::NOTES),
        "ORG" => Some(attributes::ORGANIZATION),
        "BDAY" => Some(attributes::BIRTHDAY),
        "PHOTO" => Some(attributes::PHOTO),
        _ => None,
    }
}

/// Resolves the attribute name for a field.
///
/// Falls back to the field name itself when the registry has no entry,
/// surfacing the gap as an informational notice. `BEGIN` and `END` are
/// structural markers and never produce one.
fn lookup_attribute(field: &str, reporter: &mut dyn Reporter) -> String {
    if let Some(attribute) = attribute_name(field) {
        return attribute.to_string();
    }
    if field != "BEGIN" && field != "END" {
        reporter.info(&format!("define property name for {field}"));
    }
    field.to_string()
}

/// Caller-selectable parsing behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Emit an error notice when input ends with a record still open.
    ///
    /// The record is dropped either way; the default stays silent for
    /// compatibility with existing importers.
    pub report_unterminated: bool,
}

/// Accumulates interpreted fields and commits records on `END`.
#[derive(Debug, Default)]
struct Assembler {
    pending: Card,
    committed: Vec<Card>,
}

impl Assembler {
    fn commit(&mut self) {
        self.committed.push(std::mem::take(&mut self.pending));
    }
}

/// Parses every record in `input`, reporting diagnostics through `reporter`.
///
/// Never fails: malformed fields degrade to notices and the result is always
/// a well-formed (possibly empty) record sequence, one record per
/// `BEGIN`…`END` pair in input order.
#[must_use]
pub fn parse(input: &str, reporter: &mut dyn Reporter) -> Vec<Card> {
    parse_with_options(input, ParseOptions::default(), reporter)
}

/// Parses with explicit [`ParseOptions`].
#[must_use]
#[tracing::instrument(skip(input, reporter), fields(input_len = input.len()))]
pub fn parse_with_options(
    input: &str,
    options: ParseOptions,
    reporter: &mut dyn Reporter,
) -> Vec<Card> {
    let lines = split_lines(&unfold(input));
    tracing::debug!(count = lines.len(), "Unfolded input into logical lines");

    let mut assembler = Assembler::default();
    for line in &lines {
        feed_line(line, &mut assembler, reporter);
    }

    if options.report_unterminated && !assembler.pending.is_empty() {
        reporter.error("incomplete record discarded at end of input");
    }

    tracing::debug!(count = assembler.committed.len(), "Committed records");
    assembler.committed
}

/// Parses with diagnostics forwarded to the `tracing` subscriber.
#[must_use]
pub fn parse_logged(input: &str) -> Vec<Card> {
    let mut reporter = TracingReporter;
    parse(input, &mut reporter)
}

/// Tokenizes and interprets one logical line against the assembler state.
fn feed_line(line: &str, assembler: &mut Assembler, reporter: &mut dyn Reporter) {
    let content = tokenize(line);

    let Some(kind) = PropertyKind::from_field_name(&content.name) else {
        if !content.name.starts_with("X-") {
            reporter.info(&format!(
                "unknown field {} with value {}",
                content.name, content.value
            ));
        }
        return;
    };

    match kind {
        PropertyKind::Boundary => assembler.commit(),
        PropertyKind::Ignored => {
            // The lookup still fires the registry-gap notice for VERSION.
            lookup_attribute(&content.name, reporter);
        }
        _ => {
            let attribute = lookup_attribute(&content.name, reporter);
            interpret(kind, &content, &attribute, &mut assembler.pending, reporter);
        }
    }
}

/// Writes one interpreted value into the pending record.
fn interpret(
    kind: PropertyKind,
    line: &ContentLine,
    attribute: &str,
    card: &mut Card,
    reporter: &mut dyn Reporter,
) {
    match kind {
        PropertyKind::Ignored | PropertyKind::Boundary => {}
        PropertyKind::Text => apply_text(card, attribute, &line.value),
        PropertyKind::CommaList => {
            let items = line.value.split(',').map(str::to_owned).collect();
            card.insert(attribute, AttributeValue::List(items));
        }
        PropertyKind::StructuredName => {
            card.insert(
                attribute,
                AttributeValue::Name(parse_structured_name(&line.value)),
            );
        }
        PropertyKind::Date => {
            let date = match parse_date_value(&line.value) {
                Ok(date) => Some(date),
                Err(err) => {
                    reporter.error(&err.to_string());
                    None
                }
            };
            card.insert(attribute, AttributeValue::Date(date));
        }
        PropertyKind::Typed => {
            push_typed_entry(
                card,
                attribute,
                &line.params,
                EntryValue::Text(line.value.clone()),
            );
        }
        PropertyKind::TypedAddress => {
            push_typed_entry(
                card,
                attribute,
                &line.params,
                EntryValue::Address(parse_address(&line.value)),
            );
        }
    }
}

/// Sets or extends a plain-text attribute.
///
/// A repeated field appends on a new line; an empty previous value is simply
/// replaced.
fn apply_text(card: &mut Card, attribute: &str, raw: &str) {
    let value = unescape_newline(raw);
    match card.attributes.get_mut(attribute) {
        Some(AttributeValue::Text(existing)) if !existing.is_empty() => {
            existing.push('\n');
            existing.push_str(&value);
        }
        _ => card.insert(attribute, AttributeValue::Text(value)),
    }
}

/// Appends one parameterized entry, folding parameters into a map and
/// extracting the preferred marker.
fn push_typed_entry(card: &mut Card, attribute: &str, params: &[Parameter], value: EntryValue) {
    let mut is_preferred = false;
    let mut parameters = BTreeMap::new();
    for param in params {
        if param.name == "pref" {
            is_preferred = true;
        } else {
            parameters.insert(param.name.clone(), param.value.clone());
        }
    }

    card.entries_mut(attribute).push(TypedEntry {
        is_preferred,
        parameters,
        value,
    });
}
