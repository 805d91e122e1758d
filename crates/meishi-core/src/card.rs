//! Record types produced by parsing.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::structured::{Address, StructuredName};

/// Attribute names used by the standard field registry.
pub mod attributes {
    pub const TITLE: &str = "title";
    pub const TELEPHONE: &str = "telephone";
    pub const DISPLAY_NAME: &str = "displayName";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const CATEGORIES: &str = "categories";
    pub const ADDRESS: &str = "address";
    pub const URL: &str = "url";
    pub const NOTES: &str = "notes";
    pub const ORGANIZATION: &str = "organization";
    pub const BIRTHDAY: &str = "birthday";
    pub const PHOTO: &str = "photo";
}

/// A single parsed contact record.
///
/// Maps attribute names (interchange casing, e.g. `displayName`) to values.
/// The value shape for a given attribute is fixed by its interpreter and
/// never varies within or across records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Card {
    /// Attribute values keyed by attribute name.
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Card {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the record has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns the value stored under `attribute`, if any.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&AttributeValue> {
        self.attributes.get(attribute)
    }

    /// Returns the text value of `attribute`, if it holds one.
    #[must_use]
    pub fn text(&self, attribute: &str) -> Option<&str> {
        self.get(attribute).and_then(AttributeValue::as_text)
    }

    /// Returns the parameterized entries of `attribute`, if it holds any.
    #[must_use]
    pub fn entries(&self, attribute: &str) -> Option<&[TypedEntry]> {
        self.get(attribute).and_then(AttributeValue::as_entries)
    }

    /// Returns the formatted display name, if present.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.text(attributes::DISPLAY_NAME)
    }

    /// Inserts or replaces an attribute value.
    pub fn insert(&mut self, attribute: impl Into<String>, value: AttributeValue) {
        self.attributes.insert(attribute.into(), value);
    }

    /// Returns the entry list for `attribute`, creating it on first use.
    pub fn entries_mut(&mut self, attribute: &str) -> &mut Vec<TypedEntry> {
        let slot = self
            .attributes
            .entry(attribute.to_string())
            .or_insert_with(|| AttributeValue::Entries(Vec::new()));
        if !matches!(slot, AttributeValue::Entries(_)) {
            *slot = AttributeValue::Entries(Vec::new());
        }
        let AttributeValue::Entries(entries) = slot else {
            unreachable!("slot was just normalized to Entries")
        };
        entries
    }
}

/// A value stored under one attribute of a [`Card`].
///
/// Serializes untagged, so JSON output carries the interchange shapes
/// directly (a string, a list, an object, or an entry array).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Free text, possibly multi-line.
    Text(String),

    /// Comma-separated list of strings.
    List(Vec<String>),

    /// Structured name (N property).
    Name(StructuredName),

    /// Calendar date; `None` when the source value was malformed.
    Date(Option<NaiveDate>),

    /// Ordered parameterized entries (TEL, EMAIL, ADR).
    Entries(Vec<TypedEntry>),
}

impl AttributeValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a list if applicable.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the value as a structured name if applicable.
    #[must_use]
    pub fn as_name(&self) -> Option<&StructuredName> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the value as a date if one was successfully parsed.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => *date,
            _ => None,
        }
    }

    /// Returns the value as parameterized entries if applicable.
    #[must_use]
    pub fn as_entries(&self) -> Option<&[TypedEntry]> {
        match self {
            Self::Entries(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<StructuredName> for AttributeValue {
    fn from(name: StructuredName) -> Self {
        Self::Name(name)
    }
}

/// One entry of a parameterized property (TEL, EMAIL, ADR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedEntry {
    /// Whether this entry carried the preferred marker.
    pub is_preferred: bool,
    /// Remaining parameters, names lower-cased, preferred marker removed.
    /// Duplicate names collapse to the last value.
    pub parameters: BTreeMap<String, String>,
    /// The entry value.
    pub value: EntryValue,
}

/// The value carried by a [`TypedEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntryValue {
    /// Raw value text.
    Text(String),
    /// Positional address components (ADR only).
    Address(Address),
}

impl EntryValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Address(_) => None,
        }
    }

    /// Returns the value as an address if applicable.
    #[must_use]
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Self::Address(addr) => Some(addr),
            Self::Text(_) => None,
        }
    }
}
