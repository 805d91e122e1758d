//! Structured sub-values (name and address components).
//!
//! These types represent the positional `;`-separated property values of the
//! interchange format.

use serde::Serialize;

/// Structured name (N property).
///
/// Components are positional in the source; missing trailing components
/// default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredName {
    /// Family name (surname).
    pub surname: String,
    /// Given name.
    pub name: String,
    /// Additional (middle) name.
    pub additional_name: String,
    /// Honorific prefix (e.g., "Mr.", "Dr.").
    pub prefix: String,
    /// Honorific suffix (e.g., "Jr.", "M.D.").
    pub suffix: String,
}

impl StructuredName {
    /// Creates an empty structured name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surname.is_empty()
            && self.name.is_empty()
            && self.additional_name.is_empty()
            && self.prefix.is_empty()
            && self.suffix.is_empty()
    }

    /// Formats as a display name (given name + surname).
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if !self.name.is_empty() {
            parts.push(self.name.as_str());
        }
        if !self.surname.is_empty() {
            parts.push(self.surname.as_str());
        }
        parts.join(" ")
    }
}

/// Postal address (ADR property entry value).
///
/// Seven positional components. The first two stay absent (`None`) when the
/// source line had fewer segments; the remaining five default to the empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Post office box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_office_box: Option<String>,
    /// Extended address (apartment or suite number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Street address.
    pub street: String,
    /// City or locality.
    pub city: String,
    /// Region (state or province).
    pub region: String,
    /// Postal code.
    pub postal_code: String,
    /// Country name.
    pub country: String,
}

impl Address {
    /// Creates an empty address.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether every component is absent or empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.post_office_box.as_deref().is_none_or(str::is_empty)
            && self.number.as_deref().is_none_or(str::is_empty)
            && self.street.is_empty()
            && self.city.is_empty()
            && self.region.is_empty()
            && self.postal_code.is_empty()
            && self.country.is_empty()
    }

    /// Formats as a single-line address.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            self.street.as_str(),
            self.city.as_str(),
            self.region.as_str(),
            self.postal_code.as_str(),
            self.country.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
    }
}
