//! Key-usage, extended-key-usage and subject-alternative-name
//! normalization.
//!
//! Extension values reach this layer in one of three shapes depending on
//! how the decoded model surfaced them; [`ExtensionValue`] makes the
//! shapes an explicit tagged union so nothing silently falls through.

use serde::Serialize;
use std::fmt;

/// An extension value as surfaced by the decoded model.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionValue {
    /// Wrapper exposing an ordered array of structured entries.
    Entries(Vec<SanEntry>),
    /// Plain array of strings.
    List(Vec<String>),
    /// Plain scalar string.
    Text(String),
}

/// One subject-alternative-name entry, tagged by identity kind.
///
/// Serializes externally tagged, e.g. `{"dns":"example.com"}`, which is
/// also the generic representation used for entries on the certificate
/// path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SanEntry {
    Dns(String),
    Rfc822(String),
    Uri(String),
    Ip(String),
    Other { tag: String, value: String },
}

impl SanEntry {
    fn serialized(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

/// A normalized extension value ready for display: either an ordered list
/// or a scalar passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormattedExtension {
    List(Vec<String>),
    Text(String),
}

impl fmt::Display for FormattedExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(items) => write!(f, "{}", items.join(", ")),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Normalize an extension value, preserving entry order.
pub fn format_extension(value: &ExtensionValue) -> FormattedExtension {
    match value {
        ExtensionValue::Entries(entries) => {
            FormattedExtension::List(entries.iter().map(SanEntry::serialized).collect())
        }
        ExtensionValue::List(items) => FormattedExtension::List(items.clone()),
        ExtensionValue::Text(text) => FormattedExtension::Text(text.clone()),
    }
}

/// Normalize an extended-key-usage value.
///
/// A scalar holding a serialized string array is re-expressed as an
/// ordered list; a scalar that doesn't parse as one is passed through
/// unchanged (degraded detail, not an error).
pub fn format_extended_key_usage(value: &ExtensionValue) -> FormattedExtension {
    match value {
        ExtensionValue::Text(text) => match serde_json::from_str::<Vec<String>>(text) {
            Ok(items) => FormattedExtension::List(items),
            Err(_) => FormattedExtension::Text(text.clone()),
        },
        other => format_extension(other),
    }
}

/// Map CSR subject-alternative-name entries by tag: `DNS: v`, `Email: v`,
/// `URI: v`, `IP: v`; anything else keeps its generic serialized form.
/// Original order is significant and preserved.
pub fn format_csr_san(entries: &[SanEntry]) -> FormattedExtension {
    FormattedExtension::List(
        entries
            .iter()
            .map(|entry| match entry {
                SanEntry::Dns(v) => format!("DNS: {v}"),
                SanEntry::Rfc822(v) => format!("Email: {v}"),
                SanEntry::Uri(v) => format!("URI: {v}"),
                SanEntry::Ip(v) => format!("IP: {v}"),
                other => other.serialized(),
            })
            .collect(),
    )
}
