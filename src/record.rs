//! Normalized, display-ready parse results.
//!
//! A [`ParsedRecord`] is built fresh per inspection, is immutable once
//! returned, and carries no state beyond its fields. Serialization is
//! untagged and `None` fields are skipped, so field presence/absence in
//! the output mirrors the record exactly.

use crate::extension::FormattedExtension;
use serde::{Serialize, Serializer};
use std::fmt;

/// Result of inspecting one PEM input. Exactly one variant per input;
/// errors are carried in-band rather than thrown past the boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedRecord {
    Error(ErrorRecord),
    Certificate(CertificateRecord),
    PrivateKey(PrivateKeyRecord),
    Csr(CsrRecord),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    #[serde(rename = "error")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub subject: String,
    pub issuer: String,
    pub version: u32,
    pub serial_number: String,
    pub not_before: String,
    pub not_after: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_algorithm: Option<KeyAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_length: Option<KeyLength>,
    pub signature_algorithm: String,
    pub hash_algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<String>,
    #[serde(rename = "extKeyUsage", skip_serializing_if = "Option::is_none")]
    pub extended_key_usage: Option<FormattedExtension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_alt_names: Option<FormattedExtension>,
}

/// Private-key inputs are acknowledged but never parsed for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrivateKeyRecord {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for PrivateKeyRecord {
    fn default() -> Self {
        Self {
            kind: "Private Key".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrRecord {
    /// One-line DN form (`C=US, O=..., CN=...`), same as the certificate
    /// record. Deliberately a plain string, not a JSON-quoted
    /// serialization of the structured name (see DESIGN.md decisions).
    pub subject: String,
    pub signature_algorithm: String,
    pub hash_algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_alt_names: Option<FormattedExtension>,
}

/// Public-key algorithm label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyAlgorithm {
    #[serde(rename = "RSA")]
    Rsa,
    #[serde(rename = "ECDSA")]
    Ecdsa,
    Unknown,
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Rsa => "RSA",
            Self::Ecdsa => "ECDSA",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Public-key strength: a bit count, or the literal `Unknown` when the
/// key shape is recognized but its strength isn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLength {
    Bits(u32),
    Unknown,
}

impl Serialize for KeyLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bits(bits) => serializer.serialize_u32(*bits),
            Self::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

impl fmt::Display for KeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bits(bits) => write!(f, "{bits}"),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}
