//! Decoded certificate/CSR models and the parser capabilities that
//! produce them.
//!
//! ASN.1/DER decoding is not this crate's business: it is delegated to
//! whatever implements [`CertificateParser`] / [`CsrParser`]. The default
//! implementation lives in [`crate::x509`]; tests inject doubles.

use crate::extension::{ExtensionValue, SanEntry};
use thiserror::Error;

/// Failure reported by a parsing collaborator.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// PEM base64 framing was rejected by the decoder
    #[error("invalid PEM framing: {context}")]
    Pem { context: String },

    /// DER/ASN.1 structure couldn't be decoded
    #[error("couldn't decode {element}: {context}")]
    Decode {
        element: &'static str,
        context: String,
    },
}

/// The shape of a decoded subject public key, as an explicit tagged union
/// covering the shapes observed in the wild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyModel {
    /// Key exposing an RSA modulus; bit length when the decoder could
    /// compute it.
    Rsa { modulus_bits: Option<u32> },
    /// Key exposing elliptic-curve parameters. `curve_name` is the
    /// primary curve-name field; `curve_alt_name` the fallback used when
    /// the primary is absent.
    Ec {
        curve_name: Option<String>,
        curve_alt_name: Option<String>,
    },
    /// Key matching neither recognized shape.
    Unrecognized,
}

/// Decoded certificate fields, loosely typed the way the decoder hands
/// them over. Validity instants are raw ASN.1 time strings; normalization
/// belongs to [`crate::date`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CertificateModel {
    pub subject: String,
    pub issuer: String,
    pub version: u32,
    pub serial_number_hex: String,
    pub not_before: String,
    pub not_after: String,
    pub public_key: Option<PublicKeyModel>,
    /// Combined name, e.g. `SHA256withRSA`.
    pub signature_algorithm: String,
    pub key_usage: Option<String>,
    pub extended_key_usage: Option<ExtensionValue>,
    pub subject_alt_names: Option<ExtensionValue>,
}

/// Decoded certificate-signing-request fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsrModel {
    pub subject: String,
    /// Combined name, e.g. `SHA256withRSA`.
    pub signature_algorithm: String,
    pub extension_requests: Vec<CsrExtensionRequest>,
}

/// One entry of a CSR extension-request list: a name plus, for SAN
/// requests, the tagged values.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrExtensionRequest {
    pub name: String,
    pub san_entries: Option<Vec<SanEntry>>,
}

/// Extension-request name carrying subject alternative names.
pub const SUBJECT_ALT_NAME_REQUEST: &str = "subjectAltName";

/// Capability to decode a PEM certificate into a [`CertificateModel`].
///
/// Implementations are expected to be reentrant and stateless across
/// calls.
pub trait CertificateParser {
    fn parse_certificate(&self, pem: &str) -> Result<CertificateModel, ParseError>;
}

/// Capability to decode a PEM certification request into a [`CsrModel`].
pub trait CsrParser {
    fn parse_csr(&self, pem: &str) -> Result<CsrModel, ParseError>;
}
