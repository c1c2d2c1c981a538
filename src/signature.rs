//! Combined "hash-with-signature" algorithm name splitting.

/// Separator conventionally found in combined algorithm names such as
/// `SHA256withRSA`.
const SEPARATOR: &str = "with";

/// The two components of a combined signature algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureAlgorithmParts {
    pub signature: String,
    pub hash: String,
}

impl SignatureAlgorithmParts {
    /// Split a combined name the way the certificate path does: the hash
    /// is the text before `with`, while the signature field keeps the
    /// full original name. A name without the separator is used whole as
    /// the hash.
    pub fn for_certificate(name: &str) -> Self {
        let hash = match name.split(SEPARATOR).next() {
            Some(prefix) if !prefix.is_empty() => prefix,
            _ => name,
        };
        Self {
            signature: name.to_owned(),
            hash: hash.to_owned(),
        }
    }

    /// Split a combined name the way the CSR path does: the signature is
    /// the text *after* `with`, the hash the text before.
    ///
    /// Note the asymmetry with [`Self::for_certificate`], which reports
    /// the full combined name as the signature. Both shapes are part of
    /// the output contract and are pinned by tests.
    pub fn for_csr(name: &str) -> Self {
        let mut parts = name.split(SEPARATOR);
        let hash = match parts.next() {
            Some(prefix) if !prefix.is_empty() => prefix,
            _ => name,
        };
        let signature = match parts.next() {
            Some(suffix) if !suffix.is_empty() => suffix,
            _ => name,
        };
        Self {
            signature: signature.to_owned(),
            hash: hash.to_owned(),
        }
    }
}
