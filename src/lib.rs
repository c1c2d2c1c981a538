//! # pemscope
//!
//! Inspection of PEM-encoded credentials: X.509 certificates, certificate
//! signing requests and private-key blobs go in, a normalized,
//! display-ready [`ParsedRecord`] comes out.
//!
//! The crate is split between the extraction/normalization core
//! ([`date`], [`key`], [`signature`], [`extension`], [`inspect`]) and the
//! parsing collaborator behind the [`model::CertificateParser`] /
//! [`model::CsrParser`] capabilities. The default backend ([`x509`])
//! delegates ASN.1/DER decoding to the `x509-parser` crate; any other
//! implementation of the capabilities can be injected instead.
//!
//! ```
//! use pemscope::{ParsedRecord, PemInspector};
//!
//! let record = PemInspector::new().inspect("no pem markers here");
//! assert!(matches!(record, ParsedRecord::Error(e) if e.message == "Invalid PEM data"));
//! ```

pub mod date;
pub mod extension;
pub mod inspect;
pub mod key;
pub mod model;
pub mod record;
pub mod render;
pub mod signature;
pub mod x509;

pub use inspect::PemInspector;
pub use record::ParsedRecord;
