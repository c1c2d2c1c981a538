//! Record renderers for the CLI.

use crate::record::{CertificateRecord, CsrRecord, ParsedRecord};
use std::fmt::Write;

/// Turns a parsed record into printable output.
pub trait RenderRecord {
    fn render(&self, record: &ParsedRecord) -> String;
}

/// Human-oriented `field: value` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

/// Pretty-printed JSON, one object per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl RenderRecord for TextRenderer {
    fn render(&self, record: &ParsedRecord) -> String {
        match record {
            ParsedRecord::Error(err) => format!("Error: {}", err.message),
            ParsedRecord::PrivateKey(key) => format!("Type: {}", key.kind),
            ParsedRecord::Certificate(cert) => render_certificate(cert),
            ParsedRecord::Csr(csr) => render_csr(csr),
        }
    }
}

impl RenderRecord for JsonRenderer {
    fn render(&self, record: &ParsedRecord) -> String {
        // Records serialize infallibly: maps are string-keyed and every
        // field is Serialize.
        serde_json::to_string_pretty(record).unwrap_or_default()
    }
}

fn render_certificate(cert: &CertificateRecord) -> String {
    let mut out = String::new();
    line(&mut out, "Subject", &cert.subject);
    line(&mut out, "Issuer", &cert.issuer);
    line(&mut out, "Version", &cert.version.to_string());
    line(&mut out, "Serial Number", &cert.serial_number);
    line(&mut out, "Not Before", &cert.not_before);
    line(&mut out, "Not After", &cert.not_after);
    if let Some(algorithm) = cert.public_key_algorithm {
        line(&mut out, "Public Key Algorithm", &algorithm.to_string());
    }
    if let Some(length) = cert.public_key_length {
        line(&mut out, "Public Key Length", &length.to_string());
    }
    line(&mut out, "Signature Algorithm", &cert.signature_algorithm);
    line(&mut out, "Hash Algorithm", &cert.hash_algorithm);
    if let Some(usage) = &cert.key_usage {
        line(&mut out, "Key Usage", usage);
    }
    if let Some(eku) = &cert.extended_key_usage {
        line(&mut out, "Extended Key Usage", &eku.to_string());
    }
    if let Some(san) = &cert.subject_alt_names {
        line(&mut out, "Subject Alternative Names", &san.to_string());
    }
    out
}

fn render_csr(csr: &CsrRecord) -> String {
    let mut out = String::new();
    line(&mut out, "Subject", &csr.subject);
    line(&mut out, "Signature Algorithm", &csr.signature_algorithm);
    line(&mut out, "Hash Algorithm", &csr.hash_algorithm);
    if let Some(san) = &csr.subject_alt_names {
        line(&mut out, "Subject Alternative Names", &san.to_string());
    }
    out
}

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label}: {value}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::FormattedExtension;
    use crate::record::{ErrorRecord, KeyAlgorithm, KeyLength, PrivateKeyRecord};
    use pretty_assertions::assert_eq;

    #[test]
    fn error_record_as_text() {
        let record = ParsedRecord::Error(ErrorRecord {
            message: "Invalid PEM data".to_owned(),
        });
        assert_eq!(TextRenderer.render(&record), "Error: Invalid PEM data");
    }

    #[test]
    fn private_key_as_text() {
        let record = ParsedRecord::PrivateKey(PrivateKeyRecord::default());
        assert_eq!(TextRenderer.render(&record), "Type: Private Key");
    }

    #[test]
    fn certificate_text_omits_absent_fields() {
        let record = ParsedRecord::Certificate(CertificateRecord {
            subject: "CN=a".to_owned(),
            issuer: "CN=ca".to_owned(),
            version: 3,
            serial_number: "0a".to_owned(),
            not_before: "2024-01-01 00:00:00".to_owned(),
            not_after: "2025-01-01 00:00:00".to_owned(),
            public_key_algorithm: Some(KeyAlgorithm::Ecdsa),
            public_key_length: Some(KeyLength::Unknown),
            signature_algorithm: "SHA256withECDSA".to_owned(),
            hash_algorithm: "SHA256".to_owned(),
            key_usage: None,
            extended_key_usage: None,
            subject_alt_names: Some(FormattedExtension::List(vec![
                "DNS: a.example".to_owned(),
                "DNS: b.example".to_owned(),
            ])),
        });
        let text = TextRenderer.render(&record);
        assert!(text.contains("Public Key Length: Unknown\n"));
        assert!(text.contains("Subject Alternative Names: DNS: a.example, DNS: b.example\n"));
        assert!(!text.contains("Key Usage:"));
    }

    #[test]
    fn json_renderer_emits_error_object() {
        let record = ParsedRecord::Error(ErrorRecord {
            message: "Invalid PEM data".to_owned(),
        });
        let json = JsonRenderer.render(&record);
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&json).unwrap(),
            serde_json::json!({ "error": "Invalid PEM data" })
        );
    }
}
