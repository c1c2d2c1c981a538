//! End-to-end inspection over real OpenSSL-generated PEM fixtures.

use pemscope::extension::FormattedExtension;
use pemscope::record::{KeyAlgorithm, KeyLength, ParsedRecord, PrivateKeyRecord};
use pemscope::PemInspector;
use pretty_assertions::assert_eq;

const RSA_CERT: &str = include_str!("data/rsa_cert.pem");
const RSA_KEY: &str = include_str!("data/rsa_key.pem");
const EC_KEY: &str = include_str!("data/ec_key.pem");
const EC224_KEY: &str = include_str!("data/ec224_key.pem");
const ED_KEY: &str = include_str!("data/ed_key.pem");
const EC_CERT: &str = include_str!("data/ec_cert.pem");
const EC224_CERT: &str = include_str!("data/ec224_cert.pem");
const ED_CERT: &str = include_str!("data/ed_cert.pem");
const CSR: &str = include_str!("data/csr.pem");

fn certificate(pem: &str) -> pemscope::record::CertificateRecord {
    match PemInspector::new().inspect(pem) {
        ParsedRecord::Certificate(cert) => cert,
        other => panic!("expected certificate record, got {other:?}"),
    }
}

#[test]
fn rsa_certificate_fields() {
    let cert = certificate(RSA_CERT);

    assert_eq!(cert.subject, "C=US, ST=California, O=Example Corp, CN=example.com");
    assert_eq!(cert.issuer, "C=US, ST=California, O=Example Corp, CN=example.com");
    assert_eq!(cert.version, 3);
    assert_eq!(cert.serial_number, "0a95ac2b07b9f55e43d78ff2c6a2dfdcd7a1749d");
    assert_eq!(cert.not_before, "2026-08-29 19:20:22");
    // GeneralizedTime path: validity past 2049.
    assert_eq!(cert.not_after, "2054-01-13 19:20:22");
    assert_eq!(cert.public_key_algorithm, Some(KeyAlgorithm::Rsa));
    assert_eq!(cert.public_key_length, Some(KeyLength::Bits(2048)));
    assert_eq!(cert.signature_algorithm, "SHA256withRSA");
    assert_eq!(cert.hash_algorithm, "SHA256");
    assert_eq!(
        cert.key_usage.as_deref(),
        Some("digitalSignature, keyEncipherment")
    );
    assert_eq!(
        cert.extended_key_usage,
        Some(FormattedExtension::List(vec![
            "serverAuth".to_owned(),
            "clientAuth".to_owned(),
        ]))
    );
    assert_eq!(
        cert.subject_alt_names,
        Some(FormattedExtension::List(vec![
            r#"{"dns":"example.com"}"#.to_owned(),
            r#"{"dns":"www.example.com"}"#.to_owned(),
            r#"{"rfc822":"admin@example.com"}"#.to_owned(),
            r#"{"uri":"https://example.com"}"#.to_owned(),
            r#"{"ip":"192.0.2.10"}"#.to_owned(),
        ]))
    );
}

#[test]
fn ec_certificate_reports_curve_strength() {
    let cert = certificate(EC_CERT);

    assert_eq!(cert.subject, "CN=ec.example.com");
    assert_eq!(cert.not_before, "2026-08-29 19:20:22");
    assert_eq!(cert.not_after, "2027-08-29 19:20:22");
    assert_eq!(cert.public_key_algorithm, Some(KeyAlgorithm::Ecdsa));
    assert_eq!(cert.public_key_length, Some(KeyLength::Bits(256)));
    assert_eq!(cert.signature_algorithm, "SHA256withECDSA");
    assert_eq!(cert.hash_algorithm, "SHA256");
}

#[test]
fn ec_certificate_on_unrecognized_curve_reports_unknown_length() {
    let cert = certificate(EC224_CERT);

    assert_eq!(cert.subject, "CN=small.example.com");
    assert_eq!(cert.public_key_algorithm, Some(KeyAlgorithm::Ecdsa));
    assert_eq!(cert.public_key_length, Some(KeyLength::Unknown));
}

#[test]
fn ed25519_certificate_has_unknown_key_and_undivided_signature_name() {
    let cert = certificate(ED_CERT);

    assert_eq!(cert.subject, "CN=ed.example.com");
    assert_eq!(cert.public_key_algorithm, Some(KeyAlgorithm::Unknown));
    assert_eq!(cert.public_key_length, None);
    // No "with" separator in the name: both parts carry the full name.
    assert_eq!(cert.signature_algorithm, "Ed25519");
    assert_eq!(cert.hash_algorithm, "Ed25519");
}

#[test]
fn csr_fields_use_reversed_signature_split() {
    let csr = match PemInspector::new().inspect(CSR) {
        ParsedRecord::Csr(csr) => csr,
        other => panic!("expected csr record, got {other:?}"),
    };

    assert_eq!(csr.subject, "C=US, O=Example Corp, CN=csr.example.com");
    assert_eq!(csr.signature_algorithm, "RSA");
    assert_eq!(csr.hash_algorithm, "SHA256");
    assert_eq!(
        csr.subject_alt_names,
        Some(FormattedExtension::List(vec![
            "DNS: csr.example.com".to_owned(),
            "Email: ops@example.com".to_owned(),
        ]))
    );
}

#[test]
fn private_keys_are_acknowledged_but_not_parsed() {
    for key in [RSA_KEY, EC_KEY, EC224_KEY, ED_KEY] {
        let record = PemInspector::new().inspect(key);
        assert_eq!(record, ParsedRecord::PrivateKey(PrivateKeyRecord::default()));
    }
}

#[test]
fn corrupted_certificate_yields_error_record() {
    let corrupted =
        "-----BEGIN CERTIFICATE-----\nnot base64 at all!!\n-----END CERTIFICATE-----\n";
    match PemInspector::new().inspect(corrupted) {
        ParsedRecord::Error(err) => assert!(!err.message.is_empty()),
        other => panic!("expected error record, got {other:?}"),
    }
}

#[test]
fn unmarked_input_yields_invalid_pem_error() {
    match PemInspector::new().inspect("just some text") {
        ParsedRecord::Error(err) => assert_eq!(err.message, "Invalid PEM data"),
        other => panic!("expected error record, got {other:?}"),
    }
}

#[test]
fn certificate_json_shape() {
    let record = PemInspector::new().inspect(EC_CERT);
    let value: serde_json::Value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["subject"], "CN=ec.example.com");
    assert_eq!(value["publicKeyAlgorithm"], "ECDSA");
    assert_eq!(value["publicKeyLength"], 256);
    assert_eq!(value["signatureAlgorithm"], "SHA256withECDSA");
    assert_eq!(value["hashAlgorithm"], "SHA256");
    assert!(value.get("keyUsage").is_none());
}
