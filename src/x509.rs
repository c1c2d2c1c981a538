//! Default parsing collaborator backed by the `x509-parser` crate.
//!
//! This module is the only place that knows about the decoder's types:
//! everything it hands back is expressed in the loosely-typed shapes of
//! [`crate::model`], with validity instants re-encoded to their raw ASN.1
//! string forms so the date normalizer owns all windowing logic.

use log::debug;
use x509_parser::certification_request::X509CertificationRequest;
use x509_parser::extensions::{ExtendedKeyUsage, GeneralName, KeyUsage, ParsedExtension};
use x509_parser::oid_registry::Oid;
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::FromDer;
use x509_parser::public_key::PublicKey;
use x509_parser::time::ASN1Time;
use x509_parser::x509::SubjectPublicKeyInfo;

use crate::extension::{ExtensionValue, SanEntry};
use crate::model::{
    CertificateModel, CertificateParser, CsrExtensionRequest, CsrModel, CsrParser, ParseError,
    PublicKeyModel, SUBJECT_ALT_NAME_REQUEST,
};

/// Stateless decoder: one PEM + DER decode per call, nothing retained
/// between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct X509Backend;

impl CertificateParser for X509Backend {
    fn parse_certificate(&self, pem: &str) -> Result<CertificateModel, ParseError> {
        let (_, pem) = parse_x509_pem(pem.as_bytes()).map_err(|e| ParseError::Pem {
            context: e.to_string(),
        })?;
        let cert = pem.parse_x509().map_err(|e| ParseError::Decode {
            element: "certificate",
            context: e.to_string(),
        })?;

        let mut key_usage = None;
        let mut extended_key_usage = None;
        let mut subject_alt_names = None;
        for ext in cert.extensions() {
            match ext.parsed_extension() {
                ParsedExtension::KeyUsage(usage) => {
                    key_usage = Some(key_usage_names(usage).join(", "));
                }
                ParsedExtension::ExtendedKeyUsage(eku) => {
                    // Surfaced as a serialized array: the shape the
                    // extension formatter re-parses into an ordered list.
                    extended_key_usage = serde_json::to_string(&extended_key_usage_names(eku))
                        .ok()
                        .map(ExtensionValue::Text);
                }
                ParsedExtension::SubjectAlternativeName(san) => {
                    subject_alt_names = Some(ExtensionValue::Entries(
                        san.general_names.iter().map(san_entry).collect(),
                    ));
                }
                _ => {}
            }
        }

        Ok(CertificateModel {
            subject: cert.subject().to_string(),
            issuer: cert.issuer().to_string(),
            version: cert.version().0 + 1,
            serial_number_hex: hex::encode(cert.raw_serial()),
            not_before: raw_asn1_time(cert.validity().not_before),
            not_after: raw_asn1_time(cert.validity().not_after),
            public_key: Some(public_key_model(cert.public_key())),
            signature_algorithm: signature_algorithm_name(&cert.signature_algorithm.algorithm),
            key_usage,
            extended_key_usage,
            subject_alt_names,
        })
    }
}

impl CsrParser for X509Backend {
    fn parse_csr(&self, pem: &str) -> Result<CsrModel, ParseError> {
        let (_, pem) = parse_x509_pem(pem.as_bytes()).map_err(|e| ParseError::Pem {
            context: e.to_string(),
        })?;
        let (_, csr) =
            X509CertificationRequest::from_der(&pem.contents).map_err(|e| ParseError::Decode {
                element: "certification request",
                context: e.to_string(),
            })?;

        let mut extension_requests = Vec::new();
        if let Some(requested) = csr.requested_extensions() {
            for parsed in requested {
                extension_requests.push(extension_request(parsed));
            }
        }

        Ok(CsrModel {
            subject: csr.certification_request_info.subject.to_string(),
            signature_algorithm: signature_algorithm_name(&csr.signature_algorithm.algorithm),
            extension_requests,
        })
    }
}

fn extension_request(parsed: &ParsedExtension) -> CsrExtensionRequest {
    match parsed {
        ParsedExtension::SubjectAlternativeName(san) => CsrExtensionRequest {
            name: SUBJECT_ALT_NAME_REQUEST.to_owned(),
            san_entries: Some(san.general_names.iter().map(san_entry).collect()),
        },
        ParsedExtension::KeyUsage(_) => named_request("keyUsage"),
        ParsedExtension::ExtendedKeyUsage(_) => named_request("extKeyUsage"),
        ParsedExtension::BasicConstraints(_) => named_request("basicConstraints"),
        other => {
            debug!("unhandled requested extension: {other:?}");
            named_request("unsupported")
        }
    }
}

fn named_request(name: &str) -> CsrExtensionRequest {
    CsrExtensionRequest {
        name: name.to_owned(),
        san_entries: None,
    }
}

fn public_key_model(spki: &SubjectPublicKeyInfo<'_>) -> PublicKeyModel {
    match spki.parsed() {
        Ok(PublicKey::RSA(rsa)) => PublicKeyModel::Rsa {
            modulus_bits: Some(rsa.key_size() as u32),
        },
        Ok(PublicKey::EC(_)) => {
            let oid = spki
                .algorithm
                .parameters
                .as_ref()
                .and_then(|params| params.as_oid().ok());
            PublicKeyModel::Ec {
                curve_name: oid
                    .as_ref()
                    .and_then(named_curve)
                    .map(str::to_owned),
                curve_alt_name: oid.as_ref().map(Oid::to_id_string),
            }
        }
        Ok(other) => {
            debug!("public key shape not recognized: {other:?}");
            PublicKeyModel::Unrecognized
        }
        Err(e) => {
            debug!("public key not parseable: {e}");
            PublicKeyModel::Unrecognized
        }
    }
}

/// Named-curve OIDs mapped to the names the strength table understands.
fn named_curve(oid: &Oid) -> Option<&'static str> {
    match oid.to_id_string().as_str() {
        "1.2.840.10045.3.1.7" => Some("secp256r1"),
        "1.3.132.0.34" => Some("secp384r1"),
        "1.3.132.0.35" => Some("secp521r1"),
        "1.3.132.0.33" => Some("secp224r1"),
        "1.3.132.0.10" => Some("secp256k1"),
        _ => None,
    }
}

/// Combined hash-with-signature names for the signature OIDs in common
/// use; anything else keeps its dotted form.
fn signature_algorithm_name(oid: &Oid) -> String {
    let name = match oid.to_id_string().as_str() {
        "1.2.840.113549.1.1.4" => "MD5withRSA",
        "1.2.840.113549.1.1.5" => "SHA1withRSA",
        "1.2.840.113549.1.1.11" => "SHA256withRSA",
        "1.2.840.113549.1.1.12" => "SHA384withRSA",
        "1.2.840.113549.1.1.13" => "SHA512withRSA",
        "1.2.840.113549.1.1.14" => "SHA224withRSA",
        "1.2.840.113549.1.1.10" => "RSASSA-PSS",
        "1.2.840.10045.4.1" => "SHA1withECDSA",
        "1.2.840.10045.4.3.1" => "SHA224withECDSA",
        "1.2.840.10045.4.3.2" => "SHA256withECDSA",
        "1.2.840.10045.4.3.3" => "SHA384withECDSA",
        "1.2.840.10045.4.3.4" => "SHA512withECDSA",
        "1.3.101.112" => "Ed25519",
        "1.3.101.113" => "Ed448",
        _ => return oid.to_id_string(),
    };
    name.to_owned()
}

/// Re-encode a decoded instant to its raw ASN.1 time string. Validity
/// dates up to 2049 travel as UTCTime, later ones as GeneralizedTime
/// (RFC 5280); the normalizer downstream resolves both.
fn raw_asn1_time(time: ASN1Time) -> String {
    let dt = time.to_datetime();
    let (year, month, day) = (dt.year(), u8::from(dt.month()), dt.day());
    let (hour, minute, second) = (dt.hour(), dt.minute(), dt.second());
    if (1950..2050).contains(&year) {
        format!(
            "{:02}{month:02}{day:02}{hour:02}{minute:02}{second:02}Z",
            year % 100
        )
    } else {
        format!("{year:04}{month:02}{day:02}{hour:02}{minute:02}{second:02}Z")
    }
}

fn san_entry(name: &GeneralName) -> SanEntry {
    match name {
        GeneralName::DNSName(v) => SanEntry::Dns((*v).to_owned()),
        GeneralName::RFC822Name(v) => SanEntry::Rfc822((*v).to_owned()),
        GeneralName::URI(v) => SanEntry::Uri((*v).to_owned()),
        GeneralName::IPAddress(bytes) => SanEntry::Ip(format_ip(bytes)),
        GeneralName::DirectoryName(dir) => SanEntry::Other {
            tag: "dirName".to_owned(),
            value: dir.to_string(),
        },
        other => SanEntry::Other {
            tag: "other".to_owned(),
            value: format!("{other:?}"),
        },
    }
}

fn format_ip(bytes: &[u8]) -> String {
    match bytes.len() {
        4 => bytes
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join("."),
        16 => bytes
            .chunks(2)
            .map(|pair| format!("{:x}", (u16::from(pair[0]) << 8) | u16::from(pair[1])))
            .collect::<Vec<_>>()
            .join(":"),
        _ => hex::encode(bytes),
    }
}

fn key_usage_names(usage: &KeyUsage) -> Vec<&'static str> {
    let mut names = Vec::new();
    if usage.digital_signature() {
        names.push("digitalSignature");
    }
    if usage.non_repudiation() {
        names.push("nonRepudiation");
    }
    if usage.key_encipherment() {
        names.push("keyEncipherment");
    }
    if usage.data_encipherment() {
        names.push("dataEncipherment");
    }
    if usage.key_agreement() {
        names.push("keyAgreement");
    }
    if usage.key_cert_sign() {
        names.push("keyCertSign");
    }
    if usage.crl_sign() {
        names.push("crlSign");
    }
    if usage.encipher_only() {
        names.push("encipherOnly");
    }
    if usage.decipher_only() {
        names.push("decipherOnly");
    }
    names
}

fn extended_key_usage_names(eku: &ExtendedKeyUsage) -> Vec<String> {
    let mut names = Vec::new();
    if eku.any {
        names.push("anyExtendedKeyUsage".to_owned());
    }
    if eku.server_auth {
        names.push("serverAuth".to_owned());
    }
    if eku.client_auth {
        names.push("clientAuth".to_owned());
    }
    if eku.code_signing {
        names.push("codeSigning".to_owned());
    }
    if eku.email_protection {
        names.push("emailProtection".to_owned());
    }
    if eku.time_stamping {
        names.push("timeStamping".to_owned());
    }
    if eku.ocsp_signing {
        names.push("ocspSigning".to_owned());
    }
    for oid in &eku.other {
        names.push(oid.to_id_string());
    }
    names
}
