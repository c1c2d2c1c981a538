//! Public-key descriptor extraction.

use crate::model::PublicKeyModel;
use crate::record::{KeyAlgorithm, KeyLength};

/// Bit strengths for the named curves the tool recognizes.
const ECDSA_KEY_LENGTHS: &[(&str, u32)] = &[
    ("secp256r1", 256),
    ("secp384r1", 384),
    ("secp521r1", 521),
];

/// Algorithm label and strength derived from a decoded public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDescriptor {
    pub algorithm: KeyAlgorithm,
    /// `None` means the length is genuinely not reportable for this key
    /// shape; `Some(KeyLength::Unknown)` means the shape is known but the
    /// strength isn't (e.g. ECDSA on an unrecognized curve).
    pub length: Option<KeyLength>,
}

/// Derive an algorithm label and bit length from a decoded public key.
pub fn describe_key(key: &PublicKeyModel) -> KeyDescriptor {
    match key {
        PublicKeyModel::Rsa { modulus_bits } => KeyDescriptor {
            algorithm: KeyAlgorithm::Rsa,
            length: modulus_bits.map(KeyLength::Bits),
        },
        PublicKeyModel::Ec {
            curve_name,
            curve_alt_name,
        } => {
            let name = curve_name.as_deref().or(curve_alt_name.as_deref());
            let length = name
                .and_then(|name| {
                    ECDSA_KEY_LENGTHS
                        .iter()
                        .find(|(known, _)| *known == name)
                        .map(|(_, bits)| KeyLength::Bits(*bits))
                })
                .unwrap_or(KeyLength::Unknown);
            KeyDescriptor {
                algorithm: KeyAlgorithm::Ecdsa,
                length: Some(length),
            }
        }
        PublicKeyModel::Unrecognized => KeyDescriptor {
            algorithm: KeyAlgorithm::Unknown,
            length: None,
        },
    }
}
