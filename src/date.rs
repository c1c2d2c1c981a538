//! ASN.1 validity timestamp normalization.

/// Canonicalize an ASN.1 time string into `YYYY-MM-DD HH:MM:SS`.
///
/// Handles both encodings found in certificate validity fields: UTCTime
/// (`YYMMDDHHMMSS`, two-digit year resolved with the RFC 5280 windowing
/// rule) and GeneralizedTime (`YYYYMMDDHHMMSS`, year taken verbatim). A
/// single trailing `Z` is stripped beforehand.
///
/// Anything else (including the empty string) is returned unchanged: an
/// unrecognized format is surfaced as-is for visibility, not treated as an
/// error at this layer.
pub fn normalize_date(raw: &str) -> String {
    let digits = raw.strip_suffix('Z').unwrap_or(raw);

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_owned();
    }

    match digits.len() {
        12 => {
            let yy = two_digits(digits.as_bytes());
            // UTCTime convention: 00-49 map to 2000s, 50-99 to 1900s.
            let year = if yy < 50 { 2000 + yy } else { 1900 + yy };
            format!(
                "{:04}-{}-{} {}:{}:{}",
                year,
                &digits[2..4],
                &digits[4..6],
                &digits[6..8],
                &digits[8..10],
                &digits[10..12]
            )
        }
        14 => format!(
            "{}-{}-{} {}:{}:{}",
            &digits[..4],
            &digits[4..6],
            &digits[6..8],
            &digits[8..10],
            &digits[10..12],
            &digits[12..14]
        ),
        _ => raw.to_owned(),
    }
}

fn two_digits(bytes: &[u8]) -> u16 {
    u16::from(bytes[0] - b'0') * 10 + u16::from(bytes[1] - b'0')
}
