// base32.rs
// RFC 4648 Base32 decoding for shared secrets. Trailing bits that do not fill
// a whole byte are dropped instead of rejected.

use thiserror::Error;

pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base32Error {
    #[error("invalid base32 character: {0:?}")]
    InvalidCharacter(char),
}

/// Decode a (case-insensitive, optionally padded) Base32 string into raw bytes.
///
/// The input is uppercased, trailing `=` are removed and whitespace is
/// stripped before decoding. Every remaining character contributes 5 bits,
/// MSB first; one byte is emitted per complete group of 8 bits.
pub fn decode(input: &str) -> Result<Vec<u8>, Base32Error> {
    let upper = input.to_uppercase();
    let clean: String = upper
        .trim_end_matches('=')
        .chars()
        .filter(|c| !is_space(*c))
        .collect();

    let mut out = Vec::with_capacity(clean.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for c in clean.chars() {
        let value = char_value(c).ok_or(Base32Error::InvalidCharacter(c))?;
        buffer = (buffer << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(out)
}

/// Whitespace as stripped from secrets: Unicode white space plus the BOM, minus NEL.
pub fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn char_value(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        '2'..='7' => Some(c as u8 - b'2' + 26),
        _ => None,
    }
}
