//! Character encodings used by length-prefixed strings.
//!
//! `string` payloads are one byte per character (ASCII), `wstring` payloads
//! are two bytes per UTF-16 code unit, always little-endian. Only the
//! character count in front of a payload follows the buffer's byte order.

use crate::endian::Endian;
use crate::primitive::Primitive;

/// Byte written in place of a character ASCII cannot represent.
pub const ASCII_REPLACEMENT: u8 = b'?';

/// Byte order of UTF-16 code units inside a `wstring` payload.
pub const UTF16_UNIT_ORDER: Endian = Endian::Little;

/// Encodes a string as ASCII, one byte per character.
///
/// Characters above U+007F become [`ASCII_REPLACEMENT`].
///
/// # Example
///
/// ```
/// use bytecursor_buffers::ascii;
///
/// assert_eq!(ascii("hello"), b"hello".to_vec());
/// assert_eq!(ascii("né"), b"n?".to_vec());
/// ```
pub fn ascii(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { ASCII_REPLACEMENT })
        .collect()
}

/// Decodes ASCII bytes; bytes above 0x7F become `?`.
pub fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii() {
                b as char
            } else {
                ASCII_REPLACEMENT as char
            }
        })
        .collect()
}

/// Encodes a string as little-endian UTF-16 code units.
///
/// # Example
///
/// ```
/// use bytecursor_buffers::utf16;
///
/// assert_eq!(utf16("hi"), vec![b'h', 0, b'i', 0]);
/// ```
pub fn utf16(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.encode(UTF16_UNIT_ORDER));
    }
    out
}

/// Decodes little-endian UTF-16 code units.
///
/// Unpaired surrogates decode as U+FFFD. A trailing odd byte is ignored.
pub fn decode_utf16(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::decode(pair, UTF16_UNIT_ORDER))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Splits an encoded payload into its character count and the bytes that go
/// on the wire, truncating to `u32::MAX` characters of `unit` bytes each.
pub(crate) fn prefixed(payload: &[u8], unit: usize) -> (u32, &[u8]) {
    let count = (payload.len() / unit).min(u32::MAX as usize);
    (count as u32, &payload[..count * unit])
}
