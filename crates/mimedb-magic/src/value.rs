//! Textual rule value decoding
//!
//! Magic rule values arrive as text, either from XML attributes or from a
//! cache blob's string table. This module turns that text into the typed
//! byte sequences the evaluator compares against buffers:
//!
//! - `string` values go through backslash-escape expansion
//! - numeric values parse in base 10/8/16 and are encoded at their
//!   declared width in the byte order the match type implies
//! - string masks are hex-encoded byte sequences with a `0x` prefix
//!
//! Decoding is the only place where byte-order handling happens; the
//! evaluator only ever sees finished byte sequences.

use crate::error::{MagicError, Result};

/// Match value type from a magic rule definition.
///
/// Determines the decode width and whether endianness swapping applies.
/// `Host*` types use the native byte order of the machine evaluating the
/// rule; `Big*`/`Little*` force that order regardless of host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicMatchType {
    /// Escaped literal byte string (variable width)
    String,
    /// Single byte
    Byte,
    /// 16-bit value in host byte order
    Host16,
    /// 32-bit value in host byte order
    Host32,
    /// 16-bit big-endian value
    Big16,
    /// 32-bit big-endian value
    Big32,
    /// 16-bit little-endian value
    Little16,
    /// 32-bit little-endian value
    Little32,
}

impl MagicMatchType {
    /// Resolve a type keyword from a rule definition.
    ///
    /// Unrecognized keywords fall back to `String`. This leniency is
    /// deliberate compatibility behavior: upstream shared-mime-info
    /// processors treat unknown types the same way, so databases that use
    /// newer type names still load.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "string" => MagicMatchType::String,
            "byte" => MagicMatchType::Byte,
            "host16" => MagicMatchType::Host16,
            "host32" => MagicMatchType::Host32,
            "big16" => MagicMatchType::Big16,
            "big32" => MagicMatchType::Big32,
            "little16" => MagicMatchType::Little16,
            "little32" => MagicMatchType::Little32,
            _ => MagicMatchType::String,
        }
    }

    /// Width in bytes for numeric types, `None` for `String`
    pub fn numeric_width(self) -> Option<usize> {
        match self {
            MagicMatchType::String => None,
            MagicMatchType::Byte => Some(1),
            MagicMatchType::Host16 | MagicMatchType::Big16 | MagicMatchType::Little16 => Some(2),
            MagicMatchType::Host32 | MagicMatchType::Big32 | MagicMatchType::Little32 => Some(4),
        }
    }

    /// Keyword form, for error messages
    pub fn name(self) -> &'static str {
        match self {
            MagicMatchType::String => "string",
            MagicMatchType::Byte => "byte",
            MagicMatchType::Host16 => "host16",
            MagicMatchType::Host32 => "host32",
            MagicMatchType::Big16 => "big16",
            MagicMatchType::Big32 => "big32",
            MagicMatchType::Little16 => "little16",
            MagicMatchType::Little32 => "little32",
        }
    }
}

/// Expand backslash escapes in a `string`-type value.
///
/// Recognized escapes, tried in order: `\\`, `\n`, `\r`, `\t`, `\xHH`
/// (exactly two hex digits), `\NNN` (exactly three octal digits), and a
/// bare `\0` as a single NUL byte. Any other backslash sequence is copied
/// through verbatim, backslash included, so decoding is total and never
/// fails. Octal values above 255 keep only the low byte.
pub fn decode_string_literal(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 >= bytes.len() {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        match bytes[i + 1] {
            b'\\' => {
                out.push(b'\\');
                i += 2;
            }
            b'n' => {
                out.push(b'\n');
                i += 2;
            }
            b'r' => {
                out.push(b'\r');
                i += 2;
            }
            b't' => {
                out.push(b'\t');
                i += 2;
            }
            b'x' => {
                let hi = bytes.get(i + 2).and_then(|&b| hex_nibble(b));
                let lo = bytes.get(i + 3).and_then(|&b| hex_nibble(b));
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    out.push(hi << 4 | lo);
                    i += 4;
                } else {
                    // Not exactly two hex digits: keep the backslash and
                    // let the following chars copy through normally
                    out.push(b'\\');
                    i += 1;
                }
            }
            b'0'..=b'7' => {
                let digits: Vec<u8> = bytes[i + 1..]
                    .iter()
                    .take(3)
                    .take_while(|&&b| (b'0'..=b'7').contains(&b))
                    .map(|&b| b - b'0')
                    .collect();
                if digits.len() == 3 {
                    let value =
                        (digits[0] as u32) * 64 + (digits[1] as u32) * 8 + digits[2] as u32;
                    out.push((value & 0xFF) as u8);
                    i += 4;
                } else if bytes[i + 1] == b'0' {
                    // Bare \0 is accepted as a one-byte NUL
                    out.push(0);
                    i += 2;
                } else {
                    out.push(b'\\');
                    i += 1;
                }
            }
            _ => {
                out.push(b'\\');
                i += 1;
            }
        }
    }
    out
}

/// Parse a numeric literal at a declared width (1, 2, or 4 bytes).
///
/// Base selection follows C conventions: `0x`/`0X` prefix selects hex, a
/// leading `0` on a multi-digit literal selects octal, anything else is
/// decimal. Fails with `MalformedNumber` when the digits are invalid in
/// the selected base or the value overflows the width.
pub fn decode_numeric_literal(text: &str, width: usize) -> Result<u32> {
    let (digits, radix) = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        (hex, 16)
    } else if text.len() > 1 && text.starts_with('0') {
        (text, 8)
    } else {
        (text, 10)
    };

    let value = u32::from_str_radix(digits, radix).map_err(|_| {
        MagicError::MalformedNumber(format!("{:?} is not a valid base-{} literal", text, radix))
    })?;

    let max = match width {
        1 => 0xFF,
        2 => 0xFFFF,
        _ => u32::MAX,
    };
    if value > max {
        return Err(MagicError::MalformedNumber(format!(
            "{:?} overflows a {}-byte value",
            text, width
        )));
    }
    Ok(value)
}

/// Decode a `string`-type mask: a `0x` prefix followed by an even number
/// of hex digits, one mask byte per digit pair.
pub fn decode_mask(text: &str) -> Result<Vec<u8>> {
    let hex = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .ok_or_else(|| {
            MagicError::MalformedMask(format!("{:?} is missing the 0x prefix", text))
        })?;
    if hex.is_empty() || hex.len() % 2 != 0 {
        return Err(MagicError::MalformedMask(format!(
            "{:?} has an odd hex-digit count",
            text
        )));
    }

    let digits = hex.as_bytes();
    let mut out = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let hi = hex_nibble(pair[0]);
        let lo = hex_nibble(pair[1]);
        match (hi, lo) {
            (Some(hi), Some(lo)) => out.push(hi << 4 | lo),
            _ => {
                return Err(MagicError::MalformedMask(format!(
                    "{:?} contains non-hex digits",
                    text
                )))
            }
        }
    }
    Ok(out)
}

/// Encode a decoded numeric value at its declared width in the byte order
/// the match type implies. `String` values never pass through here; they
/// are already in final byte order.
pub fn apply_endianness(value: u32, match_type: MagicMatchType) -> Vec<u8> {
    match match_type {
        MagicMatchType::String => Vec::new(),
        MagicMatchType::Byte => vec![value as u8],
        MagicMatchType::Host16 => (value as u16).to_ne_bytes().to_vec(),
        MagicMatchType::Big16 => (value as u16).to_be_bytes().to_vec(),
        MagicMatchType::Little16 => (value as u16).to_le_bytes().to_vec(),
        MagicMatchType::Host32 => value.to_ne_bytes().to_vec(),
        MagicMatchType::Big32 => value.to_be_bytes().to_vec(),
        MagicMatchType::Little32 => value.to_le_bytes().to_vec(),
    }
}

fn hex_nibble(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(decode_string_literal("GIF89a"), b"GIF89a");
        assert_eq!(decode_string_literal(""), b"");
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(decode_string_literal("\\n\\t\\r"), vec![0x0A, 0x09, 0x0D]);
        assert_eq!(decode_string_literal("a\\\\b"), b"a\\b");
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(decode_string_literal("\\x7F"), vec![0x7F]);
        assert_eq!(decode_string_literal("\\x89PNG"), vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_hex_escape_needs_two_digits() {
        // One digit: not a hex escape, copied verbatim
        assert_eq!(decode_string_literal("\\xZ"), b"\\xZ");
        assert_eq!(decode_string_literal("\\x"), b"\\x");
    }

    #[test]
    fn test_octal_escape() {
        assert_eq!(decode_string_literal("\\177"), vec![0x7F]);
        assert_eq!(decode_string_literal("\\003vbn"), vec![0x03, b'v', b'b', b'n']);
    }

    #[test]
    fn test_bare_nul_escape() {
        assert_eq!(decode_string_literal("\\0ab"), vec![0x00, b'a', b'b']);
    }

    #[test]
    fn test_unknown_escape_verbatim() {
        assert_eq!(decode_string_literal("\\q"), b"\\q");
        // Two octal digits that are not a bare \0: verbatim
        assert_eq!(decode_string_literal("\\42"), b"\\42");
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(decode_string_literal("abc\\"), b"abc\\");
    }

    #[test]
    fn test_numeric_base_selection() {
        assert_eq!(decode_numeric_literal("0xFF", 4).unwrap(), 255);
        assert_eq!(decode_numeric_literal("017", 4).unwrap(), 15);
        assert_eq!(decode_numeric_literal("42", 4).unwrap(), 42);
        assert_eq!(decode_numeric_literal("0", 4).unwrap(), 0);
    }

    #[test]
    fn test_numeric_bad_digits() {
        assert!(decode_numeric_literal("0x", 4).is_err());
        assert!(decode_numeric_literal("08", 4).is_err());
        assert!(decode_numeric_literal("twelve", 4).is_err());
        assert!(decode_numeric_literal("", 4).is_err());
    }

    #[test]
    fn test_numeric_width_overflow() {
        assert!(decode_numeric_literal("256", 1).is_err());
        assert_eq!(decode_numeric_literal("255", 1).unwrap(), 255);
        assert!(decode_numeric_literal("0x10000", 2).is_err());
        assert_eq!(decode_numeric_literal("0xFFFF", 2).unwrap(), 0xFFFF);
    }

    #[test]
    fn test_mask_decoding() {
        assert_eq!(decode_mask("0xFF00").unwrap(), vec![0xFF, 0x00]);
        assert_eq!(decode_mask("0xdeadBEEF").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_mask_odd_length_fails() {
        assert!(matches!(
            decode_mask("0xFFF"),
            Err(MagicError::MalformedMask(_))
        ));
    }

    #[test]
    fn test_mask_requires_prefix() {
        assert!(matches!(
            decode_mask("FF00"),
            Err(MagicError::MalformedMask(_))
        ));
        assert!(decode_mask("0x").is_err());
        assert!(decode_mask("0xGG").is_err());
    }

    #[test]
    fn test_endianness_forced_orders() {
        assert_eq!(apply_endianness(10, MagicMatchType::Big16), vec![0x00, 0x0A]);
        assert_eq!(apply_endianness(10, MagicMatchType::Little16), vec![0x0A, 0x00]);
        assert_eq!(
            apply_endianness(0x01020304, MagicMatchType::Big32),
            vec![0x01, 0x02, 0x03, 0x04]
        );
        assert_eq!(
            apply_endianness(0x01020304, MagicMatchType::Little32),
            vec![0x04, 0x03, 0x02, 0x01]
        );
    }

    #[test]
    fn test_endianness_host_order() {
        assert_eq!(
            apply_endianness(10, MagicMatchType::Host16),
            10u16.to_ne_bytes().to_vec()
        );
        assert_eq!(
            apply_endianness(10, MagicMatchType::Host32),
            10u32.to_ne_bytes().to_vec()
        );
    }

    #[test]
    fn test_unknown_keyword_defaults_to_string() {
        assert_eq!(MagicMatchType::from_keyword("stringz"), MagicMatchType::String);
        assert_eq!(MagicMatchType::from_keyword(""), MagicMatchType::String);
        assert_eq!(MagicMatchType::from_keyword("big32"), MagicMatchType::Big32);
    }
}
