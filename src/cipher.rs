use crate::error::{CipherLabError, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Default Caesar shift
pub const DEFAULT_SHIFT: u8 = 3;

/// Fixed ROT13 shift
pub const ROT13_SHIFT: u8 = 13;

/// Decoder that accepts missing padding and non-zero trailing bits
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Cipher options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cipher {
    #[default]
    Caesar,
    Rot13,
    Atbash,
    Base64,
}

impl Cipher {
    /// Encoding and decoding are the same operation
    pub fn is_involution(&self) -> bool {
        matches!(self, Self::Rot13 | Self::Atbash)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Rot13 => "rot13",
            Self::Atbash => "atbash",
            Self::Base64 => "base64",
        }
    }
}

impl std::fmt::Display for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Cipher {
    type Err = CipherLabError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caesar" | "shift" => Ok(Self::Caesar),
            "rot13" => Ok(Self::Rot13),
            "atbash" => Ok(Self::Atbash),
            "base64" => Ok(Self::Base64),
            _ => Err(CipherLabError::UnsupportedAlgorithm(format!("cipher: {}", s))),
        }
    }
}

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Encode,
    Decode,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode => f.write_str("encode"),
            Self::Decode => f.write_str("decode"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = CipherLabError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "encode" | "encrypt" | "e" => Ok(Self::Encode),
            "decode" | "decrypt" | "d" => Ok(Self::Decode),
            _ => Err(CipherLabError::UnsupportedAlgorithm(format!(
                "direction: {}",
                s
            ))),
        }
    }
}

/// A single cipher invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRequest {
    pub text: String,
    pub cipher: Cipher,
    /// Only meaningful for Caesar
    pub shift: u8,
    pub direction: Direction,
}

impl CipherRequest {
    /// Create a request, validating the shift when the cipher uses it
    pub fn new(
        text: impl Into<String>,
        cipher: Cipher,
        shift: i64,
        direction: Direction,
    ) -> Result<Self> {
        let shift = match cipher {
            Cipher::Caesar => {
                if !(1..=25).contains(&shift) {
                    return Err(CipherLabError::InvalidShift(shift));
                }
                shift as u8
            }
            Cipher::Rot13 => ROT13_SHIFT,
            Cipher::Atbash | Cipher::Base64 => DEFAULT_SHIFT,
        };

        Ok(Self {
            text: text.into(),
            cipher,
            shift,
            direction,
        })
    }

    pub fn encode(text: impl Into<String>, cipher: Cipher) -> Self {
        Self {
            text: text.into(),
            cipher,
            shift: if cipher == Cipher::Rot13 { ROT13_SHIFT } else { DEFAULT_SHIFT },
            direction: Direction::Encode,
        }
    }

    pub fn decode(text: impl Into<String>, cipher: Cipher) -> Self {
        Self {
            direction: Direction::Decode,
            ..Self::encode(text, cipher)
        }
    }
}

/// Apply the requested transform
/// Only Base64 decoding can fail, with `CipherLabError::InvalidEncoding`
pub fn transform(request: &CipherRequest) -> Result<String> {
    log::debug!(
        "cipher transform: cipher={} direction={} len={}",
        request.cipher,
        request.direction,
        request.text.len()
    );

    let output = match (request.cipher, request.direction) {
        (Cipher::Caesar, Direction::Encode) => caesar(&request.text, i32::from(request.shift)),
        (Cipher::Caesar, Direction::Decode) => caesar(&request.text, -i32::from(request.shift)),
        (Cipher::Rot13, _) => rot13(&request.text),
        (Cipher::Atbash, _) => atbash(&request.text),
        (Cipher::Base64, Direction::Encode) => base64_encode(&request.text),
        (Cipher::Base64, Direction::Decode) => base64_decode(&request.text)?,
    };

    Ok(output)
}

/// Shift ASCII letters within their own alphabet, wrapping in both directions
pub fn caesar(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

fn shift_char(c: char, shift: i32) -> char {
    let base = if c.is_ascii_lowercase() {
        b'a'
    } else if c.is_ascii_uppercase() {
        b'A'
    } else {
        return c;
    };
    let offset = (c as i32 - i32::from(base) + shift).rem_euclid(26);
    char::from(base + offset as u8)
}

pub fn rot13(text: &str) -> String {
    caesar(text, i32::from(ROT13_SHIFT))
}

/// Mirror each ASCII letter in its own alphabet (a<->z, B<->Y)
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                char::from(b'a' + b'z' - c as u8)
            } else if c.is_ascii_uppercase() {
                char::from(b'A' + b'Z' - c as u8)
            } else {
                c
            }
        })
        .collect()
}

/// Standard padded Base64 over the UTF-8 bytes
pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard-alphabet Base64
/// ASCII whitespace is ignored and padding is optional; any other
/// character outside the alphabet is `InvalidEncoding`
pub fn base64_decode(encoded: &str) -> Result<String> {
    let compact: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let bytes = FORGIVING
        .decode(&compact)
        .map_err(|e| CipherLabError::InvalidEncoding(e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|_| CipherLabError::InvalidEncoding("decoded bytes are not valid UTF-8".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_shift_three() {
        assert_eq!(caesar("Hello, World!", 3), "Khoor, Zruog!");
        assert_eq!(caesar("xyz XYZ", 3), "abc ABC");
    }

    #[test]
    fn test_caesar_negative_shift_wraps() {
        assert_eq!(caesar("abc ABC", -3), "xyz XYZ");
        assert_eq!(caesar("a", -25), "b");
    }

    #[test]
    fn test_caesar_request_roundtrip() {
        let request = CipherRequest::new("Attack at dawn", Cipher::Caesar, 7, Direction::Encode).unwrap();
        let encoded = transform(&request).unwrap();
        assert_eq!(encoded, "Haahjr ha khdu");

        let back = CipherRequest::new(encoded, Cipher::Caesar, 7, Direction::Decode).unwrap();
        assert_eq!(transform(&back).unwrap(), "Attack at dawn");
    }

    #[test]
    fn test_invalid_shift_rejected() {
        assert!(matches!(
            CipherRequest::new("x", Cipher::Caesar, 0, Direction::Encode),
            Err(CipherLabError::InvalidShift(0))
        ));
        assert!(CipherRequest::new("x", Cipher::Caesar, 26, Direction::Encode).is_err());
        // Shift is ignored for fixed ciphers
        assert!(CipherRequest::new("x", Cipher::Atbash, 99, Direction::Encode).is_ok());
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(caesar("héllo ß", 1), "iémmp ß");
        assert_eq!(atbash("ñandú"), "ñzmwú");
    }

    #[test]
    fn test_rot13_known_value() {
        assert_eq!(rot13("Hello"), "Uryyb");
        assert_eq!(rot13(&rot13("Why did the chicken?")), "Why did the chicken?");
    }

    #[test]
    fn test_rot13_ignores_direction() {
        let enc = transform(&CipherRequest::encode("abc", Cipher::Rot13)).unwrap();
        let dec = transform(&CipherRequest::decode("abc", Cipher::Rot13)).unwrap();
        assert_eq!(enc, dec);
        assert_eq!(enc, "nop");
    }

    #[test]
    fn test_atbash_known_value() {
        assert_eq!(atbash("abcxyz ABCXYZ"), "zyxcba ZYXCBA");
        assert_eq!(atbash("Wizard"), "Draziw");
    }

    #[test]
    fn test_base64_known_values() {
        assert_eq!(base64_encode("Hello"), "SGVsbG8=");
        assert_eq!(base64_encode(""), "");
        assert_eq!(base64_decode("SGVsbG8=").unwrap(), "Hello");
    }

    #[test]
    fn test_base64_non_ascii_roundtrip() {
        let text = "naïve café ☕";
        assert_eq!(base64_decode(&base64_encode(text)).unwrap(), text);
    }

    #[test]
    fn test_base64_invalid_input() {
        let request = CipherRequest::decode("not*base64!", Cipher::Base64);
        let err = transform(&request).unwrap_err();
        assert!(err.is_invalid_encoding());
    }

    #[test]
    fn test_base64_decode_without_padding() {
        assert_eq!(base64_decode("SGVsbG8").unwrap(), "Hello");
        assert_eq!(base64_decode("SGk").unwrap(), "Hi");
    }

    #[test]
    fn test_base64_decode_ignores_whitespace() {
        assert_eq!(base64_decode("SGVs\nbG8=").unwrap(), "Hello");
        assert_eq!(base64_decode("SGVs\r\nbG8=\n").unwrap(), "Hello");
        assert_eq!(base64_decode(" SGVsbG8= ").unwrap(), "Hello");
        assert_eq!(base64_decode("\tSG Vs bG 8").unwrap(), "Hello");
    }

    #[test]
    fn test_base64_still_rejects_bad_symbols() {
        assert!(base64_decode("SGVs-bG8=").unwrap_err().is_invalid_encoding());
        assert!(base64_decode("SG=Vs").unwrap_err().is_invalid_encoding());
        // A lone trailing symbol cannot encode a byte
        assert!(base64_decode("SGVsb").unwrap_err().is_invalid_encoding());
    }

    #[test]
    fn test_base64_invalid_utf8() {
        // 0xff 0xfe
        let err = base64_decode("//4=").unwrap_err();
        assert!(err.is_invalid_encoding());
    }

    #[test]
    fn test_parse_cipher_and_direction() {
        assert_eq!("ROT13".parse::<Cipher>().unwrap(), Cipher::Rot13);
        assert_eq!("decrypt".parse::<Direction>().unwrap(), Direction::Decode);
        assert!("vigenere".parse::<Cipher>().is_err());
        assert!(Cipher::Atbash.is_involution());
        assert!(!Cipher::Base64.is_involution());
    }
}
