//! Hex encoding helpers.
//!
//! Encoding is always lowercase. Decoding accepts an optional `0x` prefix and
//! either case, and rejects anything that is not a whole number of hex bytes.

use hex::FromHexError;

/// Malformed hex input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("Malformed hex: odd number of digits ({0})")]
    OddLength(usize),

    #[error("Malformed hex: invalid character {c:?} at position {index}")]
    InvalidCharacter { c: char, index: usize },

    #[error("Malformed hex: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Strips a leading `0x` / `0X` if present.
#[inline]
pub fn strip_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Lowercase hex without prefix.
#[inline]
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Lowercase hex with `0x` prefix.
pub fn encode_prefixed(bytes: impl AsRef<[u8]>) -> String {
    let bytes = bytes.as_ref();
    let mut out = String::with_capacity(2 + 2 * bytes.len());
    out.push_str("0x");
    out.push_str(&hex::encode(bytes));
    out
}

/// Decodes hex of any even length.
pub fn decode(s: &str) -> Result<Vec<u8>, HexError> {
    let digits = strip_prefix(s);
    // any whole number of bytes is acceptable here
    hex::decode(digits).map_err(|e| map_error(e, digits.len(), digits.len() / 2))
}

/// Decodes hex that must be exactly `N` bytes.
pub fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], HexError> {
    let digits = strip_prefix(s);
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength(digits.len()));
    }
    if digits.len() != 2 * N {
        return Err(HexError::InvalidLength {
            expected: N,
            actual: digits.len() / 2,
        });
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out).map_err(|e| map_error(e, digits.len(), N))?;
    Ok(out)
}

/// `expected` is the byte length the caller asked for.
fn map_error(err: FromHexError, digits: usize, expected: usize) -> HexError {
    match err {
        FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter { c, index },
        FromHexError::OddLength => HexError::OddLength(digits),
        FromHexError::InvalidStringLength => HexError::InvalidLength {
            expected,
            actual: digits / 2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_prefixed() {
        assert_eq!(encode_prefixed([0u8; 0]), "0x");
        assert_eq!(encode_prefixed([0x00u8, 0xab, 0xff]), "0x00abff");
        assert_eq!(encode([0xdeu8, 0xad]), "dead");
    }

    #[test]
    fn test_decode_prefix_and_case() {
        assert_eq!(decode("0xDEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode("0XdeAD").unwrap(), vec![0xde, 0xad]);
        assert_eq!(decode("0102").unwrap(), vec![0x01, 0x02]);
        assert_eq!(decode("0x").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_keeps_leading_04() {
        assert_eq!(decode("0x0401").unwrap(), vec![0x04, 0x01]);
    }

    #[test]
    fn test_decode_odd_length() {
        assert_eq!(decode("0xabc"), Err(HexError::OddLength(3)));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode("0x12zz"),
            Err(HexError::InvalidCharacter { c: 'z', index: 2 })
        );
    }

    #[test]
    fn test_decode_fixed() {
        let bytes: [u8; 4] = decode_fixed("0x01020304").unwrap();
        assert_eq!(bytes, [1, 2, 3, 4]);

        assert_eq!(
            decode_fixed::<4>("010203"),
            Err(HexError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(decode_fixed::<4>("0102030"), Err(HexError::OddLength(7)));
        assert!(matches!(
            decode_fixed::<2>("g000"),
            Err(HexError::InvalidCharacter { c: 'g', .. })
        ));
    }

    #[test]
    fn test_string_length_error_carries_expected() {
        assert_eq!(
            map_error(FromHexError::InvalidStringLength, 6, 4),
            HexError::InvalidLength {
                expected: 4,
                actual: 3
            }
        );
    }

    proptest! {
        #[test]
        fn prop_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let encoded = encode_prefixed(&bytes);
            prop_assert_eq!(encoded.len(), 2 + 2 * bytes.len());
            prop_assert!(encoded[2..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
            prop_assert_eq!(decode(&encoded).unwrap(), bytes);
        }
    }
}
