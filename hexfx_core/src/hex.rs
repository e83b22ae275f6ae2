//! Converts between hexadecimal strings and the raw bytes they encode.

use regex::Regex;

use crate::HexDecodeError;

static HEX_STRING_REGEX: std::sync::LazyLock<Regex> =
  std::sync::LazyLock::new(|| Regex::new("^[0-9a-fA-F]*$").unwrap());

/// Decodes a hexadecimal string into the bytes it encodes, where each byte is
/// encoded by two consecutive characters, e.g. `"d196"` decodes to
/// `[0xD1, 0x96]`. Both uppercase and lowercase hex digits are accepted.
///
/// Errors if the string has an odd number of characters or contains a
/// character outside the hex alphabet. Whitespace and separators are not
/// tolerated.
///
pub fn decode(hex_input: &str) -> Result<Vec<u8>, HexDecodeError> {
  if hex_input.len() % 2 == 1 {
    return Err(HexDecodeError::OddLength {
      length: hex_input.len(),
    });
  }

  if !HEX_STRING_REGEX.is_match(hex_input) {
    // Locate the first character outside the hex alphabet to report in the
    // error
    let (offset, character) = hex_input
      .chars()
      .enumerate()
      .find(|(_, c)| !c.is_ascii_hexdigit())
      .unwrap();

    return Err(HexDecodeError::InvalidCharacter { character, offset });
  }

  let mut bytes = Vec::with_capacity(hex_input.len() / 2);

  for pair in hex_input.as_bytes().chunks_exact(2) {
    // These unwraps are safe because the input is validated above to contain
    // only ASCII hex digits
    let pair = std::str::from_utf8(pair).unwrap();
    bytes.push(u8::from_str_radix(pair, 16).unwrap());
  }

  Ok(bytes)
}

/// Encodes bytes into a lowercase hexadecimal string, two characters per
/// byte, e.g. `[0xD1, 0x96]` encodes to `"d196"`.
///
pub fn encode(bytes: &[u8]) -> String {
  bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_test() {
    assert_eq!(decode(""), Ok(vec![]));

    assert_eq!(decode("00"), Ok(vec![0x00]));

    assert_eq!(decode("d19633"), Ok(vec![0xD1, 0x96, 0x33]));

    assert_eq!(decode("D19633"), Ok(vec![0xD1, 0x96, 0x33]));

    assert_eq!(decode("aAbBcC"), Ok(vec![0xAA, 0xBB, 0xCC]));

    assert_eq!(
      decode("abc"),
      Err(HexDecodeError::OddLength { length: 3 })
    );

    assert_eq!(
      decode("zz"),
      Err(HexDecodeError::InvalidCharacter {
        character: 'z',
        offset: 0
      })
    );

    assert_eq!(
      decode("12g4"),
      Err(HexDecodeError::InvalidCharacter {
        character: 'g',
        offset: 2
      })
    );

    // Whitespace is not tolerated
    assert_eq!(
      decode("12 34"),
      Err(HexDecodeError::OddLength { length: 5 })
    );
    assert_eq!(
      decode("1234 6"),
      Err(HexDecodeError::InvalidCharacter {
        character: ' ',
        offset: 4
      })
    );

    // Signs are not part of the hex alphabet
    assert_eq!(
      decode("+1"),
      Err(HexDecodeError::InvalidCharacter {
        character: '+',
        offset: 0
      })
    );
  }

  #[test]
  fn encode_test() {
    assert_eq!(encode(&[]), "");

    assert_eq!(encode(&[0xD1, 0x96, 0x33]), "d19633");

    assert_eq!(encode(&[0x00, 0x0F, 0xFF]), "000fff");
  }

  #[test]
  fn encode_decode_round_trip_test() {
    let bytes: Vec<u8> = (u8::MIN..=u8::MAX).collect();

    assert_eq!(decode(&encode(&bytes)), Ok(bytes));
  }
}
