//! Defines the type used to describe errors that can occur when decoding
//! hexadecimal string data.

/// An error that occurred when decoding a hexadecimal string into bytes.
///
#[derive(Clone, Debug, PartialEq)]
pub enum HexDecodeError {
  /// This error occurs when the hexadecimal string has an odd number of
  /// characters. Every byte is encoded by exactly two characters, so a whole
  /// number of bytes always has an even character count.
  OddLength { length: usize },

  /// This error occurs when the hexadecimal string contains a character
  /// outside the hex alphabet `0123456789abcdefABCDEF`. The offset of the
  /// first such character is reported.
  InvalidCharacter { character: char, offset: usize },
}

impl std::fmt::Display for HexDecodeError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "Hex decode error: {}", self.name())
  }
}

impl HexDecodeError {
  /// Returns the name of the error as a human-readable string.
  ///
  pub fn name(&self) -> String {
    match self {
      HexDecodeError::OddLength { .. } => "Odd length".to_string(),
      HexDecodeError::InvalidCharacter { .. } => {
        "Invalid character".to_string()
      }
    }
  }
}

impl crate::HexfxError for HexDecodeError {
  /// Returns lines of text that describe a hex decode error in a
  /// human-readable format.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![];

    lines.push(format!("Hex decode error {}", task_description));
    lines.push("".to_string());

    // Add the name of the error
    lines.push(format!("  Error: {}", self.name()));

    // Add the details of the error
    match self {
      HexDecodeError::OddLength { length } => {
        lines.push(format!("  Length: {} characters", length));
      }

      HexDecodeError::InvalidCharacter { character, offset } => {
        lines.push(format!("  Character: {:?}", character));
        lines.push(format!("  Offset: {}", offset));
      }
    };

    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::HexfxError;

  #[test]
  fn to_lines_test() {
    assert_eq!(
      HexDecodeError::OddLength { length: 3 }
        .to_lines("testing")
        .join("\n"),
      r#"Hex decode error testing

  Error: Odd length
  Length: 3 characters"#
    );

    assert_eq!(
      HexDecodeError::InvalidCharacter {
        character: 'z',
        offset: 4
      }
      .to_lines("testing")
      .join("\n"),
      r#"Hex decode error testing

  Error: Invalid character
  Character: 'z'
  Offset: 4"#
    );
  }
}
