//! Converts hexadecimal string data into the native UTF-8 string it encodes.

pub mod error;
pub mod hex;
pub mod hex_error;
pub mod utf8;

pub use error::HexfxError;
pub use hex_error::HexDecodeError;

/// Converts a hexadecimal string into the UTF-8 text it encodes.
///
/// The input must contain only characters in the hex alphabet
/// `0123456789abcdefABCDEF` and have an even number of characters, two per
/// byte. Whitespace and separators are not tolerated.
///
/// Bytes that do not form valid UTF-8 are dropped from the output, so the
/// decode of the resulting byte sequence never fails. See
/// [`utf8::decode_bytes_lossy`] for details.
///
pub fn convert(hex_input: &str) -> Result<String, HexDecodeError> {
  let bytes = hex::decode(hex_input)?;

  Ok(utf8::decode_bytes_lossy(&bytes))
}
