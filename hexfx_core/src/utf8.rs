//! Decodes UTF-8 bytes into native strings, dropping invalid data.

/// Decodes the given bytes as UTF-8 text. Byte sequences that are not valid
/// UTF-8 are dropped from the output, rather than being replaced with the
/// U+FFFD replacement character: �. Decoding therefore never fails, and the
/// output may describe fewer codepoints than the input has bytes.
///
/// Invalid sequences are skipped a maximal subpart at a time, following
/// [`std::str::Utf8Error::error_len`]: a multi-byte sequence that is
/// truncated or interrupted is skipped up to its first disallowed byte, and
/// a byte that cannot start a sequence is skipped on its own. Overlong
/// encodings, UTF-16 surrogate codepoints, and codepoints beyond U+10FFFF
/// are invalid and are dropped the same way.
///
pub fn decode_bytes_lossy(mut bytes: &[u8]) -> String {
  let mut s = String::with_capacity(bytes.len());

  loop {
    match std::str::from_utf8(bytes) {
      Ok(valid) => {
        s.push_str(valid);

        return s;
      }

      Err(error) => {
        let (valid, rest) = bytes.split_at(error.valid_up_to());

        // This is safe because the bytes up to `valid_up_to` are known to be
        // valid UTF-8
        s.push_str(unsafe { std::str::from_utf8_unchecked(valid) });

        // Skip the invalid sequence and continue decoding what follows. When
        // the error has no length the invalid sequence runs to the end of
        // the data.
        match error.error_len() {
          Some(length) => bytes = &rest[length..],
          None => return s,
        }
      }
    }
  }
}
