//! Null‑terminated views over byte slices.

use std::borrow::Cow;

/// Number of bytes before the first zero, or the full length if none.
#[inline]
pub fn c_str_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

/// Prefix of `bytes` up to (not including) the first zero.
#[inline]
pub fn c_str(bytes: &[u8]) -> &[u8] {
    &bytes[..c_str_len(bytes)]
}

/// Printable form of the C‑string view; invalid UTF‑8 is replaced.
pub fn display(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(c_str(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_first_zero() {
        assert_eq!(c_str_len(b"joy\0the\0"), 3);
        assert_eq!(c_str(b"joy\0the\0"), b"joy");
    }

    #[test]
    fn no_terminator_means_whole_slice() {
        assert_eq!(c_str_len(b"run"), 3);
        assert_eq!(c_str(b""), b"");
    }

    #[test]
    fn leading_zero_is_empty() {
        assert_eq!(c_str_len(&[0, b'a']), 0);
        assert_eq!(display(&[0, b'a']), "");
    }

    #[test]
    fn display_is_lossy() {
        assert_eq!(display(b"po\xff\0x"), "po\u{fffd}");
    }
}
