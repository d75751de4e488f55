//! Form-style segment decoding.
//!
//! # Responsibilities
//! - Turn `+` into a space
//! - Decode `%XX` triplets (hex digits case-insensitive) into raw bytes
//! - Reassemble the decoded bytes as UTF-8
//!
//! # Design Decisions
//! - Two-stage: bytes are collected for the whole segment first, then read
//!   as UTF-8, so `%CE%BB` yields a single `λ`
//! - Malformed escapes are kept literally, never rejected
//! - Invalid UTF-8 is replaced with U+FFFD rather than failing
//! - Input is a single segment; boundaries were resolved by the caller

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Decode a single path segment.
///
/// Borrows the input when it contains nothing to decode.
pub fn decode_segment(segment: &str) -> Cow<'_, str> {
    if !segment.contains(['+', '%']) {
        return Cow::Borrowed(segment);
    }

    // Substituted before escapes are decoded, so `%2B` still yields `+`.
    let spaced = segment.replace('+', " ");
    Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
}
