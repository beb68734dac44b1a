//! Byte-level recognizers shared by the parser and the mutators
//!
//! Everything here works on `&[u8]` offsets and never allocates.

use std::ops::Range;

/// Largest value accepted for a numeric core component (host signed int width).
pub const MAX_COMPONENT: u64 = isize::MAX as u64;

/// Scan a non-negative integer starting at `offset`.
///
/// Returns the value and the offset right after the last digit, or `None` when:
/// - there is no digit at `offset`
/// - a multi-digit run starts with `0`
/// - the value would exceed [`MAX_COMPONENT`]
pub fn scan_unsigned_int(text: &[u8], offset: usize) -> Option<(u64, usize)> {
    let first = *text.get(offset)?;
    if !first.is_ascii_digit() {
        return None;
    }

    let end = text[offset..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(text.len(), |n| offset + n);

    if first == b'0' && end - offset > 1 {
        return None;
    }

    let mut value: u64 = 0;
    for &c in &text[offset..end] {
        let digit = u64::from(c - b'0');
        if value > (MAX_COMPONENT - digit) / 10 {
            return None;
        }
        value = value * 10 + digit;
    }

    Some((value, end))
}

/// `[0-9A-Za-z-]`
pub fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

/// All digits (an empty segment counts as numeric).
pub fn is_numeric(segment: &[u8]) -> bool {
    segment.iter().all(u8::is_ascii_digit)
}

/// A numeric identifier with a leading zero, e.g. `01`.
pub fn is_bad_numeric_identifier(segment: &[u8]) -> bool {
    segment.len() > 1 && segment[0] == b'0' && is_numeric(segment)
}

/// Scan a run of dot-separated identifiers starting at `offset`.
///
/// Stops before `stop` (when given) or at end of input. Returns the bounds of
/// the run and the offset where scanning stopped. With `numeric_check` set,
/// numeric identifiers with leading zeros are rejected (prerelease rule).
pub fn scan_dotted_run(
    text: &[u8],
    offset: usize,
    stop: Option<u8>,
    numeric_check: bool,
) -> Option<(Range<usize>, usize)> {
    let mut i = offset;
    let mut part_start = offset;

    let part_ok = |start: usize, end: usize| {
        start != end && !(numeric_check && is_bad_numeric_identifier(&text[start..end]))
    };

    while i < text.len() && Some(text[i]) != stop {
        let c = text[i];
        if c == b'.' {
            if !part_ok(part_start, i) {
                return None;
            }
            part_start = i + 1;
        } else if !is_identifier_char(c) {
            return None;
        }
        i += 1;
    }

    if !part_ok(part_start, i) {
        return None;
    }

    Some((offset..i, i))
}

/// Whether `text` as a whole is a valid prerelease (`numeric_check`) or build run.
pub fn is_valid_dotted(text: &str, numeric_check: bool) -> bool {
    matches!(
        scan_dotted_run(text.as_bytes(), 0, None, numeric_check),
        Some((_, next)) if next == text.len()
    )
}
