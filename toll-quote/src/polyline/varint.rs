//! Shared 5-bit variable-length integer packing.
//!
//! Both polyline families store each value as little-endian 5-bit groups
//! with `0x20` marking "more groups follow", and store signed deltas in
//! zig-zag form. They only differ in how a 6-bit group maps to a character.

use super::error::PolylineError;

/// Largest shift before a value would overflow 64 bits.
const MAX_SHIFT: u32 = 60;

/// Zig-zag a signed delta into an unsigned value.
pub(crate) fn zigzag(value: i64) -> u64 {
    let shifted = value << 1;
    if value < 0 {
        (!shifted) as u64
    } else {
        shifted as u64
    }
}

/// Undo [`zigzag`].
pub(crate) fn unzigzag(value: u64) -> i64 {
    let half = (value >> 1) as i64;
    if value & 1 != 0 { !half } else { half }
}

/// Append `value` as 5-bit groups, mapping each 6-bit chunk to a character.
pub(crate) fn push_unsigned(mut value: u64, out: &mut String, to_char: impl Fn(u8) -> char) {
    while value >= 0x20 {
        out.push(to_char(((value & 0x1F) as u8) | 0x20));
        value >>= 5;
    }
    out.push(to_char(value as u8));
}

/// Split an encoded string into its unsigned values.
///
/// `from_char` maps a byte back to its 6-bit chunk, or `None` if the byte
/// is outside the alphabet.
pub(crate) fn read_unsigned(
    encoded: &str,
    from_char: impl Fn(u8) -> Option<u8>,
) -> Result<Vec<u64>, PolylineError> {
    let mut values = Vec::with_capacity(encoded.len() / 2);
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (pos, byte) in encoded.bytes().enumerate() {
        let chunk = from_char(byte).ok_or_else(|| {
            PolylineError::malformed(format!("invalid character {:?} at position {pos}", byte as char))
        })?;

        if shift > MAX_SHIFT {
            return Err(PolylineError::malformed(format!(
                "value too long at position {pos}"
            )));
        }

        result |= u64::from(chunk & 0x1F) << shift;
        if chunk & 0x20 == 0 {
            values.push(result);
            result = 0;
            shift = 0;
        } else {
            shift += 5;
        }
    }

    if shift > 0 {
        return Err(PolylineError::malformed("truncated value at end of input"));
    }

    Ok(values)
}

/// Add a zig-zagged delta to a running coordinate value.
pub(crate) fn accumulate(total: i64, delta: u64) -> Result<i64, PolylineError> {
    total
        .checked_add(unzigzag(delta))
        .ok_or_else(|| PolylineError::malformed("coordinate overflow"))
}

/// Scale a degree value to a fixed-precision integer, rounding half away
/// from zero.
pub(crate) fn scale(value: f64, factor: f64) -> i64 {
    (value * factor).round() as i64
}
