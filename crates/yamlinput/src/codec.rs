//! Stateless UTF-16/UTF-32 decoding and UTF-8 encoding.
//!
//! Decoding works one scalar value at a time so adapters never look further
//! ahead than the trailing half of a surrogate pair. Encoding writes into a
//! fixed four byte [`PendingBytes`] buffer, which the adapters drain one byte
//! per pull.

use core::iter::Peekable;

use crate::error::DecodeError;

const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// The Unicode replacement character used by [`DecodePolicy::Replace`].
///
/// [`DecodePolicy::Replace`]: crate::DecodePolicy::Replace
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Whether `unit` lies in D800..=DBFF.
#[inline]
#[must_use]
pub fn is_high_surrogate(unit: u16) -> bool {
    HIGH_SURROGATES.contains(&unit)
}

/// Whether `unit` lies in DC00..=DFFF.
#[inline]
#[must_use]
pub fn is_low_surrogate(unit: u16) -> bool {
    LOW_SURROGATES.contains(&unit)
}

/// Decodes one scalar value starting at `lead`.
///
/// When `lead` is a high surrogate the next unit is taken from `rest` only if
/// it is a low surrogate; anything else is left in place so the caller can
/// resume decoding from it.
///
/// # Errors
///
/// - [`DecodeError::UnpairedHighSurrogate`] when `lead` is a high surrogate
///   not immediately followed by a low surrogate (end of input included).
/// - [`DecodeError::UnpairedLowSurrogate`] when `lead` is a low surrogate.
pub fn decode_utf16<I>(lead: u16, rest: &mut Peekable<I>) -> Result<char, DecodeError>
where
    I: Iterator<Item = u16>,
{
    if is_low_surrogate(lead) {
        return Err(DecodeError::UnpairedLowSurrogate(lead));
    }
    if !is_high_surrogate(lead) {
        // Everything outside D800..=DFFF is a scalar value on its own.
        return char::from_u32(u32::from(lead)).ok_or(DecodeError::InvalidScalar(u32::from(lead)));
    }

    let trail = rest
        .next_if(|&unit| is_low_surrogate(unit))
        .ok_or(DecodeError::UnpairedHighSurrogate(lead))?;
    let scalar = 0x10000 + (u32::from(lead) - 0xD800) * 0x400 + (u32::from(trail) - 0xDC00);
    char::from_u32(scalar).ok_or(DecodeError::InvalidScalar(scalar))
}

/// Decodes a single UTF-32 code unit.
///
/// # Errors
///
/// [`DecodeError::InvalidScalar`] for values above U+10FFFF or inside the
/// surrogate range.
#[inline]
pub fn decode_utf32(unit: u32) -> Result<char, DecodeError> {
    char::from_u32(unit).ok_or(DecodeError::InvalidScalar(unit))
}

/// Encodes `scalar` as UTF-8.
// Truncating casts keep only the payload bits of each byte.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn encode_utf8(scalar: char) -> PendingBytes {
    let cp = u32::from(scalar);
    match cp {
        0x0000..=0x007F => PendingBytes::from_array([cp as u8, 0, 0, 0], 1),
        0x0080..=0x07FF => PendingBytes::from_array(
            [0xC0 | (cp >> 6) as u8, 0x80 | (cp & 0x3F) as u8, 0, 0],
            2,
        ),
        0x0800..=0xFFFF => PendingBytes::from_array(
            [
                0xE0 | (cp >> 12) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
                0,
            ],
            3,
        ),
        _ => PendingBytes::from_array(
            [
                0xF0 | (cp >> 18) as u8,
                0x80 | ((cp >> 12) & 0x3F) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
            ],
            4,
        ),
    }
}

/// The not yet emitted bytes of one encoded scalar value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingBytes {
    bytes: [u8; 4],
    start: u8,
    end: u8,
}

impl PendingBytes {
    /// An empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; 4],
            start: 0,
            end: 0,
        }
    }

    const fn from_array(bytes: [u8; 4], len: u8) -> Self {
        Self {
            bytes,
            start: 0,
            end: len,
        }
    }

    /// Removes and returns the next byte in encoding order.
    #[inline]
    pub fn pop_front(&mut self) -> Option<u8> {
        if self.start == self.end {
            return None;
        }
        let byte = self.bytes[usize::from(self.start)];
        self.start += 1;
        Some(byte)
    }

    /// Whether every byte has been popped.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of bytes left to pop.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.end - self.start)
    }

    /// The remaining bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[usize::from(self.start)..usize::from(self.end)]
    }
}
