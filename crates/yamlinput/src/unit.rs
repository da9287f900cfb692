//! Code-unit element types accepted by range adapters.
//!
//! The set is closed: `u8` (UTF-8), `u16` (UTF-16), `u32` (UTF-32) and
//! `char` (already decoded scalar values, also 32 bits wide). Each unit type
//! knows how to decode itself, so the range adapter picks its decoding path
//! at compile time from the element type of the source.

use core::iter::Peekable;

use crate::{codec, error::DecodeError};

/// Width of the code units an adapter was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharWidth {
    /// 8-bit units, passed through as UTF-8 bytes.
    Utf8,
    /// 16-bit units, decoded as UTF-16.
    Utf16,
    /// 32-bit units, decoded as UTF-32.
    Utf32,
}

impl CharWidth {
    /// Size of one code unit in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            CharWidth::Utf8 => 8,
            CharWidth::Utf16 => 16,
            CharWidth::Utf32 => 32,
        }
    }
}

/// What one decode step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A raw byte to surface unchanged.
    Byte(u8),
    /// A scalar value to re-encode as UTF-8.
    Scalar(char),
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for char {}
}

/// A fixed-width code unit. Implemented for `u8`, `u16`, `u32` and `char`
/// only.
pub trait CodeUnit: Copy + sealed::Sealed {
    /// The width tag reported by adapters over this unit type.
    const WIDTH: CharWidth;

    /// Decodes the unit `lead`, taking continuation units from `rest` when
    /// the encoding needs them.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when `lead` (with its continuation) is not a
    /// valid scalar value.
    fn decode<I>(lead: Self, rest: &mut Peekable<I>) -> Result<Decoded, DecodeError>
    where
        I: Iterator<Item = Self>;
}

impl CodeUnit for u8 {
    const WIDTH: CharWidth = CharWidth::Utf8;

    #[inline]
    fn decode<I>(lead: Self, _rest: &mut Peekable<I>) -> Result<Decoded, DecodeError>
    where
        I: Iterator<Item = Self>,
    {
        Ok(Decoded::Byte(lead))
    }
}

impl CodeUnit for u16 {
    const WIDTH: CharWidth = CharWidth::Utf16;

    #[inline]
    fn decode<I>(lead: Self, rest: &mut Peekable<I>) -> Result<Decoded, DecodeError>
    where
        I: Iterator<Item = Self>,
    {
        codec::decode_utf16(lead, rest).map(Decoded::Scalar)
    }
}

impl CodeUnit for u32 {
    const WIDTH: CharWidth = CharWidth::Utf32;

    #[inline]
    fn decode<I>(lead: Self, _rest: &mut Peekable<I>) -> Result<Decoded, DecodeError>
    where
        I: Iterator<Item = Self>,
    {
        codec::decode_utf32(lead).map(Decoded::Scalar)
    }
}

impl CodeUnit for char {
    const WIDTH: CharWidth = CharWidth::Utf32;

    #[inline]
    fn decode<I>(lead: Self, _rest: &mut Peekable<I>) -> Result<Decoded, DecodeError>
    where
        I: Iterator<Item = Self>,
    {
        Ok(Decoded::Scalar(lead))
    }
}
