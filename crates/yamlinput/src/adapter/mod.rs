//! The byte-pull contract and its implementations.
//!
//! Every adapter surfaces the logical input as UTF-8, one byte per
//! [`InputAdapter::get_character`] call, and reports end of input with
//! `Ok(None)`. Once `Ok(None)` has been returned it is returned forever.

mod range;

#[cfg(feature = "std")]
mod file;
#[cfg(feature = "std")]
mod stream;

use bstr::BString;

#[cfg(feature = "std")]
pub use file::FileInputAdapter;
pub use range::{RangeAdapter, SliceAdapter, StrAdapter};
#[cfg(feature = "std")]
pub use stream::StreamInputAdapter;

use crate::{
    error::InputError,
    unit::{CharWidth, CodeUnit},
};

/// A source of UTF-8 bytes for the lexer.
pub trait InputAdapter {
    /// The code unit type the adapter was built from. Byte-oriented sources
    /// (files and streams) report `u8`.
    type CharType: CodeUnit;

    /// Width of [`InputAdapter::CharType`].
    const CHAR_WIDTH: CharWidth = <Self::CharType as CodeUnit>::WIDTH;

    /// Pulls the next byte of the input.
    ///
    /// Returns `Ok(Some(byte))` for the next UTF-8 byte and `Ok(None)` once
    /// all input has been emitted.
    ///
    /// # Errors
    ///
    /// [`InputError::Decode`] for malformed wide input under
    /// [`DecodePolicy::Strict`], or an I/O error from the underlying reader.
    ///
    /// [`DecodePolicy::Strict`]: crate::DecodePolicy::Strict
    fn get_character(&mut self) -> Result<Option<u8>, InputError>;

    /// Runtime view of [`InputAdapter::CHAR_WIDTH`].
    fn char_width(&self) -> CharWidth {
        Self::CHAR_WIDTH
    }

    /// Iterates over the remaining bytes. The iterator stops after the first
    /// error.
    fn bytes(&mut self) -> Bytes<'_, Self>
    where
        Self: Sized,
    {
        Bytes {
            adapter: self,
            done: false,
        }
    }

    /// Drains the adapter into a byte string.
    ///
    /// # Errors
    ///
    /// The first error returned by [`InputAdapter::get_character`].
    fn read_to_bstring(&mut self) -> Result<BString, InputError>
    where
        Self: Sized,
    {
        let mut out = BString::default();
        while let Some(byte) = self.get_character()? {
            out.push(byte);
        }
        Ok(out)
    }
}

impl<A: InputAdapter + ?Sized> InputAdapter for &mut A {
    type CharType = A::CharType;

    fn get_character(&mut self) -> Result<Option<u8>, InputError> {
        (**self).get_character()
    }
}

/// Iterator returned by [`InputAdapter::bytes`].
#[derive(Debug)]
pub struct Bytes<'a, A> {
    adapter: &'a mut A,
    done: bool,
}

impl<A: InputAdapter> Iterator for Bytes<'_, A> {
    type Item = Result<u8, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.adapter.get_character() {
            Ok(Some(byte)) => Some(Ok(byte)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<A: InputAdapter> core::iter::FusedIterator for Bytes<'_, A> {}
