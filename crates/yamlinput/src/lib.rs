//! Input adapters for a YAML lexer.
//!
//! A lexer reads its input one UTF-8 byte at a time through
//! [`InputAdapter::get_character`], whatever the input looks like underneath:
//!
//! - in-memory ranges of UTF-8, UTF-16 or UTF-32 code units
//!   ([`RangeAdapter`]), re-encoded to UTF-8 scalar by scalar;
//! - file handles owned by the caller ([`FileInputAdapter`]);
//! - buffered readers ([`StreamInputAdapter`]).
//!
//! [`input_adapter`] picks the adapter from the type of the source. Logically
//! identical input produces identical bytes and the same end-of-input
//! position from every adapter.
//!
//! ```rust
//! use yamlinput::{InputAdapter, input_adapter};
//!
//! let utf16: &[u16] = &[0x0061, 0x3042, 0xD840, 0xDC0B];
//! let mut adapter = input_adapter(utf16).unwrap();
//! let mut bytes = Vec::new();
//! while let Some(byte) = adapter.get_character().unwrap() {
//!     bytes.push(byte);
//! }
//! assert_eq!(bytes, [0x61, 0xE3, 0x81, 0x82, 0xF0, 0xA0, 0x80, 0x8B]);
//! assert_eq!(adapter.get_character().unwrap(), None);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod adapter;
pub mod codec;
mod error;
mod options;
mod selector;
mod unit;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use adapter::{FileInputAdapter, StreamInputAdapter};
pub use adapter::{Bytes, InputAdapter, RangeAdapter, SliceAdapter, StrAdapter};
pub use error::{DecodeError, InputError};
pub use options::{AdapterOptions, DecodePolicy};
#[cfg(feature = "std")]
pub use selector::Stream;
pub use selector::{
    AnyBytes, AnyInputAdapter, CodeUnits, InputSource, IntoInputAdapter, input_adapter, input_adapter_with,
};
pub use unit::{CharWidth, CodeUnit, Decoded};
