use alloc::string::String;

use thiserror::Error;

/// A code-unit sequence that does not decode to a Unicode scalar value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A high surrogate that is not immediately followed by a low surrogate.
    #[error("unpaired high surrogate U+{0:04X}")]
    UnpairedHighSurrogate(u16),
    /// A low surrogate that does not follow a high surrogate.
    #[error("unpaired low surrogate U+{0:04X}")]
    UnpairedLowSurrogate(u16),
    /// A 32-bit unit above U+10FFFF or inside the surrogate range.
    #[error("invalid scalar value 0x{0:X}")]
    InvalidScalar(u32),
}

/// Errors surfaced by adapter construction or by a pull.
#[derive(Error, Debug)]
pub enum InputError {
    /// The file or stream handle handed to the selector cannot be read from.
    /// Only ever returned at construction.
    #[error("invalid input source: {reason}")]
    InvalidSource {
        /// Why the handle was rejected.
        reason: String,
        /// The I/O failure observed while probing the handle, if any.
        #[cfg(feature = "std")]
        #[source]
        source: Option<std::io::Error>,
    },
    /// The source contains malformed UTF-16 or UTF-32.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    /// The underlying reader failed.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    #[cfg(feature = "std")]
    pub(crate) fn invalid_source(reason: impl Into<String>) -> Self {
        InputError::InvalidSource {
            reason: reason.into(),
            source: None,
        }
    }

    #[cfg(feature = "std")]
    pub(crate) fn invalid_source_io(reason: impl Into<String>, err: std::io::Error) -> Self {
        InputError::InvalidSource {
            reason: reason.into(),
            source: Some(err),
        }
    }

    /// Returns the decode error, if this is one.
    #[must_use]
    pub fn as_decode_error(&self) -> Option<DecodeError> {
        match self {
            InputError::Decode(err) => Some(*err),
            _ => None,
        }
    }

    /// Whether this error was raised while constructing the adapter.
    #[must_use]
    pub fn is_invalid_source(&self) -> bool {
        matches!(self, InputError::InvalidSource { .. })
    }
}
