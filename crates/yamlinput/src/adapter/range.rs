use core::{
    fmt,
    iter::{Copied, Peekable},
};

use tracing::{debug, trace, warn};

use super::InputAdapter;
use crate::{
    codec::{self, PendingBytes, REPLACEMENT_CHARACTER},
    error::{DecodeError, InputError},
    options::{AdapterOptions, DecodePolicy},
    unit::{CodeUnit, Decoded},
};

/// Range adapter over a borrowed slice of code units.
pub type SliceAdapter<'a, U> = RangeAdapter<Copied<core::slice::Iter<'a, U>>>;

/// Range adapter over the bytes of a `str`.
pub type StrAdapter<'a> = RangeAdapter<core::str::Bytes<'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Active,
    Exhausted,
    Failed(DecodeError),
}

/// Adapter over an in-memory range of fixed-width code units.
///
/// 8-bit units are surfaced unchanged. 16 and 32-bit units are decoded one
/// scalar value at a time and re-encoded as UTF-8; the encoded bytes are
/// handed out one per pull before the next unit is read.
pub struct RangeAdapter<I>
where
    I: Iterator,
{
    units: Peekable<I>,
    pending: PendingBytes,
    policy: DecodePolicy,
    state: State,
    emitted: u64,
}

// `Peekable<I>` holds a peeked `I::Item`, so both impls bound the item too.
impl<I> fmt::Debug for RangeAdapter<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeAdapter")
            .field("units", &self.units)
            .field("pending", &self.pending)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .field("emitted", &self.emitted)
            .finish()
    }
}

impl<I> Clone for RangeAdapter<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            units: self.units.clone(),
            pending: self.pending,
            policy: self.policy,
            state: self.state,
            emitted: self.emitted,
        }
    }
}

impl<I> RangeAdapter<I>
where
    I: Iterator,
    I::Item: CodeUnit,
{
    /// Wraps `units` with default options.
    pub fn new<T>(units: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self::with_options(units, AdapterOptions::default())
    }

    /// Wraps `units`.
    pub fn with_options<T>(units: T, options: AdapterOptions) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        let width = <I::Item as CodeUnit>::WIDTH;
        debug!(?width, policy = ?options.decode_policy, "range input adapter created");
        Self {
            units: units.into_iter().peekable(),
            pending: PendingBytes::new(),
            policy: options.decode_policy,
            state: State::Active,
            emitted: 0,
        }
    }
}

impl<'a, U> SliceAdapter<'a, U>
where
    U: CodeUnit,
{
    /// Wraps a borrowed slice with default options.
    #[must_use]
    pub fn from_slice(units: &'a [U]) -> Self {
        Self::from_slice_with_options(units, AdapterOptions::default())
    }

    /// Wraps a borrowed slice.
    #[must_use]
    pub fn from_slice_with_options(units: &'a [U], options: AdapterOptions) -> Self {
        Self::with_options(units.iter().copied(), options)
    }
}

impl<I> RangeAdapter<I>
where
    I: Iterator,
    I::Item: CodeUnit,
{
    /// Number of bytes handed out so far.
    #[must_use]
    pub fn bytes_emitted(&self) -> u64 {
        self.emitted
    }

    #[inline]
    fn emit(&mut self, byte: u8) -> Option<u8> {
        self.emitted += 1;
        Some(byte)
    }

    fn on_decode_error(&mut self, err: DecodeError) -> Result<Decoded, InputError> {
        match self.policy {
            DecodePolicy::Strict => {
                warn!(error = %err, offset = self.emitted, "malformed input");
                self.state = State::Failed(err);
                Err(err.into())
            }
            DecodePolicy::Replace => {
                warn!(error = %err, offset = self.emitted, "malformed input replaced with U+FFFD");
                Ok(Decoded::Scalar(REPLACEMENT_CHARACTER))
            }
        }
    }
}

impl<I> InputAdapter for RangeAdapter<I>
where
    I: Iterator,
    I::Item: CodeUnit,
{
    type CharType = I::Item;

    fn get_character(&mut self) -> Result<Option<u8>, InputError> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(self.emit(byte));
        }

        match self.state {
            State::Active => {}
            State::Exhausted => return Ok(None),
            State::Failed(err) => return Err(err.into()),
        }

        let Some(lead) = self.units.next() else {
            trace!(bytes = self.emitted, "range input exhausted");
            self.state = State::Exhausted;
            return Ok(None);
        };

        let decoded = match <I::Item as CodeUnit>::decode(lead, &mut self.units) {
            Ok(decoded) => decoded,
            Err(err) => self.on_decode_error(err)?,
        };

        match decoded {
            Decoded::Byte(byte) => Ok(self.emit(byte)),
            Decoded::Scalar(scalar) => {
                self.pending = codec::encode_utf8(scalar);
                match self.pending.pop_front() {
                    Some(byte) => Ok(self.emit(byte)),
                    None => Ok(None),
                }
            }
        }
    }
}
