/// How range adapters treat code units that do not decode to a scalar value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecodePolicy {
    /// Fail the pull with [`InputError::Decode`]. The error is sticky: every
    /// later pull on the same adapter returns it again and no further bytes
    /// are produced.
    ///
    /// [`InputError::Decode`]: crate::InputError::Decode
    #[default]
    Strict,
    /// Emit U+FFFD (`EF BF BD`) in place of the malformed unit and continue
    /// with the unit that follows it.
    Replace,
}

/// Configuration options for input adapters.
///
/// # Examples
///
/// ```rust
/// use yamlinput::{AdapterOptions, DecodePolicy, InputAdapter, input_adapter_with};
///
/// let options = AdapterOptions {
///     decode_policy: DecodePolicy::Replace,
///     ..Default::default()
/// };
/// let units: &[u16] = &[0x0061, 0xDC00];
/// let mut adapter = input_adapter_with(units, options).unwrap();
/// assert_eq!(adapter.get_character().unwrap(), Some(b'a'));
/// assert_eq!(adapter.get_character().unwrap(), Some(0xEF));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdapterOptions {
    /// What to do with lone surrogates and out-of-range UTF-32 units.
    ///
    /// Byte-oriented sources never decode, so this only affects 16 and
    /// 32-bit ranges.
    ///
    /// # Default
    ///
    /// [`DecodePolicy::Strict`]
    pub decode_policy: DecodePolicy,

    /// Number of bytes the file adapter requests from the handle per `read`
    /// call. Values below one are treated as one.
    ///
    /// Stream adapters use the buffer of their `BufRead` instead.
    ///
    /// # Default
    ///
    /// `4096`
    pub read_chunk_size: usize,
}

impl AdapterOptions {
    /// Default value of [`AdapterOptions::read_chunk_size`].
    pub const DEFAULT_READ_CHUNK_SIZE: usize = 4096;

    #[cfg(feature = "std")]
    pub(crate) fn chunk_size(&self) -> usize {
        self.read_chunk_size.max(1)
    }
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Self {
            decode_policy: DecodePolicy::default(),
            read_chunk_size: Self::DEFAULT_READ_CHUNK_SIZE,
        }
    }
}
