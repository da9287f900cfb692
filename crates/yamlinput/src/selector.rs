//! Maps input sources to the adapter that reads them.
//!
//! The mapping is static: [`input_adapter`] returns `S::Adapter` for a source
//! of type `S`, so callers can name the adapter produced for each source kind.
//! [`InputSource`] is the run-time counterpart for callers that only learn
//! the kind of their input while running.

use alloc::{string::String, vec::Vec};
use core::{fmt, iter::FusedIterator};
#[cfg(feature = "std")]
use std::{fs::File, io::BufRead};

#[cfg(feature = "std")]
use crate::adapter::{FileInputAdapter, StreamInputAdapter};
use crate::{
    adapter::{InputAdapter, RangeAdapter, SliceAdapter, StrAdapter},
    error::InputError,
    options::AdapterOptions,
    unit::{CharWidth, CodeUnit},
};

/// Builds an adapter over `source` with default options.
///
/// ```rust
/// use yamlinput::{InputAdapter, input_adapter};
///
/// let mut adapter = input_adapter("a: 1").unwrap();
/// assert_eq!(adapter.get_character().unwrap(), Some(b'a'));
/// ```
///
/// # Errors
///
/// [`InputError::InvalidSource`] for file and stream handles that cannot be
/// read from. Range sources never fail here.
pub fn input_adapter<S: IntoInputAdapter>(source: S) -> Result<S::Adapter, InputError> {
    source.into_input_adapter(AdapterOptions::default())
}

/// Builds an adapter over `source`.
///
/// # Errors
///
/// See [`input_adapter`].
pub fn input_adapter_with<S: IntoInputAdapter>(
    source: S,
    options: AdapterOptions,
) -> Result<S::Adapter, InputError> {
    source.into_input_adapter(options)
}

/// A value that an input adapter can be built from.
pub trait IntoInputAdapter {
    /// The adapter built for this source kind.
    type Adapter: InputAdapter;

    /// Builds the adapter.
    ///
    /// # Errors
    ///
    /// [`InputError::InvalidSource`] if the source cannot be read from.
    fn into_input_adapter(self, options: AdapterOptions) -> Result<Self::Adapter, InputError>;
}

impl<'a, U: CodeUnit> IntoInputAdapter for &'a [U] {
    type Adapter = SliceAdapter<'a, U>;

    fn into_input_adapter(self, options: AdapterOptions) -> Result<Self::Adapter, InputError> {
        Ok(SliceAdapter::from_slice_with_options(self, options))
    }
}

impl<'a, U: CodeUnit, const N: usize> IntoInputAdapter for &'a [U; N] {
    type Adapter = SliceAdapter<'a, U>;

    fn into_input_adapter(self, options: AdapterOptions) -> Result<Self::Adapter, InputError> {
        Ok(SliceAdapter::from_slice_with_options(self, options))
    }
}

impl<'a, U: CodeUnit> IntoInputAdapter for &'a Vec<U> {
    type Adapter = SliceAdapter<'a, U>;

    fn into_input_adapter(self, options: AdapterOptions) -> Result<Self::Adapter, InputError> {
        Ok(SliceAdapter::from_slice_with_options(self, options))
    }
}

impl<'a> IntoInputAdapter for &'a str {
    type Adapter = StrAdapter<'a>;

    fn into_input_adapter(self, options: AdapterOptions) -> Result<Self::Adapter, InputError> {
        Ok(RangeAdapter::with_options(self.bytes(), options))
    }
}

impl<'a> IntoInputAdapter for &'a String {
    type Adapter = StrAdapter<'a>;

    fn into_input_adapter(self, options: AdapterOptions) -> Result<Self::Adapter, InputError> {
        self.as_str().into_input_adapter(options)
    }
}

/// Marks any iterable of code units as a range source.
///
/// ```rust
/// use yamlinput::{CodeUnits, InputAdapter, input_adapter};
///
/// let mut adapter = input_adapter(CodeUnits("é".encode_utf16())).unwrap();
/// assert_eq!(adapter.read_to_bstring().unwrap(), "é");
/// ```
#[derive(Debug, Clone)]
pub struct CodeUnits<I>(pub I);

impl<I> IntoInputAdapter for CodeUnits<I>
where
    I: IntoIterator,
    I::Item: CodeUnit,
{
    type Adapter = RangeAdapter<I::IntoIter>;

    fn into_input_adapter(self, options: AdapterOptions) -> Result<Self::Adapter, InputError> {
        Ok(RangeAdapter::with_options(self.0, options))
    }
}

#[cfg(feature = "std")]
impl<'f> IntoInputAdapter for &'f File {
    type Adapter = FileInputAdapter<'f>;

    fn into_input_adapter(self, options: AdapterOptions) -> Result<Self::Adapter, InputError> {
        FileInputAdapter::with_options(self, options)
    }
}

#[cfg(feature = "std")]
impl<'f> IntoInputAdapter for &'f mut File {
    type Adapter = FileInputAdapter<'f>;

    fn into_input_adapter(self, options: AdapterOptions) -> Result<Self::Adapter, InputError> {
        FileInputAdapter::with_options(self, options)
    }
}

#[cfg(feature = "std")]
impl<'f> IntoInputAdapter for Option<&'f File> {
    type Adapter = FileInputAdapter<'f>;

    fn into_input_adapter(self, options: AdapterOptions) -> Result<Self::Adapter, InputError> {
        FileInputAdapter::from_handle(self, options)
    }
}

/// Marks a buffered reader as a stream source.
///
/// ```rust
/// use std::io::Cursor;
///
/// use yamlinput::{InputAdapter, Stream, input_adapter};
///
/// let mut cursor = Cursor::new("key: value");
/// let mut adapter = input_adapter(Stream(&mut cursor)).unwrap();
/// assert_eq!(adapter.get_character().unwrap(), Some(b'k'));
/// ```
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct Stream<R>(pub R);

#[cfg(feature = "std")]
impl<R: BufRead> IntoInputAdapter for Stream<R> {
    type Adapter = StreamInputAdapter<R>;

    fn into_input_adapter(self, _options: AdapterOptions) -> Result<Self::Adapter, InputError> {
        StreamInputAdapter::new(self.0)
    }
}

/// A source whose kind is only known at run time.
pub enum InputSource<'a> {
    /// UTF-8 code units.
    Utf8(&'a [u8]),
    /// UTF-16 code units.
    Utf16(&'a [u16]),
    /// UTF-32 code units.
    Utf32(&'a [u32]),
    /// A file handle that may be missing.
    #[cfg(feature = "std")]
    File(Option<&'a File>),
    /// A buffered reader.
    #[cfg(feature = "std")]
    Stream(&'a mut dyn BufRead),
}

impl fmt::Debug for InputSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Utf8(units) => f.debug_tuple("Utf8").field(units).finish(),
            InputSource::Utf16(units) => f.debug_tuple("Utf16").field(units).finish(),
            InputSource::Utf32(units) => f.debug_tuple("Utf32").field(units).finish(),
            #[cfg(feature = "std")]
            InputSource::File(file) => f.debug_tuple("File").field(file).finish(),
            #[cfg(feature = "std")]
            InputSource::Stream(_) => f.debug_tuple("Stream").finish_non_exhaustive(),
        }
    }
}

impl<'a> InputSource<'a> {
    /// Builds the adapter for this source's kind.
    ///
    /// # Errors
    ///
    /// See [`input_adapter`].
    pub fn into_adapter(self, options: AdapterOptions) -> Result<AnyInputAdapter<'a>, InputError> {
        Ok(match self {
            InputSource::Utf8(units) => AnyInputAdapter::Utf8(units.into_input_adapter(options)?),
            InputSource::Utf16(units) => AnyInputAdapter::Utf16(units.into_input_adapter(options)?),
            InputSource::Utf32(units) => AnyInputAdapter::Utf32(units.into_input_adapter(options)?),
            #[cfg(feature = "std")]
            InputSource::File(file) => AnyInputAdapter::File(file.into_input_adapter(options)?),
            #[cfg(feature = "std")]
            InputSource::Stream(reader) => AnyInputAdapter::Stream(StreamInputAdapter::new(reader)?),
        })
    }
}

/// The adapter built from an [`InputSource`]. One variant per source kind.
pub enum AnyInputAdapter<'a> {
    /// Over UTF-8 code units.
    Utf8(SliceAdapter<'a, u8>),
    /// Over UTF-16 code units.
    Utf16(SliceAdapter<'a, u16>),
    /// Over UTF-32 code units.
    Utf32(SliceAdapter<'a, u32>),
    /// Over a file handle.
    #[cfg(feature = "std")]
    File(FileInputAdapter<'a>),
    /// Over a buffered reader.
    #[cfg(feature = "std")]
    Stream(StreamInputAdapter<&'a mut dyn BufRead>),
}

impl AnyInputAdapter<'_> {
    /// Pulls the next byte; see [`InputAdapter::get_character`].
    ///
    /// # Errors
    ///
    /// See [`InputAdapter::get_character`].
    pub fn get_character(&mut self) -> Result<Option<u8>, InputError> {
        match self {
            AnyInputAdapter::Utf8(adapter) => adapter.get_character(),
            AnyInputAdapter::Utf16(adapter) => adapter.get_character(),
            AnyInputAdapter::Utf32(adapter) => adapter.get_character(),
            #[cfg(feature = "std")]
            AnyInputAdapter::File(adapter) => adapter.get_character(),
            #[cfg(feature = "std")]
            AnyInputAdapter::Stream(adapter) => adapter.get_character(),
        }
    }

    /// Width of the code units the wrapped adapter reads.
    #[must_use]
    pub fn char_width(&self) -> CharWidth {
        match self {
            AnyInputAdapter::Utf8(adapter) => adapter.char_width(),
            AnyInputAdapter::Utf16(adapter) => adapter.char_width(),
            AnyInputAdapter::Utf32(adapter) => adapter.char_width(),
            #[cfg(feature = "std")]
            AnyInputAdapter::File(adapter) => adapter.char_width(),
            #[cfg(feature = "std")]
            AnyInputAdapter::Stream(adapter) => adapter.char_width(),
        }
    }
}

impl fmt::Debug for AnyInputAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyInputAdapter::Utf8(adapter) => f.debug_tuple("Utf8").field(adapter).finish(),
            AnyInputAdapter::Utf16(adapter) => f.debug_tuple("Utf16").field(adapter).finish(),
            AnyInputAdapter::Utf32(adapter) => f.debug_tuple("Utf32").field(adapter).finish(),
            #[cfg(feature = "std")]
            AnyInputAdapter::File(adapter) => f.debug_tuple("File").field(adapter).finish(),
            #[cfg(feature = "std")]
            AnyInputAdapter::Stream(adapter) => f
                .debug_struct("Stream")
                .field("bytes_emitted", &adapter.bytes_emitted())
                .finish_non_exhaustive(),
        }
    }
}

/// Yields the remaining bytes and stops after the first error.
impl<'a> IntoIterator for AnyInputAdapter<'a> {
    type Item = Result<u8, InputError>;
    type IntoIter = AnyBytes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        AnyBytes {
            adapter: self,
            done: false,
        }
    }
}

/// Iterator over an [`AnyInputAdapter`]; see [`InputAdapter::bytes`].
#[derive(Debug)]
pub struct AnyBytes<'a> {
    adapter: AnyInputAdapter<'a>,
    done: bool,
}

impl Iterator for AnyBytes<'_> {
    type Item = Result<u8, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.adapter.get_character().transpose();
        // End of input and errors both end the iteration.
        self.done = !matches!(item, Some(Ok(_)));
        item
    }
}

impl FusedIterator for AnyBytes<'_> {}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn dynamic_sources_report_their_width() {
        let utf16: Vec<u16> = "hi".encode_utf16().collect();
        let adapter = InputSource::Utf16(&utf16)
            .into_adapter(AdapterOptions::default())
            .unwrap();
        assert_eq!(adapter.char_width(), CharWidth::Utf16);

        let mut cursor = Cursor::new("hi");
        let adapter = InputSource::Stream(&mut cursor)
            .into_adapter(AdapterOptions::default())
            .unwrap();
        assert_eq!(adapter.char_width(), CharWidth::Utf8);
    }

    #[test]
    fn dynamic_adapter_iterates() {
        let utf32: Vec<u32> = "aあ".chars().map(u32::from).collect();
        let adapter = InputSource::Utf32(&utf32)
            .into_adapter(AdapterOptions::default())
            .unwrap();
        let bytes: Vec<u8> = adapter.into_iter().collect::<Result<_, _>>().unwrap();
        assert_eq!(bytes, "aあ".as_bytes());
    }

    #[test]
    fn dynamic_iteration_stops_after_strict_error() {
        let utf16: &[u16] = &[0x0061, 0xDC0B, 0x0062];
        let items: Vec<_> = InputSource::Utf16(utf16)
            .into_adapter(AdapterOptions::default())
            .unwrap()
            .into_iter()
            .take(10)
            .collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().ok(), Some(&b'a'));
        assert_eq!(
            items[1].as_ref().err().and_then(InputError::as_decode_error),
            Some(crate::DecodeError::UnpairedLowSurrogate(0xDC0B))
        );
    }

    #[test]
    fn dynamic_iterator_is_fused_at_eof() {
        let mut bytes = InputSource::Utf8(b"a")
            .into_adapter(AdapterOptions::default())
            .unwrap()
            .into_iter();
        assert_eq!(bytes.next().unwrap().unwrap(), b'a');
        assert!(bytes.next().is_none());
        assert!(bytes.next().is_none());
    }

    #[test]
    fn dynamic_types_render_with_debug() {
        let mut cursor = Cursor::new("hi");
        let source = InputSource::Stream(&mut cursor);
        insta::assert_snapshot!(format!("{source:?}"), @"Stream(..)");
        let adapter = source.into_adapter(AdapterOptions::default()).unwrap();
        insta::assert_snapshot!(format!("{adapter:?}"), @"Stream { bytes_emitted: 0, .. }");

        let source = InputSource::Utf8(b"a");
        insta::assert_snapshot!(format!("{source:?}"), @"Utf8([97])");
    }

    #[test]
    fn dynamic_null_file_is_rejected() {
        let err = InputSource::File(None)
            .into_adapter(AdapterOptions::default())
            .unwrap_err();
        assert!(err.is_invalid_source());
    }
}
