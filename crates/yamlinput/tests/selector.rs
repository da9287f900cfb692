#![allow(missing_docs)]
//! The selector maps each source kind to a fixed adapter type.

use std::{
    fs::File,
    io::{BufReader, Cursor},
    path::PathBuf,
};

use yamlinput::{
    CharWidth, CodeUnits, FileInputAdapter, InputAdapter, RangeAdapter, SliceAdapter, StrAdapter,
    Stream, StreamInputAdapter, input_adapter,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/input_adapter_test_data.txt")
}

#[test]
fn byte_array_selects_slice_adapter() {
    let input = *b"test";
    let adapter: SliceAdapter<'_, u8> = input_adapter(&input).unwrap();
    assert_eq!(adapter.char_width(), CharWidth::Utf8);
}

#[test]
fn byte_subrange_selects_slice_adapter() {
    let input = b"test\0";
    let mut adapter: SliceAdapter<'_, u8> = input_adapter(&input[..input.len() - 1]).unwrap();
    assert_eq!(adapter.read_to_bstring().unwrap(), "test");
}

#[test]
fn utf16_array_selects_utf16_slice_adapter() {
    let input: [u16; 4] = [0x74, 0x65, 0x73, 0x74];
    let adapter: SliceAdapter<'_, u16> = input_adapter(&input).unwrap();
    assert_eq!(adapter.char_width(), CharWidth::Utf16);
    assert_eq!(<SliceAdapter<'_, u16> as InputAdapter>::CHAR_WIDTH, CharWidth::Utf16);
}

#[test]
fn strings_select_str_adapter() {
    let owned = String::from("test");
    let adapter: StrAdapter<'_> = input_adapter(&owned).unwrap();
    assert_eq!(adapter.char_width(), CharWidth::Utf8);
    let _: StrAdapter<'_> = input_adapter("test").unwrap();
}

#[test]
fn char_and_utf32_ranges_are_32_bit() {
    let chars = vec!['t', 'e', 's', 't'];
    let adapter: SliceAdapter<'_, char> = input_adapter(&chars).unwrap();
    assert_eq!(adapter.char_width(), CharWidth::Utf32);

    let units: &[u32] = &[0x74];
    let adapter: SliceAdapter<'_, u32> = input_adapter(units).unwrap();
    assert_eq!(adapter.char_width(), CharWidth::Utf32);
}

#[test]
fn iterators_select_range_adapter() {
    let adapter: RangeAdapter<std::str::EncodeUtf16<'_>> =
        input_adapter(CodeUnits("test".encode_utf16())).unwrap();
    assert_eq!(adapter.char_width(), CharWidth::Utf16);
}

#[test]
fn null_file_handle_is_rejected() {
    let handle: Option<&File> = None;
    let err = input_adapter(handle).unwrap_err();
    assert!(err.is_invalid_source());
    insta::assert_snapshot!(err.to_string(), @"invalid input source: file handle is null");
}

#[test]
fn valid_file_handle_selects_file_adapter() {
    let file = File::open(fixture()).unwrap();
    let adapter: FileInputAdapter<'_> = input_adapter(Some(&file)).unwrap();
    assert_eq!(adapter.char_width(), CharWidth::Utf8);
    let _: FileInputAdapter<'_> = input_adapter(&file).unwrap();
}

#[test]
fn reader_selects_stream_adapter() {
    let mut reader = BufReader::new(File::open(fixture()).unwrap());
    let adapter: StreamInputAdapter<&mut BufReader<File>> = input_adapter(Stream(&mut reader)).unwrap();
    assert_eq!(adapter.char_width(), CharWidth::Utf8);

    let _: StreamInputAdapter<Cursor<&str>> = input_adapter(Stream(Cursor::new("test"))).unwrap();
}
