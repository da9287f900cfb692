use alloc::{string::String, vec::Vec};
use std::io::{BufReader, Cursor, Seek, SeekFrom, Write};

use quickcheck::QuickCheck;

use crate::{AdapterOptions, CodeUnits, InputAdapter, Stream, input_adapter, input_adapter_with};

fn drain<A: InputAdapter>(mut adapter: A) -> Vec<u8> {
    let mut out = Vec::new();
    while let Some(byte) = adapter.get_character().unwrap() {
        out.push(byte);
    }
    // End of input must stick.
    assert_eq!(adapter.get_character().unwrap(), None);
    assert_eq!(adapter.get_character().unwrap(), None);
    out
}

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: every in-memory representation of the same text, and a stream
/// over its UTF-8 bytes, yields the UTF-8 encoding of that text.
#[test]
fn ranges_and_streams_agree_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, capacity: u8) -> bool {
        let expected = text.as_bytes();
        let utf16: Vec<u16> = text.encode_utf16().collect();
        let utf32: Vec<u32> = text.chars().map(u32::from).collect();
        let chars: Vec<char> = text.chars().collect();

        let mut reader = BufReader::with_capacity(usize::from(capacity) + 1, Cursor::new(expected));

        drain(input_adapter(expected).unwrap()) == expected
            && drain(input_adapter(text.as_str()).unwrap()) == expected
            && drain(input_adapter(&utf16).unwrap()) == expected
            && drain(input_adapter(&utf32).unwrap()) == expected
            && drain(input_adapter(&chars).unwrap()) == expected
            && drain(input_adapter(CodeUnits(text.encode_utf16())).unwrap()) == expected
            && drain(input_adapter(Stream(&mut reader)).unwrap()) == expected
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String, u8) -> bool);
}

/// Property: a file adapter agrees with a stream adapter over the same bytes,
/// for any read chunk size.
#[test]
fn files_and_streams_agree_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, chunk: u8) -> bool {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();

        let options = AdapterOptions {
            read_chunk_size: usize::from(chunk),
            ..Default::default()
        };
        let from_file = drain(input_adapter_with(&file, options).unwrap());
        let from_stream = drain(input_adapter(Stream(Cursor::new(text.as_bytes()))).unwrap());
        from_file == from_stream && from_file == text.as_bytes()
    }

    QuickCheck::new()
        .tests(test_count() / 10)
        .quickcheck(prop as fn(String, u8) -> bool);
}
