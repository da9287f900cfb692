#![no_main]
use std::io::{BufReader, Cursor};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yamlinput::{
    AdapterOptions, DecodePolicy, InputAdapter, Stream, input_adapter, input_adapter_with,
};

#[derive(Debug, Arbitrary)]
enum Input {
    Utf16 { units: Vec<u16>, replace: bool },
    Utf32 { units: Vec<u32>, replace: bool },
    Bytes { bytes: Vec<u8>, capacity: u8 },
}

fn options(replace: bool) -> AdapterOptions {
    AdapterOptions {
        decode_policy: if replace {
            DecodePolicy::Replace
        } else {
            DecodePolicy::Strict
        },
        ..Default::default()
    }
}

/// Pull until end of input or the first error, then check that end of input
/// (or the error) sticks.
fn drain<A: InputAdapter>(mut adapter: A) -> (Vec<u8>, bool) {
    let mut out = Vec::new();
    loop {
        match adapter.get_character() {
            Ok(Some(byte)) => out.push(byte),
            Ok(None) => {
                assert!(matches!(adapter.get_character(), Ok(None)));
                return (out, true);
            }
            Err(_) => {
                assert!(adapter.get_character().is_err());
                return (out, false);
            }
        }
    }
}

fn check(input: Input) {
    match input {
        Input::Utf16 { units, replace } => {
            let (bytes, ok) = drain(input_adapter_with(&units, options(replace)).unwrap());
            if replace {
                assert!(ok);
                assert_eq!(bytes, String::from_utf16_lossy(&units).as_bytes());
            } else {
                match String::from_utf16(&units) {
                    Ok(text) => assert!(ok && bytes == text.as_bytes()),
                    Err(_) => assert!(!ok && std::str::from_utf8(&bytes).is_ok()),
                }
            }
        }
        Input::Utf32 { units, replace } => {
            let (bytes, ok) = drain(input_adapter_with(&units, options(replace)).unwrap());
            let decoded: Option<String> = units.iter().map(|&u| char::from_u32(u)).collect();
            match decoded {
                Some(text) => assert!(ok && bytes == text.as_bytes()),
                None if replace => assert!(ok && std::str::from_utf8(&bytes).is_ok()),
                None => assert!(!ok),
            }
        }
        Input::Bytes { bytes, capacity } => {
            let (from_range, _) = drain(input_adapter(&bytes).unwrap());
            let reader = BufReader::with_capacity(usize::from(capacity) + 1, Cursor::new(&bytes));
            let (from_stream, _) = drain(input_adapter(Stream(reader)).unwrap());
            assert_eq!(from_range, bytes);
            assert_eq!(from_stream, bytes);
        }
    }
}

fuzz_target!(|input: Input| check(input));
