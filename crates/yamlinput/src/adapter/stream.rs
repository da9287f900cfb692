use std::io::{BufRead, ErrorKind};

use tracing::{debug, trace};

use super::InputAdapter;
use crate::error::InputError;

/// Adapter over a buffered reader.
///
/// Bytes are surfaced unchanged from the reader's buffer. Pass `&mut reader`
/// to keep ownership of the stream with the caller.
#[derive(Debug)]
pub struct StreamInputAdapter<R> {
    reader: R,
    eof: bool,
    emitted: u64,
}

impl<R: BufRead> StreamInputAdapter<R> {
    /// Wraps `reader`, probing it once with `fill_buf`.
    ///
    /// # Errors
    ///
    /// [`InputError::InvalidSource`] if the probe fails.
    pub fn new(mut reader: R) -> Result<Self, InputError> {
        let buffered = loop {
            match reader.fill_buf() {
                Ok(buf) => break buf.len(),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    return Err(InputError::invalid_source_io("stream is not readable", err));
                }
            }
        };
        debug!(buffered, "stream input adapter created");
        Ok(Self {
            reader,
            eof: false,
            emitted: 0,
        })
    }

    /// Number of bytes handed out so far.
    #[must_use]
    pub fn bytes_emitted(&self) -> u64 {
        self.emitted
    }

    /// Gives the reader back, positioned after the last byte handed out.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> InputAdapter for StreamInputAdapter<R> {
    type CharType = u8;

    fn get_character(&mut self) -> Result<Option<u8>, InputError> {
        if self.eof {
            return Ok(None);
        }

        let next = loop {
            match self.reader.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        };

        match next {
            Some(byte) => {
                self.reader.consume(1);
                self.emitted += 1;
                Ok(Some(byte))
            }
            None => {
                trace!(bytes = self.emitted, "stream input exhausted");
                self.eof = true;
                Ok(None)
            }
        }
    }
}
