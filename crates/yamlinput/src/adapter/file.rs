use alloc::{boxed::Box, vec};
use std::{
    fs::File,
    io::{ErrorKind, Read},
};

use tracing::{debug, trace};

use super::InputAdapter;
use crate::{error::InputError, options::AdapterOptions};

/// Adapter over a file handle owned by the caller.
///
/// Bytes are read in chunks of [`AdapterOptions::read_chunk_size`] and
/// surfaced unchanged; the file is expected to already hold UTF-8. The
/// adapter only borrows the handle and never closes it.
#[derive(Debug)]
pub struct FileInputAdapter<'f> {
    file: &'f File,
    chunk: Box<[u8]>,
    pos: usize,
    filled: usize,
    eof: bool,
    emitted: u64,
}

impl<'f> FileInputAdapter<'f> {
    /// Wraps `file` with default options.
    ///
    /// # Errors
    ///
    /// [`InputError::InvalidSource`] if the handle cannot be read from.
    pub fn new(file: &'f File) -> Result<Self, InputError> {
        Self::with_options(file, AdapterOptions::default())
    }

    /// Wraps `file`.
    ///
    /// The handle is validated here rather than on the first pull: its
    /// metadata must be readable, it must not name a directory and it must
    /// have been opened for reading.
    ///
    /// # Errors
    ///
    /// [`InputError::InvalidSource`] if the handle cannot be read from.
    pub fn with_options(file: &'f File, options: AdapterOptions) -> Result<Self, InputError> {
        let metadata = file
            .metadata()
            .map_err(|err| InputError::invalid_source_io("file handle is not open", err))?;
        if metadata.is_dir() {
            return Err(InputError::invalid_source("file handle refers to a directory"));
        }
        // An empty read consumes nothing but fails on handles opened without
        // read access.
        let mut handle = file;
        loop {
            match handle.read(&mut []) {
                Ok(_) => break,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    return Err(InputError::invalid_source_io("file handle is not readable", err));
                }
            }
        }

        let chunk_size = options.chunk_size();
        debug!(chunk_size, len = metadata.len(), "file input adapter created");
        Ok(Self {
            file,
            chunk: vec![0; chunk_size].into_boxed_slice(),
            pos: 0,
            filled: 0,
            eof: false,
            emitted: 0,
        })
    }

    /// Accepts a possibly missing handle, rejecting `None` the same way as an
    /// unreadable one.
    ///
    /// # Errors
    ///
    /// [`InputError::InvalidSource`] if `file` is `None` or unreadable.
    pub fn from_handle(file: Option<&'f File>, options: AdapterOptions) -> Result<Self, InputError> {
        match file {
            Some(file) => Self::with_options(file, options),
            None => Err(InputError::invalid_source("file handle is null")),
        }
    }

    /// Number of bytes handed out so far.
    #[must_use]
    pub fn bytes_emitted(&self) -> u64 {
        self.emitted
    }

    fn refill(&mut self) -> Result<(), InputError> {
        let mut file = self.file;
        loop {
            match file.read(&mut self.chunk) {
                Ok(0) => {
                    trace!(bytes = self.emitted, "file input exhausted");
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.pos = 0;
                    self.filled = n;
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl InputAdapter for FileInputAdapter<'_> {
    type CharType = u8;

    fn get_character(&mut self) -> Result<Option<u8>, InputError> {
        if self.pos == self.filled {
            if self.eof {
                return Ok(None);
            }
            self.refill()?;
            if self.eof {
                return Ok(None);
            }
        }

        let byte = self.chunk[self.pos];
        self.pos += 1;
        self.emitted += 1;
        Ok(Some(byte))
    }
}
