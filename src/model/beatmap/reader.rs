use std::{borrow::Cow, io::Error as IoError};

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
use std::io::{BufRead, BufReader, Read};

#[cfg(feature = "async_tokio")]
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

#[cfg(feature = "async_std")]
use async_std::io::{prelude::BufReadExt, BufReader, Read};

/// Line-wise reader over the source of a `.osu` file.
pub(crate) struct FileReader<R> {
    buf: Vec<u8>,
    inner: BufReader<R>,
}

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
impl<R: Read> FileReader<R> {
    pub(crate) fn new(src: R) -> Self {
        Self {
            inner: BufReader::new(src),
            buf: Vec::with_capacity(32),
        }
    }

    /// Read the next line into the buffer. Returns `0` on EOF.
    pub(crate) fn next_line(&mut self) -> Result<usize, IoError> {
        self.buf.clear();

        self.inner.read_until(b'\n', &mut self.buf)
    }
}

#[cfg(feature = "async_tokio")]
impl<R: AsyncRead + Unpin> FileReader<R> {
    pub(crate) fn new(src: R) -> Self {
        Self {
            inner: BufReader::new(src),
            buf: Vec::with_capacity(32),
        }
    }

    /// Read the next line into the buffer. Returns `0` on EOF.
    pub(crate) async fn next_line(&mut self) -> Result<usize, IoError> {
        self.buf.clear();

        self.inner.read_until(b'\n', &mut self.buf).await
    }
}

#[cfg(feature = "async_std")]
impl<R: Read + Unpin> FileReader<R> {
    pub(crate) fn new(src: R) -> Self {
        Self {
            inner: BufReader::new(src),
            buf: Vec::with_capacity(32),
        }
    }

    /// Read the next line into the buffer. Returns `0` on EOF.
    pub(crate) async fn next_line(&mut self) -> Result<usize, IoError> {
        self.buf.clear();

        self.inner.read_until(b'\n', &mut self.buf).await
    }
}

impl<R> FileReader<R> {
    /// The current line, invalid UTF-8 being replaced.
    pub(crate) fn line(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buf)
    }
}
