//! Output sinks.
//!
//! A sink only needs to accept appended text. The writer hands it one fully
//! formatted line per call, so a sink never observes a partial line.

use crate::error::Result;
use std::io;

/// Append-only text destination.
pub trait Sink {
    /// Append `text` to the end of the sink.
    fn append(&mut self, text: &str) -> Result<()>;
}

impl Sink for String {
    fn append(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}

impl<T: Sink + ?Sized> Sink for &mut T {
    fn append(&mut self, text: &str) -> Result<()> {
        (**self).append(text)
    }
}

impl<T: Sink + ?Sized> Sink for Box<T> {
    fn append(&mut self, text: &str) -> Result<()> {
        (**self).append(text)
    }
}

/// Adapts any [`io::Write`] into a [`Sink`].
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Consume the adapter and return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn append(&mut self, text: &str) -> Result<()> {
        self.inner.write_all(text.as_bytes())?;
        Ok(())
    }
}
