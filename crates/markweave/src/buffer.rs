//! Append-only output sink.

use std::fmt::{self, Write as _};
use std::io;

/// Append-only character sink that one top-level render writes into.
///
/// The buffer performs no escaping of its own: [`append`](Self::append) writes
/// the textual form of a value as-is. Escaping belongs to the
/// [`Render`](crate::Render) implementations that sit between typed content
/// and this buffer.
///
/// A buffer is owned by a single render invocation. When a render fails the
/// buffer keeps whatever was written before the failure; call
/// [`clear`](Self::clear) before reusing it.
///
/// # Example
///
/// ```rust
/// use markweave::OutputBuffer;
///
/// let mut out = OutputBuffer::new();
/// out.append("<b>").append(42);
/// assert_eq!(out.as_str(), "<b>42");
///
/// out.clear();
/// assert!(out.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    content: String,
}

impl OutputBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            content: String::with_capacity(capacity),
        }
    }

    /// Appends the textual form of `value` without escaping.
    pub fn append<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = write!(self.content, "{}", value);
        self
    }

    /// Appends a string slice without escaping.
    pub fn push_str(&mut self, s: &str) -> &mut Self {
        self.content.push_str(s);
        self
    }

    /// Appends a single character without escaping.
    pub fn push(&mut self, c: char) -> &mut Self {
        self.content.push(c);
        self
    }

    /// Discards everything written so far.
    pub fn clear(&mut self) {
        tracing::trace!(discarded = self.content.len(), "clearing output buffer");
        self.content.clear();
    }

    /// Returns a copy of the accumulated content, leaving the buffer intact.
    pub fn snapshot(&self) -> String {
        self.content.clone()
    }

    /// Borrows the accumulated content.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Number of bytes written.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Consumes the buffer and returns its content.
    pub fn into_string(self) -> String {
        self.content
    }

    /// Writes the accumulated content to `writer` as UTF-8.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> crate::Result<()> {
        writer.write_all(self.content.as_bytes())?;
        Ok(())
    }

    /// Direct access for encoders that append in place.
    pub(crate) fn raw_mut(&mut self) -> &mut String {
        &mut self.content
    }
}

impl fmt::Write for OutputBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.push_str(s);
        Ok(())
    }
}

impl fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<OutputBuffer> for String {
    fn from(buffer: OutputBuffer) -> Self {
        buffer.content
    }
}
