//! Byte sources feeding the lexer.
//!
//! The lexer never looks more than one byte ahead. All it needs from its
//! input is "give me the next byte", "take back the byte you just gave me"
//! and "release your resources". [`ByteSource`] captures exactly that, and
//! [`SourceBuffer`] implements it over an owned, fully loaded buffer.

use std::io;
use std::path::Path;

/// A pull-based supply of bytes with one byte of pushback.
pub trait ByteSource {
    /// Reads the next byte.
    ///
    /// Returns `None` at end of stream. Once `None` has been returned every
    /// later call returns `None` as well.
    fn read_byte(&mut self) -> Option<u8>;

    /// Rewinds the byte returned by the last successful [`read_byte`].
    ///
    /// Only valid immediately after a read that returned `Some`. Calls made
    /// at any other time are ignored.
    ///
    /// [`read_byte`]: ByteSource::read_byte
    fn push_back(&mut self);

    /// Releases the underlying resources. Calling it again is a no-op.
    fn close(&mut self);
}

/// An in-memory byte source.
///
/// # Example
///
/// ```
/// use schemac_lex::source::{ByteSource, SourceBuffer};
///
/// let mut source = SourceBuffer::from("ab");
/// assert_eq!(source.read_byte(), Some(b'a'));
/// source.push_back();
/// assert_eq!(source.read_byte(), Some(b'a'));
/// assert_eq!(source.read_byte(), Some(b'b'));
/// assert_eq!(source.read_byte(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SourceBuffer {
    /// The bytes being traversed.
    bytes: Vec<u8>,

    /// Index of the next byte to read.
    position: usize,

    /// Whether the previous operation was a successful read.
    can_push_back: bool,

    /// Set once [`ByteSource::close`] has run.
    closed: bool,
}

impl SourceBuffer {
    /// Creates a source over the given bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            position: 0,
            can_push_back: false,
            closed: false,
        }
    }

    /// Loads a whole file into a new source.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        std::fs::read(path).map(Self::new)
    }

    /// Returns the full buffer. Empty after [`ByteSource::close`].
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the index of the next byte to read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true once every byte has been read.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.bytes.len()
    }

    /// Returns true once the source has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl ByteSource for SourceBuffer {
    #[inline]
    fn read_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.position).copied();
        self.can_push_back = byte.is_some();
        if byte.is_some() {
            self.position += 1;
        }
        byte
    }

    #[inline]
    fn push_back(&mut self) {
        if self.can_push_back {
            self.position -= 1;
            self.can_push_back = false;
        }
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.can_push_back = false;
        self.position = 0;
        self.bytes = Vec::new();
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl From<&[u8]> for SourceBuffer {
    fn from(source: &[u8]) -> Self {
        Self::new(source)
    }
}

impl From<Vec<u8>> for SourceBuffer {
    fn from(source: Vec<u8>) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_in_order() {
        let mut source = SourceBuffer::from("u8");
        assert_eq!(source.read_byte(), Some(b'u'));
        assert_eq!(source.read_byte(), Some(b'8'));
        assert!(source.is_at_end());
        assert_eq!(source.read_byte(), None);
        assert_eq!(source.read_byte(), None);
    }

    #[test]
    fn test_push_back_rewinds_one_byte() {
        let mut source = SourceBuffer::from("<>");
        assert_eq!(source.read_byte(), Some(b'<'));
        source.push_back();
        assert_eq!(source.position(), 0);
        assert_eq!(source.read_byte(), Some(b'<'));
        assert_eq!(source.read_byte(), Some(b'>'));
    }

    #[test]
    fn test_push_back_is_single_step() {
        let mut source = SourceBuffer::from("ab");
        source.read_byte();
        source.read_byte();
        source.push_back();
        source.push_back();
        assert_eq!(source.position(), 1);
        assert_eq!(source.read_byte(), Some(b'b'));
    }

    #[test]
    fn test_push_back_after_end_is_ignored() {
        let mut source = SourceBuffer::from("a");
        source.read_byte();
        assert_eq!(source.read_byte(), None);
        source.push_back();
        assert_eq!(source.read_byte(), None);
    }

    #[test]
    fn test_push_back_before_any_read_is_ignored() {
        let mut source = SourceBuffer::from("a");
        source.push_back();
        assert_eq!(source.position(), 0);
        assert_eq!(source.read_byte(), Some(b'a'));
    }

    #[test]
    fn test_close_releases_and_is_idempotent() {
        let mut source = SourceBuffer::from("vec");
        source.read_byte();
        source.close();
        assert!(source.is_closed());
        assert!(source.as_bytes().is_empty());
        assert_eq!(source.read_byte(), None);
        source.close();
        assert!(source.is_closed());
    }

    #[test]
    fn test_open_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<x:u8>\n").unwrap();

        let mut source = SourceBuffer::open(file.path()).unwrap();
        assert_eq!(source.as_bytes(), b"<x:u8>\n");
        assert_eq!(source.read_byte(), Some(b'<'));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SourceBuffer::open(dir.path().join("missing.syntax")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
