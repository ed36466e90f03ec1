use std::io::{self, ErrorKind, Read};

/// Byte stream the lexer reads from.
///
/// Bytes are pulled one at a time from the underlying reader. The cursor can
/// hold a single pushed back byte, which is handed out again by the next read.
pub struct Cursor<R> {
    inner: R,
    pushed_back: Option<u8>,
}

impl<R: Read> Cursor<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushed_back: None,
        }
    }

    /// Read the next byte, `None` at end of input
    pub fn next(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushed_back.take() {
            return Ok(Some(byte));
        }

        let mut buf = [0; 1];

        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Push a byte back onto the stream. Fails if a byte is already waiting.
    pub fn unread(&mut self, byte: u8) -> bool {
        if self.pushed_back.is_some() {
            return false;
        }

        self.pushed_back = Some(byte);
        true
    }
}

impl<'a> From<&'a str> for Cursor<&'a [u8]> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}
