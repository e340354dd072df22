//! Byte-level integer token I/O.
//!
//! [`TokenScanner`] pulls whitespace-separated decimal integers straight out
//! of a [`BufRead`] byte window — no UTF-8 validation, no line buffering.
//! [`IntWriter`] batches formatted integers behind a [`BufWriter`]; nothing
//! is guaranteed delivered until [`flush`](IntWriter::flush).

use std::io::{BufRead, BufWriter, Write};

use aurelia_core::{AureliaError, Result};

/// A byte-level reader of non-negative decimal integer tokens.
pub struct TokenScanner<R> {
    reader: R,
}

impl<R: BufRead> TokenScanner<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the next whitespace-separated token as a `u64`.
    ///
    /// Leading ASCII whitespace (spaces, tabs, newlines) is skipped; the
    /// token ends at the next whitespace byte or at end of input.
    ///
    /// # Errors
    ///
    /// [`AureliaError::Parse`] if the stream ends before a token starts, if
    /// the token contains a non-digit byte, or if the value overflows `u64`.
    pub fn next_u64(&mut self) -> Result<u64> {
        let mut byte = loop {
            match self.next_byte()? {
                Some(b) if b.is_ascii_whitespace() => continue,
                Some(b) => break b,
                None => return Err(AureliaError::Parse("unexpected end of input".into())),
            }
        };

        let mut value: u64 = 0;
        loop {
            if !byte.is_ascii_digit() {
                return Err(AureliaError::Parse(format!(
                    "unexpected byte 0x{byte:02x} in integer token"
                )));
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(byte - b'0')))
                .ok_or_else(|| AureliaError::Parse("integer token overflows u64".into()))?;

            match self.next_byte()? {
                Some(b) if b.is_ascii_whitespace() => break,
                Some(b) => byte = b,
                None => break,
            }
        }
        Ok(value)
    }

    /// Read the next token as a `usize`.
    ///
    /// # Errors
    ///
    /// As [`next_u64`](Self::next_u64), plus a [`AureliaError::Parse`] if the
    /// value does not fit a `usize` on this platform.
    pub fn next_usize(&mut self) -> Result<usize> {
        let value = self.next_u64()?;
        usize::try_from(value)
            .map_err(|_| AureliaError::Parse(format!("token {value} does not fit a usize")))
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        let byte = buf[0];
        self.reader.consume(1);
        Ok(Some(byte))
    }
}

/// A buffered writer of decimal integers and newlines.
pub struct IntWriter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> IntWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: BufWriter::new(out),
        }
    }

    /// Append `value` in decimal, with no separator.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        write!(self.out, "{value}")?;
        Ok(())
    }

    /// Append a single `\n`.
    pub fn newline(&mut self) -> Result<()> {
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Push everything buffered so far to the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
