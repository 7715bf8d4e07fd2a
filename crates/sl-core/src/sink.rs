//! The `TextSink` output contract and the provided sink implementations.
//!
//! A sink merely accepts text and can be flushed.  Writability is an
//! explicit capability: writers check [`TextSink::writable`] once at
//! construction and reject read-only handles before anything is written.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

// ── Contract ──────────────────────────────────────────────────────────────────

/// A line-oriented byte sink for table output.
pub trait TextSink {
    /// Mode/permission indicator.  Checked once at writer construction;
    /// `false` makes construction fail rather than the first write.
    fn writable(&self) -> bool;

    /// Append `text` to the stream.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Make everything written so far durably visible.
    fn flush(&mut self) -> io::Result<()>;
}

// ── StdoutSink ────────────────────────────────────────────────────────────────

/// Sink writing to the process's standard output.
///
/// Constructed explicitly and passed to the writer; there is no ambient
/// process-wide default sink.
pub struct StdoutSink {
    inner: Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { inner: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSink for StdoutSink {
    fn writable(&self) -> bool {
        true
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

// ── FileSink ──────────────────────────────────────────────────────────────────

/// Buffered sink writing to a file.
///
/// Both constructors open the file for writing, so `writable` is
/// unconditionally true; a handle that cannot be opened for writing fails
/// at construction instead.
pub struct FileSink {
    inner: BufWriter<File>,
}

impl FileSink {
    /// Create (or truncate) `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self { inner: BufWriter::new(File::create(path)?) })
    }

    /// Open `path` for appending, creating it if missing.
    pub fn append(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { inner: BufWriter::new(file) })
    }
}

impl TextSink for FileSink {
    fn writable(&self) -> bool {
        true
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

// ── BufferSink ────────────────────────────────────────────────────────────────

/// In-memory sink capturing output as a `String`.
///
/// Counts flushes so callers can observe flush timing, and can be built
/// read-only to exercise the construction-time capability check.
#[derive(Debug)]
pub struct BufferSink {
    buf:      String,
    writable: bool,
    flushes:  usize,
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferSink {
    pub fn new() -> Self {
        Self { buf: String::new(), writable: true, flushes: 0 }
    }

    /// A sink whose mode indicator reports non-writable.
    pub fn read_only() -> Self {
        Self { buf: String::new(), writable: false, flushes: 0 }
    }

    /// Everything written so far.
    pub fn contents(&self) -> &str {
        &self.buf
    }

    /// Number of completed `flush` calls.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Unwrap the captured output.
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl TextSink for BufferSink {
    fn writable(&self) -> bool {
        self.writable
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        if !self.writable {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "buffer sink is read-only",
            ));
        }
        self.buf.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
