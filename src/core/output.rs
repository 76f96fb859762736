//! Mutex-guarded output sink for captured task output.

use std::sync::Arc;

use parking_lot::Mutex;

/// Thread-safe append-only sink holding everything a task has written.
///
/// Handles are cheap to clone and share one underlying buffer: the engine
/// keeps one on the task record while the work function writes through its
/// own clone. A snapshot read observes a prefix-consistent view of all
/// writes that completed before the read began; concurrent writers never
/// interleave partial writes.
#[derive(Clone, Debug, Default)]
pub struct TaskOutput {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl TaskOutput {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw bytes, returning the number of bytes written.
    ///
    /// Blocks briefly under the buffer lock; safe from any number of
    /// concurrent callers.
    pub fn write(&self, bytes: &[u8]) -> usize {
        let mut buf = self.buf.lock();
        buf.extend_from_slice(bytes);
        bytes.len()
    }

    /// Append a string, returning the number of bytes written.
    pub fn write_str(&self, s: &str) -> usize {
        self.write(s.as_bytes())
    }

    /// Append a progress line. A trailing newline is added if the message
    /// does not already end with one.
    pub fn print(&self, message: &str) {
        let mut buf = self.buf.lock();
        buf.extend_from_slice(message.as_bytes());
        if !message.ends_with('\n') {
            buf.push(b'\n');
        }
    }

    /// Everything written so far, as text.
    ///
    /// Safe to call concurrently with ongoing writes. Invalid UTF-8 is
    /// replaced rather than failing the read.
    #[must_use]
    pub fn snapshot(&self) -> String {
        let buf = self.buf.lock();
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.lock().len()
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}
