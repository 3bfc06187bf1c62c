//! In-memory capture of Composer console output.

/// Write sink for text produced during one command invocation.
///
/// Implementors receive each chunk exactly as the runner captured it; no
/// filtering, formatting, or size limit is applied at this layer.
pub trait OutputSink {
    /// Append one chunk of output.
    fn write(&mut self, message: &str);
}

/// Ordered in-memory accumulator implementing [`OutputSink`].
///
/// A buffer belongs to exactly one command invocation. Draining returns
/// everything captured so far and resets the buffer to empty, so no chunk
/// is ever replayed across invocations.
#[derive(Debug, Default)]
pub struct CaptureBuffer {
    chunks: Vec<String>,
}

impl CaptureBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the captured chunks and clear the buffer.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.chunks)
    }

    /// Number of chunks captured since the last drain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl OutputSink for CaptureBuffer {
    fn write(&mut self, message: &str) {
        self.chunks.push(message.to_string());
    }
}
