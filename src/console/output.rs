//! Output capture for a single run
//!
//! The evaluator pushes text through an [`OutputSink`] instead of returning
//! it. [`OutputBuffer`] is the sink used by the console: it keeps every chunk
//! of the current run, in call order, and renders them as one string.

/// Receiver for output chunks produced during evaluation
pub trait OutputSink {
    /// Accept one chunk. Chunks must be kept in the order they arrive.
    fn append(&mut self, chunk: &str);
}

/// Separator placed between chunks when rendering
pub const CHUNK_SEPARATOR: &str = "\n";

/// Ordered chunks of output for the current run only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    chunks: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every chunk. This is the only way the buffer shrinks.
    pub fn reset(&mut self) {
        self.chunks.clear();
    }

    /// Add one chunk after all previous ones
    pub fn push(&mut self, chunk: &str) {
        self.chunks.push(chunk.to_string());
    }

    /// All chunks joined by [`CHUNK_SEPARATOR`], in append order
    pub fn render(&self) -> String {
        self.chunks.join(CHUNK_SEPARATOR)
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl OutputSink for OutputBuffer {
    fn append(&mut self, chunk: &str) {
        self.push(chunk);
    }
}
