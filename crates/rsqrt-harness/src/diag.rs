//! Diagnostic output sinks.
//!
//! The original kernel printed through an ecall taking a byte buffer and a
//! length: best-effort, never consulted for correctness. The same contract
//! here: a sink accepts bytes and may drop them.

/// Best-effort byte-buffer message channel.
pub trait DiagnosticSink {
    /// Write one message. May be silently dropped.
    fn write(&mut self, bytes: &[u8]);
}

/// Discards everything.
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn write(&mut self, _bytes: &[u8]) {}
}

/// Routes messages to `log::debug!`, lossily decoding UTF-8.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn write(&mut self, bytes: &[u8]) {
        log::debug!("{}", String::from_utf8_lossy(bytes));
    }
}

/// Captures messages for inspection in tests.
#[derive(Default)]
pub struct BufferSink {
    messages: Vec<Vec<u8>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Vec<u8>] {
        &self.messages
    }
}

impl DiagnosticSink for BufferSink {
    fn write(&mut self, bytes: &[u8]) {
        self.messages.push(bytes.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_captures_in_order() {
        let mut sink = BufferSink::new();
        sink.write(b"first");
        sink.write(b"second");
        assert_eq!(sink.messages(), &[b"first".to_vec(), b"second".to_vec()]);
    }

    #[test]
    fn test_null_sink_accepts_anything() {
        let mut sink = NullSink;
        sink.write(b"");
        sink.write(&[0xFF, 0xFE]);
    }
}
