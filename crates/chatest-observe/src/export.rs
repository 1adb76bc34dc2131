//! Line-oriented OpenTelemetry span exporter.
//!
//! Writes one line per finished span to any `io::Write`, stderr by default.
//! Stdout is reserved for command output (encoded messages, `--json`
//! records), so spans never go there.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use opentelemetry_sdk::error::{OTelSdkError, OTelSdkResult};
use opentelemetry_sdk::trace::{SpanData, SpanExporter};

/// Span exporter writing a compact text line per span.
pub struct WriterSpanExporter<W> {
    writer: Mutex<W>,
    is_shutdown: AtomicBool,
}

impl WriterSpanExporter<std::io::Stderr> {
    /// Exporter writing to the process's stderr.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> WriterSpanExporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl<W> fmt::Debug for WriterSpanExporter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WriterSpanExporter")
    }
}

/// Render a span as `span name=.. trace_id=.. span_id=.. parent_span_id=..
/// duration_us=.. status=..` followed by its attributes as `key=value`.
pub fn format_span(span: &SpanData) -> String {
    let duration = span
        .end_time
        .duration_since(span.start_time)
        .unwrap_or_default();
    let mut line = format!(
        "span name={} trace_id={} span_id={} parent_span_id={} duration_us={} status={:?}",
        span.name,
        span.span_context.trace_id(),
        span.span_context.span_id(),
        span.parent_span_id,
        duration.as_micros(),
        span.status,
    );
    for kv in &span.attributes {
        line.push_str(&format!(" {}={}", kv.key, kv.value));
    }
    line
}

impl<W: Write + Send + 'static> SpanExporter for WriterSpanExporter<W> {
    async fn export(&self, batch: Vec<SpanData>) -> OTelSdkResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(OTelSdkError::AlreadyShutdown);
        }

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| OTelSdkError::InternalFailure("span writer poisoned".to_string()))?;
        for span in &batch {
            writeln!(writer, "{}", format_span(span))
                .map_err(|e| OTelSdkError::InternalFailure(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| OTelSdkError::InternalFailure(e.to_string()))
    }

    fn shutdown_with_timeout(&mut self, _timeout: Duration) -> OTelSdkResult {
        self.is_shutdown.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;
    use opentelemetry::trace::{Span, Tracer, TracerProvider as _};
    use opentelemetry_sdk::trace::SdkTracerProvider;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_finished_spans_are_written_as_lines() {
        let buf = SharedBuf::default();
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(WriterSpanExporter::new(buf.clone()))
            .build();
        let tracer = provider.tracer("test");

        let mut span = tracer.start("read_encoded");
        span.set_attribute(KeyValue::new("message_id", "m1"));
        span.end();
        provider.force_flush().unwrap();

        let out = buf.contents();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("span name=read_encoded trace_id="));
        assert!(out.contains(" message_id=m1"));
        assert!(out.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_export_after_shutdown_is_rejected() {
        let buf = SharedBuf::default();
        let mut exporter = WriterSpanExporter::new(buf.clone());
        exporter.shutdown().unwrap();

        let result = exporter.export(Vec::new()).await;
        assert!(matches!(result, Err(OTelSdkError::AlreadyShutdown)));
        assert!(buf.contents().is_empty());
    }
}
