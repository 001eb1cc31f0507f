#[cfg(test)]
mod __test__ {

  use std::io;
  use std::sync::{Arc, Mutex};

  use tracing_subscriber::filter::LevelFilter;

  use crate::event::{LogEvent, Severity};
  use crate::sink::{EventSink, MemorySink, TracingSink};

  /// Writer handle that appends into a shared buffer, so a test can read
  /// back what the fmt subscriber produced.
  #[derive(Clone)]
  struct SharedWriter(Arc<Mutex<Vec<u8>>>);

  impl io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  fn capture_output(events: &[LogEvent]) -> String {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let writer = Arc::clone(&buffer);
    let subscriber = tracing_subscriber::fmt()
      .with_target(false)
      .with_ansi(false)
      .with_max_level(LevelFilter::TRACE)
      .with_writer(move || SharedWriter(Arc::clone(&writer)))
      .finish();

    tracing::subscriber::with_default(subscriber, || {
      for event in events {
        TracingSink.emit(event);
      }
    });

    let bytes = buffer.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
  }

  #[test]
  fn test_memory_sink_captures_in_order() {
    let sink = MemorySink::new();
    assert!(sink.is_empty());

    for sequence in 1..=3 {
      let event = LogEvent::new(1000, Severity::Info, format!("event {}", sequence), sequence);
      sink.emit(&event);
    }

    let events = sink.events();
    assert_eq!(sink.len(), 3);
    assert_eq!(events[0].sequence, 1);
    assert_eq!(events[1].sequence, 2);
    assert_eq!(events[2].sequence, 3);
    assert_eq!(events[2].message, "event 3");
  }

  #[test]
  fn test_tracing_sink_attaches_constant_fields() {
    let event = LogEvent::new(
      1000,
      Severity::Info,
      "info validating input user=guest".to_string(),
      7,
    );
    let output = capture_output(&[event]);

    assert!(output.contains("INFO"));
    assert!(output.contains("info validating input user=guest"));
    assert!(output.contains("language=\"rust\""));
    assert!(output.contains("sequence=7"));
  }

  #[test]
  fn test_tracing_sink_omits_absent_optional_fields() {
    let event = LogEvent::new(1000, Severity::Debug, "debug updating cache".to_string(), 2);
    let output = capture_output(&[event]);

    assert!(!output.contains("request_id"));
    assert!(!output.contains("duration_ms"));
  }

  #[test]
  fn test_tracing_sink_attaches_present_optional_fields() {
    let mut event = LogEvent::new(
      1000,
      Severity::Warn,
      "warn possible issue action=generating report".to_string(),
      3,
    );
    event.request_id = Some(1234);
    event.duration_ms = Some("56.78".to_string());
    let output = capture_output(&[event]);

    assert!(output.contains("WARN"));
    assert!(output.contains("request_id=1234"));
    assert!(output.contains("duration_ms=\"56.78\""));
  }

  #[test]
  fn test_tracing_sink_collapses_critical_and_fatal_to_error() {
    let critical = LogEvent::new(
      1000,
      Severity::Critical,
      "error permission denied user=admin".to_string(),
      4,
    );
    let fatal = LogEvent::new(
      1000,
      Severity::Fatal,
      "error internal server error user=guest".to_string(),
      5,
    );
    let output = capture_output(&[critical, fatal]);

    assert_eq!(output.matches("ERROR").count(), 2);
    assert!(!output.contains("CRITICAL"));
    assert!(!output.contains("FATAL"));
  }

  #[test]
  fn test_tracing_sink_emits_every_severity() {
    let events: Vec<LogEvent> = Severity::ALL
      .iter()
      .enumerate()
      .map(|(i, severity)| {
        LogEvent::new(1000, *severity, format!("message {}", i), i as i64 + 1)
      })
      .collect();
    let output = capture_output(&events);

    for i in 0..Severity::ALL.len() {
      assert!(output.contains(&format!("message {}", i)));
    }
    assert!(output.contains("TRACE"));
    assert!(output.contains("DEBUG"));
  }
}
