mod __test__;

use std::sync::Mutex;

use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::filter::LevelFilter;

use crate::event::{LogEvent, Severity, LANGUAGE_TAG};

/// Core trait for log event sinks.
///
/// Emission must not fail the generation path, so there is no error
/// return. Formatting and transport are entirely the sink's concern; the
/// generator only supplies the event record.
pub trait EventSink: Send + Sync {
  /// Handle a single event.
  fn emit(&self, event: &LogEvent);
}

/// Sink that forwards events to the `tracing` macros.
///
/// Every record carries the constant `language` field and the sequence
/// number; `request_id` and `duration_ms` are attached only when present.
/// The severity that drove message templating selects the macro through
/// the fixed mapping, so `Critical` and `Fatal` records surface at the
/// error level.
pub struct TracingSink;

impl EventSink for TracingSink {
  fn emit(&self, event: &LogEvent) {
    let sequence = event.sequence;
    let request_id = event.request_id.map(u64::from);
    let duration_ms = event.duration_ms.as_deref();

    match event.severity {
      Severity::Trace => trace!(
        language = LANGUAGE_TAG,
        sequence,
        request_id,
        duration_ms,
        "{}",
        event.message
      ),
      Severity::Debug => debug!(
        language = LANGUAGE_TAG,
        sequence,
        request_id,
        duration_ms,
        "{}",
        event.message
      ),
      Severity::Info => info!(
        language = LANGUAGE_TAG,
        sequence,
        request_id,
        duration_ms,
        "{}",
        event.message
      ),
      Severity::Warn => warn!(
        language = LANGUAGE_TAG,
        sequence,
        request_id,
        duration_ms,
        "{}",
        event.message
      ),
      Severity::Error | Severity::Critical | Severity::Fatal => error!(
        language = LANGUAGE_TAG,
        sequence,
        request_id,
        duration_ms,
        "{}",
        event.message
      ),
    }
  }
}

/// Sink that captures events in memory, in emission order.
///
/// Used by tests and the seeded demo to observe the generated stream.
#[derive(Debug, Default)]
pub struct MemorySink {
  events: Mutex<Vec<LogEvent>>,
}

impl MemorySink {
  pub fn new() -> Self {
    Self {
      events: Mutex::new(Vec::new()),
    }
  }

  /// Returns a snapshot of everything captured so far.
  pub fn events(&self) -> Vec<LogEvent> {
    match self.events.lock() {
      Ok(events) => events.clone(),
      Err(_) => Vec::new(),
    }
  }

  pub fn len(&self) -> usize {
    match self.events.lock() {
      Ok(events) => events.len(),
      Err(_) => 0,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl EventSink for MemorySink {
  fn emit(&self, event: &LogEvent) {
    if let Ok(mut events) = self.events.lock() {
      events.push(event.clone());
    }
  }
}

/// Installs the stdout `tracing-subscriber` backend.
///
/// Targets are suppressed and the maximum level is opened up to `TRACE` so
/// all seven severities reach the output. Fails only if a global
/// subscriber is already installed.
pub fn init_stdout() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_target(false)
    .with_max_level(LevelFilter::TRACE)
    .try_init()
    .map_err(|e| -> Box<dyn std::error::Error> { e })?;
  Ok(())
}
