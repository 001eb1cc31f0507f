
use serde::{Deserialize, Serialize};

/// Constant structured field identifying the implementation emitting the
/// events. Sinks attach it to every record as `language`.
pub const LANGUAGE_TAG: &str = "rust";

/// Defines the severity or importance level of a generated event.
///
/// The levels are ordered from the most detailed to the most severe:
/// `Trace < Debug < Info < Warn < Error < Critical < Fatal`.
///
/// The set is deliberately wider than what most logging backends support
/// natively; [`Severity::to_tracing`] collapses the two levels beyond the
/// backend's range onto its error level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
  /// Very detailed information, mostly useful for debugging
  Trace,
  /// Debug-level information, used for development or troubleshooting
  Debug,
  /// General informational messages, typically useful in production
  Info,
  /// Warning messages that indicate potential issues
  Warn,
  /// Error messages that indicate a failure
  Error,
  /// Critical failures that demand attention
  Critical,
  /// Fatal failures after which a real workload would not continue
  Fatal,
}

impl Severity {
  /// The full severity set, in ascending order. Uniform picks during
  /// generation index into this array.
  pub const ALL: [Severity; 7] = [
    Severity::Trace,
    Severity::Debug,
    Severity::Info,
    Severity::Warn,
    Severity::Error,
    Severity::Critical,
    Severity::Fatal,
  ];

  /// Returns the uppercase tag for this severity (e.g. `"INFO"`).
  pub fn as_str(&self) -> &'static str {
    match self {
      Severity::Trace => "TRACE",
      Severity::Debug => "DEBUG",
      Severity::Info => "INFO",
      Severity::Warn => "WARN",
      Severity::Error => "ERROR",
      Severity::Critical => "CRITICAL",
      Severity::Fatal => "FATAL",
    }
  }

  /// Maps this severity onto the `tracing` level the backend understands.
  ///
  /// `Critical` and `Fatal` have no native counterpart and collapse onto
  /// [`tracing::Level::ERROR`]. The match is exhaustive, so adding a
  /// severity without deciding its backend level is a compile error.
  pub fn to_tracing(self) -> tracing::Level {
    match self {
      Severity::Trace => tracing::Level::TRACE,
      Severity::Debug => tracing::Level::DEBUG,
      Severity::Info => tracing::Level::INFO,
      Severity::Warn => tracing::Level::WARN,
      Severity::Error => tracing::Level::ERROR,
      Severity::Critical => tracing::Level::ERROR,
      Severity::Fatal => tracing::Level::ERROR,
    }
  }
}

/// A single synthetic log record.
///
/// One `LogEvent` is created per generator iteration, handed to the sink,
/// and dropped. Events are serializable so capture sinks and demos can
/// export the stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
  /// The creation time of the event, in milliseconds since the Unix epoch.
  pub timestamp: u64,

  /// The severity that was drawn for this event.
  ///
  /// This is the tag that drove message templating, which may be wider
  /// than the level the backend ultimately records the event at.
  pub severity: Severity,

  /// The templated message text.
  pub message: String,

  /// Monotonically increasing sequence number, starting at 1.
  pub sequence: i64,

  /// Optional request identifier in `[0, 10000)`, present on roughly half
  /// of all events.
  pub request_id: Option<u32>,

  /// Optional duration in milliseconds, formatted with exactly two decimal
  /// digits (`.` separator), present on roughly 30% of events.
  pub duration_ms: Option<String>,
}

impl LogEvent {
  /// Creates a new `LogEvent` with no optional fields attached.
  pub fn new(timestamp: u64, severity: Severity, message: String, sequence: i64) -> Self {
    Self {
      timestamp,
      severity,
      message,
      sequence,
      request_id: None,
      duration_ms: None,
    }
  }

  /// Serializes the event into a JSON string.
  ///
  /// # Panics
  /// Panics if serialization fails, which cannot happen for the field
  /// types this struct carries.
  pub fn serialize(&self) -> String {
    serde_json::to_string(self).expect("Failed to serialize")
  }

  /// Deserializes a JSON string into a `LogEvent`.
  ///
  /// # Panics
  /// Panics on invalid JSON or a mismatched structure.
  pub fn deserialize(json: &str) -> Self {
    serde_json::from_str::<Self>(json).expect("Failed to deserialize")
  }
}

impl Default for LogEvent {
  /// Returns a placeholder event with zero timestamp and empty message.
  fn default() -> Self {
    Self {
      timestamp: 0,
      severity: Severity::Info,
      message: String::new(),
      sequence: 0,
      request_id: None,
      duration_ms: None,
    }
  }
}
