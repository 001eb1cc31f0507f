//! # Generator Module
//!
//! The sequential event loop at the heart of the crate. Each iteration
//! draws a severity and a vocabulary sample, templates a message, attaches
//! the structured fields, hands the record to the sink, and sleeps for the
//! configured interval.
//!
//! ## Determinism
//!
//! The random source and the sink are injected rather than taken from
//! process-wide singletons. A seeded [`StdRng`](rand::rngs::StdRng) plus a
//! capture sink reproduce the exact event stream of a previous run, which
//! is what the tests and the seeded demo rely on.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = Config::from_env();
//! let mut generator = EventGenerator::new(rand::rng());
//! generator.run(&config, &TracingSink);
//! ```


use std::thread;

use chrono::Utc;
use rand::Rng;

use crate::config::Config;
use crate::event::{LogEvent, Severity};
use crate::sink::EventSink;
use crate::vocab;

/// Probability that an event carries a `request_id` field.
const REQUEST_ID_PROBABILITY: f64 = 0.5;

/// Probability that an event carries a `duration_ms` field.
const DURATION_PROBABILITY: f64 = 0.3;

/// Builder and driver for the synthetic event stream.
///
/// Owns the random source and the sequence counter; the counter starts at
/// 1 and increments once per built event.
#[derive(Debug)]
pub struct EventGenerator<R: Rng> {
  rng: R,
  sequence: i64,
}

impl<R: Rng> EventGenerator<R> {
  pub fn new(rng: R) -> Self {
    Self { rng, sequence: 1 }
  }

  /// The sequence number the next event will carry.
  pub fn sequence(&self) -> i64 {
    self.sequence
  }

  /// Builds the next event and advances the sequence counter.
  ///
  /// The sampling order is fixed: severity, then one word from each
  /// vocabulary (drawn unconditionally, whether or not the template uses
  /// them), then the optional fields. Keeping the order stable keeps
  /// seeded runs reproducible.
  pub fn next_event(&mut self) -> LogEvent {
    let severity = Severity::ALL[self.rng.random_range(0..Severity::ALL.len())];
    let draw = vocab::draw(&mut self.rng);
    let message = draw.compose(severity);

    let request_id = if self.rng.random_bool(REQUEST_ID_PROBABILITY) {
      Some(self.rng.random_range(0..10_000u32))
    } else {
      None
    };
    let duration_ms = if self.rng.random_bool(DURATION_PROBABILITY) {
      Some(format!("{:.2}", self.rng.random_range(0.0..1000.0)))
    } else {
      None
    };

    let event = LogEvent {
      timestamp: Utc::now().timestamp_millis() as u64,
      severity,
      message,
      sequence: self.sequence,
      request_id,
      duration_ms,
    };
    self.sequence += 1;
    event
  }

  /// Runs the generation loop until the budget is exhausted.
  ///
  /// With an unbounded budget this never returns; termination is the
  /// host's concern. The sleep is unconditional and follows every emitted
  /// event, including the last one of a bounded run.
  pub fn run(&mut self, config: &Config, sink: &dyn EventSink) {
    while config.budget.allows(self.sequence) {
      let event = self.next_event();
      sink.emit(&event);
      thread::sleep(config.interval);
    }
  }
}
