
use std::env;
use std::time::Duration;

/// Environment variable holding the inter-event interval, e.g. `500ms`,
/// `2s`, `1m`, `1h` (suffix is case-insensitive).
pub const ENV_INTERVAL: &str = "LOG_INTERVAL";

/// Environment variable holding the total number of events to emit.
pub const ENV_TOTAL: &str = "TOTAL_LOGS";

/// Interval substituted whenever `LOG_INTERVAL` is missing or unparseable.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// How many events a run is allowed to emit.
///
/// The unbounded variant corresponds to the legacy `-1` sentinel; any other
/// parsed integer passes through unvalidated, so a zero or negative count
/// simply admits no sequence number and the run emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogBudget {
  /// Run until externally terminated.
  Unbounded,
  /// Emit events while `sequence <= count`.
  Count(i64),
}

impl LogBudget {
  /// Whether an event with this sequence number may still be emitted.
  pub fn allows(&self, sequence: i64) -> bool {
    match self {
      LogBudget::Unbounded => true,
      LogBudget::Count(total) => sequence <= *total,
    }
  }
}

/// Process-lifetime configuration, derived once at startup.
///
/// Loading never fails: malformed values silently fall back to their
/// defaults and no diagnostic is emitted about the substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  /// Sleep between iterations.
  pub interval: Duration,
  /// Total event budget.
  pub budget: LogBudget,
}

impl Config {
  /// Reads [`ENV_INTERVAL`] and [`ENV_TOTAL`] from the process environment.
  pub fn from_env() -> Self {
    let interval = env::var(ENV_INTERVAL).ok();
    let total = env::var(ENV_TOTAL).ok();
    Self::from_values(interval.as_deref(), total.as_deref())
  }

  /// Builds a configuration from raw string values. This is the seam the
  /// tests drive directly, without touching the process environment.
  pub fn from_values(interval: Option<&str>, total: Option<&str>) -> Self {
    Self {
      interval: parse_interval(interval),
      budget: parse_total(total),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      interval: DEFAULT_INTERVAL,
      budget: LogBudget::Unbounded,
    }
  }
}

/// Parses a duration string into the inter-event interval.
///
/// Accepts a number followed by `ms`, `s`, `m`, or `h`; suffixes are
/// case-insensitive and whitespace around the number is ignored. A missing
/// value, missing suffix, unparseable number, or an overflowing conversion
/// yields [`DEFAULT_INTERVAL`]. The numeric part parses as `u64`, so zero
/// passes through unvalidated and negative values are unparseable.
pub fn parse_interval(value: Option<&str>) -> Duration {
  let Some(value) = value else {
    return DEFAULT_INTERVAL;
  };
  let raw = value.trim().to_lowercase();

  // "ms" must be tried before the bare "s" suffix.
  let millis = if let Some(number) = raw.strip_suffix("ms") {
    number.trim().parse::<u64>().ok()
  } else if let Some(number) = raw.strip_suffix('s') {
    number
      .trim()
      .parse::<u64>()
      .ok()
      .and_then(|n| n.checked_mul(1000))
  } else if let Some(number) = raw.strip_suffix('m') {
    number
      .trim()
      .parse::<u64>()
      .ok()
      .and_then(|n| n.checked_mul(60_000))
  } else if let Some(number) = raw.strip_suffix('h') {
    number
      .trim()
      .parse::<u64>()
      .ok()
      .and_then(|n| n.checked_mul(3_600_000))
  } else {
    None
  };

  millis.map(Duration::from_millis).unwrap_or(DEFAULT_INTERVAL)
}

/// Parses the total event count.
///
/// A missing, blank, or malformed value means unbounded, as does the
/// explicit `-1` sentinel. Every other parsed integer passes through with
/// no bound enforced.
pub fn parse_total(value: Option<&str>) -> LogBudget {
  match value.and_then(|v| v.trim().parse::<i64>().ok()) {
    None | Some(-1) => LogBudget::Unbounded,
    Some(total) => LogBudget::Count(total),
  }
}
