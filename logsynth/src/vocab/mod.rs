
use rand::Rng;

use crate::event::Severity;

pub const ACTIONS: [&str; 7] = [
  "processing request",
  "connecting to database",
  "fetching user data",
  "updating cache",
  "validating input",
  "generating report",
  "sending notification",
];

pub const USERS: [&str; 5] = ["user123", "admin", "guest", "service_account", "api_client"];

pub const ERRORS: [&str; 5] = [
  "connection timeout",
  "invalid credentials",
  "resource not found",
  "permission denied",
  "internal server error",
];

/// One iteration's worth of vocabulary.
///
/// All three words are drawn every iteration, independently of which ones
/// the severity's template actually uses. Templates consuming a subset must
/// not skip the unused draws, so the random stream stays aligned across
/// runs with the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
  pub action: &'static str,
  pub user: &'static str,
  pub error: &'static str,
}

impl Draw {
  /// Composes the message text for the given severity.
  ///
  /// The severity tag in the text is lowercase and fixed per level; all
  /// severities beyond `Warn` share the error template.
  pub fn compose(&self, severity: Severity) -> String {
    match severity {
      Severity::Trace => format!("trace {}", self.action),
      Severity::Debug => format!("debug {}", self.action),
      Severity::Info => format!("info {} user={}", self.action, self.user),
      Severity::Warn => format!("warn possible issue action={}", self.action),
      Severity::Error | Severity::Critical | Severity::Fatal => {
        format!("error {} user={}", self.error, self.user)
      },
    }
  }
}

/// Draws action, user, and error words uniformly, one of each.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Draw {
  Draw {
    action: pick(rng, &ACTIONS),
    user: pick(rng, &USERS),
    error: pick(rng, &ERRORS),
  }
}

// Uniform pick by index; the vocabulary arrays are non-empty consts.
fn pick<R: Rng + ?Sized>(rng: &mut R, set: &'static [&'static str]) -> &'static str {
  set[rng.random_range(0..set.len())]
}
