use std::collections::HashSet;

use lazy_static::lazy_static;

/// Allowed commit types, in the order they are listed to users.
pub const ALLOWED_TYPES: [&str; 10] = ["feature", "fix", "refactor", "docs", "perf", "test", "build", "style", "chore", "release"];

lazy_static! {
  static ref TYPE_SET: HashSet<&'static str> = ALLOWED_TYPES.iter().copied().collect();
}

/// Exact, case-sensitive membership test.
pub fn is_allowed(kind: &str) -> bool {
  TYPE_SET.contains(kind)
}

/// The allowed types joined for display, e.g. `feature, fix, refactor, ...`.
pub fn listing() -> String {
  ALLOWED_TYPES.join(", ")
}
