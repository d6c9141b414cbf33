use colored::Colorize;
use console::Emoji;

pub const CHECK: Emoji<'_, '_> = Emoji("✔", "OK");
pub const CROSS: Emoji<'_, '_> = Emoji("✘", "X");

/// Turns ANSI colours off when `enabled` is false. Otherwise colours follow
/// terminal detection (and `NO_COLOR` / `CLICOLOR_FORCE`).
pub fn set_color(enabled: bool) {
  if !enabled {
    colored::control::set_override(false);
  }
}

pub fn success(text: &str) -> String {
  format!("{CHECK} {text}").green().to_string()
}

pub fn failure(text: &str) -> String {
  format!("{CROSS} {text}").red().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_plain_output_without_color() {
    set_color(false);
    assert!(success("done").ends_with("done"));
    assert!(failure("nope").ends_with("nope"));
    assert!(!failure("nope").contains('\u{1b}'));
  }
}
