use lazy_static::lazy_static;
use regex::Regex;

/// Prefix git uses for generated merge commit messages.
pub const MERGE_PREFIX: &str = "Merge branch";

lazy_static! {
  // scope: anything up to the first colon
  // type: a non-whitespace run closed by " - "
  // description: the rest, including further lines
  static ref SHAPE: Regex = Regex::new(r"^([^:]+):(\S+) - ((?s:.+))$").expect("commit message pattern is valid");
}

/// A message split into its three parts. Borrows from the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
  pub scope:       &'a str,
  pub kind:        &'a str,
  pub description: &'a str
}

impl<'a> ParsedMessage<'a> {
  /// Decomposes `message` into scope, type and description.
  /// Returns `None` when the text does not have the `<scope>:<type> - <description>` shape.
  pub fn parse(message: &'a str) -> Option<Self> {
    let captures = SHAPE.captures(message)?;

    Some(Self {
      scope:       captures.get(1)?.as_str(),
      kind:        captures.get(2)?.as_str(),
      description: captures.get(3)?.as_str()
    })
  }

  /// True when the description opens with a lowercase letter.
  pub fn has_lowercase_description(&self) -> bool {
    self
      .description
      .chars()
      .next()
      .is_some_and(|c| c.is_alphabetic() && c.is_lowercase())
  }
}

/// True for messages generated by `git merge`.
pub fn is_merge_commit(message: &str) -> bool {
  message.starts_with(MERGE_PREFIX)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_splits_three_parts() {
    let parsed = ParsedMessage::parse("core:fix - handle invalid tokens").unwrap();
    assert_eq!(parsed.scope, "core");
    assert_eq!(parsed.kind, "fix");
    assert_eq!(parsed.description, "handle invalid tokens");
  }

  #[test]
  fn test_scope_ends_at_first_colon() {
    let parsed = ParsedMessage::parse("api v2:fix - map a:b pairs").unwrap();
    assert_eq!(parsed.scope, "api v2");
    assert_eq!(parsed.kind, "fix");
    assert_eq!(parsed.description, "map a:b pairs");
  }

  #[test]
  fn test_description_keeps_later_delimiters() {
    let parsed = ParsedMessage::parse("ui:style - align a - b columns").unwrap();
    assert_eq!(parsed.kind, "style");
    assert_eq!(parsed.description, "align a - b columns");
  }

  #[test]
  fn test_description_spans_body_lines() {
    let parsed = ParsedMessage::parse("db:perf - batch inserts\n\nCuts startup time in half.").unwrap();
    assert_eq!(parsed.kind, "perf");
    assert_eq!(parsed.description, "batch inserts\n\nCuts startup time in half.");
  }

  #[test]
  fn test_type_cannot_contain_whitespace() {
    assert_eq!(ParsedMessage::parse("core:big fix - handle bug"), None);
  }

  #[test]
  fn test_rejects_missing_parts() {
    assert_eq!(ParsedMessage::parse(""), None);
    assert_eq!(ParsedMessage::parse("fix handle bug"), None);
    assert_eq!(ParsedMessage::parse("core:fix-handle bug"), None);
    assert_eq!(ParsedMessage::parse(":fix - handle bug"), None);
    assert_eq!(ParsedMessage::parse("core: - handle bug"), None);
    assert_eq!(ParsedMessage::parse("core:fix - "), None);
  }

  #[test]
  fn test_lowercase_description() {
    let check = |msg: &str| ParsedMessage::parse(msg).unwrap().has_lowercase_description();

    assert!(check("core:fix - handle bug"));
    assert!(check("core:fix - étendre le cache"));
    assert!(!check("core:fix - Handle bug"));
    assert!(!check("core:fix - 123"));
    assert!(!check("core:fix - _private helper"));
  }

  #[test]
  fn test_merge_prefix() {
    assert!(is_merge_commit("Merge branch 'main' into dev"));
    assert!(!is_merge_commit("merge branch 'main' into dev"));
    assert!(!is_merge_commit("Merge pull request #1"));
  }
}
