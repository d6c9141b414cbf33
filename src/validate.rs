use crate::error::ValidationError;
use crate::message::{self, ParsedMessage};
use crate::vocabulary;

/// `Ok(())` when the message is accepted, otherwise the first failed check.
pub type ValidationResult = Result<(), ValidationError>;

/// Checks a commit message against `<scope>:<type> - <description>`.
///
/// Surrounding whitespace is ignored. Merge commits are accepted without
/// further checks. Otherwise the checks run in order (shape, type,
/// description case) and stop at the first failure.
///
/// # Examples
///
/// ```
/// use lint::validate::validate;
/// use lint::error::ValidationError;
///
/// assert!(validate("core:fix - handle bug").is_ok());
/// assert_eq!(validate("core:fix - Handle bug"), Err(ValidationError::BadDescriptionCase));
/// ```
pub fn validate(message: &str) -> ValidationResult {
  let message = message.trim();

  if message::is_merge_commit(message) {
    log::debug!("Merge commit, skipping validation");
    return Ok(());
  }

  let parsed = ParsedMessage::parse(message).ok_or(ValidationError::MalformedFormat)?;
  log::debug!("Parsed commit message: scope={:?} type={:?}", parsed.scope, parsed.kind);

  if !vocabulary::is_allowed(parsed.kind) {
    return Err(ValidationError::UnknownType { value: parsed.kind.to_string() });
  }

  if !parsed.has_lowercase_description() {
    return Err(ValidationError::BadDescriptionCase);
  }

  Ok(())
}
