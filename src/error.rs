//! Rejection reasons produced by the validator.
//!
//! Every variant is an expected, data-driven outcome. Its `Display` text is
//! the reason shown to the user when a commit is rejected.

use thiserror::Error;

use crate::vocabulary;

/// Why a commit message was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
  #[error("Invalid format.\nExpected: <scope>:<type> - <description>\nExample: core:fix - handle bug")]
  MalformedFormat,

  #[error("Invalid type '{value}'. Must be one of: {}", vocabulary::listing())]
  UnknownType { value: String },

  #[error("Description must start with a lowercase letter.")]
  BadDescriptionCase
}

/// Payload-free discriminant of [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  MalformedFormat,
  UnknownType,
  BadDescriptionCase
}

impl ValidationError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      ValidationError::MalformedFormat => ErrorKind::MalformedFormat,
      ValidationError::UnknownType { .. } => ErrorKind::UnknownType,
      ValidationError::BadDescriptionCase => ErrorKind::BadDescriptionCase
    }
  }
}
