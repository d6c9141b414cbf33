pub mod config;
pub mod error;
pub mod hook;
pub mod message;
pub mod style;
pub mod validate;
pub mod vocabulary;

// Re-exports
pub use error::{ErrorKind, ValidationError};
pub use validate::{validate, ValidationResult};
