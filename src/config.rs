use serde::{Deserialize, Serialize};
use config::{Config, Environment};
use anyhow::{Context, Result};

// Constants
const ENV_PREFIX: &str = "COMMIT_LINT";
const DEFAULT_VERBOSE: bool = false;
const DEFAULT_COLOR: bool = true;

/// Runtime settings for the hook, read from `COMMIT_LINT_*` variables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Serialize)]
pub struct Settings {
  pub verbose: bool,
  pub color:   bool
}

impl Default for Settings {
  fn default() -> Self {
    Self { verbose: DEFAULT_VERBOSE, color: DEFAULT_COLOR }
  }
}

impl Settings {
  /// Loads `.env` (when present) and the process environment.
  pub fn new() -> Result<Self> {
    dotenv::dotenv().ok();
    Self::from_env(Environment::with_prefix(ENV_PREFIX))
  }

  /// Builds settings from an explicit environment source.
  pub fn from_env(source: Environment) -> Result<Self> {
    let config = Config::builder()
      .add_source(source.try_parsing(true))
      .set_default("verbose", DEFAULT_VERBOSE)?
      .set_default("color", DEFAULT_COLOR)?
      .build()
      .context("Failed to read COMMIT_LINT_* settings")?;

    config
      .try_deserialize()
      .context("Failed to deserialize settings. Check the COMMIT_LINT_* environment variables")
  }

  pub fn with_verbose(mut self, verbose: bool) -> Self {
    self.verbose |= verbose;
    self
  }

  pub fn with_no_color(mut self, no_color: bool) -> Self {
    self.color &= !no_color;
    self
  }
}
