// Hook: commit-msg
mod traits;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

pub use crate::hook::traits::FilePath;
use crate::error::ValidationError;
use crate::validate::validate;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
  /// File holding the pending commit message (passed by git)
  #[clap(required = false)]
  pub commit_msg_file: Option<PathBuf>,

  /// Extra hook arguments, ignored
  #[clap(required = false, hide = true)]
  pub rest: Vec<String>,

  #[clap(short, long, help = "Enables verbose logging", default_value = "false")]
  pub verbose: bool,

  #[clap(long, help = "Disables coloured output", default_value = "false")]
  pub no_color: bool
}

/// What the hook decided for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Accepted,
  Rejected(ValidationError),
  MissingInput
}

impl Outcome {
  /// Process exit status git expects from the hook.
  pub fn exit_code(&self) -> u8 {
    match self {
      Outcome::Accepted => 0,
      Outcome::Rejected(_) | Outcome::MissingInput => 1
    }
  }

  pub fn is_accepted(&self) -> bool {
    matches!(self, Outcome::Accepted)
  }
}

/// Reads the commit message named in `args` and validates it.
///
/// A missing file argument yields [`Outcome::MissingInput`] without running
/// the validator. A file that cannot be read is an error.
pub fn run(args: &Args) -> Result<Outcome> {
  let Some(path) = args.commit_msg_file.as_ref() else {
    return Ok(Outcome::MissingInput);
  };

  log::debug!("Reading commit message from {}", path.display());
  let message = path.read()?;

  Ok(match validate(message.trim()) {
    Ok(()) => Outcome::Accepted,
    Err(err) => {
      log::debug!("Commit message rejected: {:?}", err.kind());
      Outcome::Rejected(err)
    }
  })
}
