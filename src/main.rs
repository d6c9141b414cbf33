// Hook: commit-msg

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::{debug, LevelFilter};
use lint::config::Settings;
use lint::hook::{self, Args, Outcome};
use lint::style;

fn init_logging(verbose: bool) {
  let mut builder = env_logger::builder();

  if verbose {
    builder
      .filter_level(LevelFilter::Debug)
      .format_target(false);
  }

  builder.init();
  debug!("Verbose logging enabled");
}

fn main() -> Result<ExitCode> {
  let args = Args::parse();
  let settings = Settings::new()?.with_verbose(args.verbose).with_no_color(args.no_color);

  init_logging(settings.verbose);
  style::set_color(settings.color);

  let outcome = hook::run(&args)?;

  match &outcome {
    Outcome::Accepted => println!("{}", style::success("Commit message format valid!")),
    Outcome::Rejected(reason) => eprintln!("{}", style::failure(&format!("Commit message rejected: {reason}"))),
    Outcome::MissingInput => eprintln!("{}", style::failure("No commit message file provided"))
  }

  Ok(ExitCode::from(outcome.exit_code()))
}
