use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

pub trait FilePath {
  fn read(&self) -> Result<String>;
}

impl FilePath for Path {
  fn read(&self) -> Result<String> {
    let mut file = File::open(self).with_context(|| format!("Failed to open commit message file {}", self.display()))?;
    let mut contents = String::new();
    file
      .read_to_string(&mut contents)
      .with_context(|| format!("Failed to read commit message file {}", self.display()))?;
    Ok(contents)
  }
}
