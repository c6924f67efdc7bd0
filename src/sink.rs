//! File sinks: the append-only business-update log and the overwrite-mode
//! PR comment file. No locking; single-writer CI context.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::BriefError;

/// Append one rendered block to the log, preceded by a blank line.
/// Creates the file if absent.
pub fn append_update(path: &Path, block: &str) -> Result<(), BriefError> {
  let mut file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .map_err(|e| BriefError::io(path, e))?;
  write!(file, "\n\n{}\n", block).map_err(|e| BriefError::io(path, e))
}

/// Write the comment body, replacing any prior content.
pub fn write_comment(path: &Path, body: &str) -> Result<(), BriefError> {
  fs::write(path, body).map_err(|e| BriefError::io(path, e))
}
