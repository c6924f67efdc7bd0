//! Proposal store: a pretty-printed JSON array consumed by the docs
//! dashboard. Read is best-effort: a missing, unreadable, or corrupt file
//! resolves to the empty store and its prior content is discarded on the
//! next write. Writes rewrite the whole array.

use std::fs;
use std::path::Path;

use crate::error::BriefError;
use crate::types::ProposalRecord;

/// Load the store, treating every read or parse failure as an empty store.
pub fn load_or_default(path: &Path) -> Vec<ProposalRecord> {
  let raw = match fs::read_to_string(path) {
    Ok(s) => s,
    Err(_) => return Vec::new(),
  };
  serde_json::from_str(&raw).unwrap_or_default()
}

/// Append one record and rewrite the store file.
pub fn append(path: &Path, record: ProposalRecord) -> Result<(), BriefError> {
  let mut records = load_or_default(path);
  records.push(record);
  save(path, &records)
}

/// Rewrite the store file with the full record sequence, pretty-printed.
/// serde_json leaves non-ASCII characters unescaped, so € and friends
/// round-trip verbatim.
pub fn save(path: &Path, records: &[ProposalRecord]) -> Result<(), BriefError> {
  let json = serde_json::to_string_pretty(records)?;
  fs::write(path, json).map_err(|e| BriefError::io(path, e))
}
