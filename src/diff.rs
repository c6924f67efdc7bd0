//! Diff-style text from two versions of a file.
//!
//! Line-level multiset comparison: lines only in the old version come out as
//! `- ` lines (old order), lines only in the new version as `+ ` lines (new
//! order). Unchanged lines are omitted. Enough structure for the rule
//! engine; not a full unified diff.

use std::collections::HashMap;

/// Build diff text from an (old, new) pair of file contents.
pub fn line_diff(old: &str, new: &str) -> String {
  let mut in_new: HashMap<&str, u32> = HashMap::new();
  for line in new.lines() {
    *in_new.entry(line).or_insert(0) += 1;
  }
  let mut in_old: HashMap<&str, u32> = HashMap::new();
  for line in old.lines() {
    *in_old.entry(line).or_insert(0) += 1;
  }

  let mut out = String::new();
  for line in old.lines() {
    match in_new.get_mut(line) {
      Some(n) if *n > 0 => *n -= 1,
      _ => {
        out.push_str("- ");
        out.push_str(line);
        out.push('\n');
      }
    }
  }
  for line in new.lines() {
    match in_old.get_mut(line) {
      Some(n) if *n > 0 => *n -= 1,
      _ => {
        out.push_str("+ ");
        out.push_str(line);
        out.push('\n');
      }
    }
  }
  out
}
