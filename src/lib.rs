//! diff-brief: rule-based business-impact briefs from code diffs; no AI,
//! no DB, no network. Used by the binary for CI runs; can also be called as
//! a library.

mod diff;
mod error;
mod render;
mod rules;
mod sink;
mod store;
mod types;

pub use diff::line_diff;
pub use error::BriefError;
pub use render::{pr_comment, update_block};
pub use sink::{append_update, write_comment};
pub use store::{append as append_proposal, load_or_default as load_proposals};
pub use types::{DiffReport, ProposalRecord};

/// Run every rule over the diff text and assemble one report (no I/O).
///
/// Total over all string inputs: an empty or unrecognized diff resolves to
/// the fallback summary, never an error.
pub fn analyze(diff: &str) -> DiffReport {
  let mut points = Vec::new();
  let mut impacts = Vec::new();
  for rule in rules::RULES {
    if let Some(hit) = (rule.apply)(diff) {
      points.extend(hit.points);
      impacts.extend(hit.impacts);
    }
  }
  if points.is_empty() {
    points.push(rules::FALLBACK_POINT.to_string());
    impacts.push(rules::FALLBACK_IMPACT.to_string());
  }

  DiffReport {
    summary: points.join(" "),
    impact: impacts.join(" "),
    // No current rule flags a breaking change; renderers still branch on it.
    breaking_change: false,
    affected_endpoints: Vec::new(),
  }
}
