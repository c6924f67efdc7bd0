//! Markdown templates for the business-update log and the PR comment.
//!
//! Both render the same What changed / Impact / Risk sections; only the
//! header and the trailing docs note differ. The two trailing spaces after
//! each bold header are markdown hard line breaks.

use crate::types::DiffReport;

/// One timestamped entry for the business-update log.
pub fn update_block(report: &DiffReport, timestamp: &str) -> String {
  format!(
    "### Business Update – {}\n\n{}",
    timestamp,
    sections(report)
  )
}

/// Comment body posted on the original PR.
pub fn pr_comment(report: &DiffReport) -> String {
  format!(
    "🤖 **Business doc suggestion based on code diff**\n\n{}\n\n**Docs will be proposed in a separate PR.**\n",
    sections(report)
  )
}

fn sections(report: &DiffReport) -> String {
  let risk = if report.breaking_change {
    "⚠️ Breaking change"
  } else {
    "No breaking change"
  };
  format!(
    "**What changed**  \n{}\n\n**Impact**  \n{}\n\n**Risk**  \n{}",
    report.summary, report.impact, risk
  )
}
