//! Report and proposal types (JSON contract with the docs dashboard).

use serde::{Deserialize, Serialize};

/// Result of one analysis run. Built fresh per invocation, never merged
/// with prior reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
  pub summary: String,
  pub impact: String,
  pub breaking_change: bool,
  pub affected_endpoints: Vec<String>,
}

/// One entry in the proposal store: a report plus the PR it came from.
/// Field names are the store's on-disk contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalRecord {
  pub summary: String,
  pub impact: String,
  pub breaking_change: bool,
  pub affected_endpoints: Vec<String>,
  pub pr_html_url: String,
  /// Empty at insert time; filled by the docs workflow once it opens the
  /// follow-up PR.
  pub docs_pr_html_url: String,
  pub pr_number: String,
}

impl ProposalRecord {
  pub fn from_report(report: &DiffReport, pr_url: &str, pr_number: &str) -> Self {
    Self {
      summary: report.summary.clone(),
      impact: report.impact.clone(),
      breaking_change: report.breaking_change,
      affected_endpoints: report.affected_endpoints.clone(),
      pr_html_url: pr_url.to_string(),
      docs_pr_html_url: String::new(),
      pr_number: pr_number.to_string(),
    }
  }
}
