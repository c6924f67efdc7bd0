//! Integration tests for the brief pipeline: rules through file sinks.

use std::fs;

use diff_brief::{
  analyze, append_proposal, append_update, line_diff, load_proposals, pr_comment, update_block,
  ProposalRecord,
};

const PRICING_DIFF: &str = "\
--- a/app.py
+++ b/app.py
- FREE_SHIPPING_THRESHOLD = 50.0
+ FREE_SHIPPING_THRESHOLD = 40.0
+ def calculate_discount(price, is_member=False):
+     if is_member:
+         return price * 0.8
+     return price * 0.9
";

#[test]
fn pricing_diff_produces_the_full_brief() {
  let report = analyze(PRICING_DIFF);

  assert!(report
    .summary
    .contains("lowered from €50.00 to €40.00"));
  assert!(report.summary.contains("Introduced member-specific discount."));
  assert!(report.summary.contains("Members receive 20% discount."));
  assert!(report.summary.contains("Non-members retain 10% discount."));
  assert!(report.impact.contains("May affect conversion rate"));
  assert!(report.impact.contains("Improves loyalty value"));
  assert!(!report.breaking_change);
  assert!(report.affected_endpoints.is_empty());
}

#[test]
fn summary_points_keep_rule_order() {
  let report = analyze(PRICING_DIFF);
  let threshold = report.summary.find("Free-shipping threshold").unwrap();
  let discount = report.summary.find("Introduced member-specific").unwrap();
  let member_rate = report.summary.find("Members receive").unwrap();
  let non_member_rate = report.summary.find("Non-members retain").unwrap();
  assert!(threshold < discount);
  assert!(discount < member_rate);
  assert!(member_rate < non_member_rate);
}

#[test]
fn increased_threshold_is_reported_as_such() {
  let report = analyze("- FREE_SHIPPING_THRESHOLD = 40.0\n+ FREE_SHIPPING_THRESHOLD = 55.0\n");
  assert!(report.summary.contains("increased from €40.00 to €55.00"));
}

#[test]
fn two_version_input_matches_diff_input() {
  let old = "FREE_SHIPPING_THRESHOLD = 50.0\nVAT_RATE = 0.10\n";
  let new = "FREE_SHIPPING_THRESHOLD = 40.0\nVAT_RATE = 0.10\n";
  let report = analyze(&line_diff(old, new));
  assert!(report.summary.contains("lowered from €50.00 to €40.00"));
}

#[test]
fn log_appends_are_monotonic_across_runs() {
  let dir = tempfile::tempdir().unwrap();
  let log = dir.path().join("business_updates.md");

  let first = analyze(PRICING_DIFF);
  append_update(&log, &update_block(&first, "2025-01-15 10:30 UTC")).unwrap();
  let second = analyze("+ nothing recognizable\n");
  append_update(&log, &update_block(&second, "2025-01-15 11:45 UTC")).unwrap();

  let content = fs::read_to_string(&log).unwrap();
  let a = content.find("### Business Update – 2025-01-15 10:30 UTC").unwrap();
  let b = content.find("### Business Update – 2025-01-15 11:45 UTC").unwrap();
  assert!(a < b);
  assert!(content.contains("Minor internal changes; no obvious business impact."));
}

#[test]
fn store_accumulates_one_record_per_run() {
  let dir = tempfile::tempdir().unwrap();
  let store = dir.path().join("proposals.json");

  for n in 1..=3 {
    let report = analyze(PRICING_DIFF);
    let record = ProposalRecord::from_report(
      &report,
      "https://github.com/acme/shop/pull/12",
      &n.to_string(),
    );
    append_proposal(&store, record).unwrap();
  }

  let records = load_proposals(&store);
  assert_eq!(records.len(), 3);
  assert_eq!(records[0].pr_number, "1");
  assert_eq!(records[2].pr_number, "3");
  for record in &records {
    assert_eq!(record.pr_html_url, "https://github.com/acme/shop/pull/12");
    assert_eq!(record.docs_pr_html_url, "");
    assert!(record.summary.contains("€40.00"));
  }
}

#[test]
fn store_survives_a_corrupt_predecessor() {
  let dir = tempfile::tempdir().unwrap();
  let store = dir.path().join("proposals.json");
  fs::write(&store, "]]] definitely not json").unwrap();

  let report = analyze(PRICING_DIFF);
  append_proposal(&store, ProposalRecord::from_report(&report, "", "")).unwrap();

  let records = load_proposals(&store);
  assert_eq!(records.len(), 1);
}

#[test]
fn comment_body_mirrors_the_report() {
  let report = analyze(PRICING_DIFF);
  let comment = pr_comment(&report);
  assert!(comment.starts_with("🤖 **Business doc suggestion based on code diff**"));
  assert!(comment.contains(&report.summary));
  assert!(comment.contains(&report.impact));
  assert!(comment.contains("No breaking change"));
  assert!(comment.ends_with("**Docs will be proposed in a separate PR.**\n"));
}
