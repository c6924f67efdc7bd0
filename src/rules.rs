//! Heuristic rules over raw diff text.
//!
//! A flat, fixed-order table of independent pattern predicates, not a
//! decision tree. Each rule sees the full diff text and contributes zero or
//! more summary points and impact sentences. Matches are textual only: the
//! literal-rate rules fire on numeric coincidences with no semantic check.

use regex::Regex;
use std::sync::LazyLock;

/// Summary/impact fragments contributed by one rule.
#[derive(Debug, Default, Clone)]
pub struct RuleHit {
  pub points: Vec<String>,
  pub impacts: Vec<String>,
}

/// One heuristic rule: an identifier plus a pure predicate over diff text.
pub struct Rule {
  pub id: &'static str,
  pub apply: fn(&str) -> Option<RuleHit>,
}

/// Rule table in evaluation order. Order is part of the output contract:
/// summary points appear in this order.
pub const RULES: &[Rule] = &[
  Rule {
    id: "shipping-threshold",
    apply: shipping_threshold,
  },
  Rule {
    id: "member-discount",
    apply: member_discount,
  },
  Rule {
    id: "member-rate",
    apply: member_rate,
  },
  Rule {
    id: "non-member-rate",
    apply: non_member_rate,
  },
];

/// Summary point when no rule matched anything.
pub const FALLBACK_POINT: &str = "Minor internal changes; no obvious business impact.";
/// Impact sentence paired with the fallback point.
pub const FALLBACK_IMPACT: &str = "No user-visible change detected.";

static RE_THRESHOLD_REMOVED: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^-\s*FREE_SHIPPING_THRESHOLD\s*=\s*([0-9.]+)").unwrap()
});
static RE_THRESHOLD_ADDED: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?m)^\+\s*FREE_SHIPPING_THRESHOLD\s*=\s*([0-9.]+)").unwrap()
});
static RE_MEMBER_DISCOUNT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"calculate_discount\(.+is_member").unwrap());
static RE_MEMBER_RATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b0\.8\b").unwrap());
static RE_NON_MEMBER_RATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b0\.9\b").unwrap());

/// Free-shipping threshold changes. Needs an added assignment line; a
/// removed line with a different value upgrades the wording to a
/// lowered/increased comparison with an impact sentence.
fn shipping_threshold(diff: &str) -> Option<RuleHit> {
  let added = RE_THRESHOLD_ADDED.captures(diff)?;
  let new_value: f64 = added[1].parse().ok()?;
  let old_value = RE_THRESHOLD_REMOVED
    .captures(diff)
    .and_then(|c| c[1].parse::<f64>().ok());

  let mut hit = RuleHit::default();
  match old_value {
    Some(old) if old != new_value => {
      let direction = if new_value < old { "lowered" } else { "increased" };
      hit.points.push(format!(
        "Free-shipping threshold {} from €{:.2} to €{:.2}.",
        direction, old, new_value
      ));
      hit
        .impacts
        .push("May affect conversion rate and shipping costs.".to_string());
    }
    _ => {
      hit
        .points
        .push(format!("Free-shipping threshold set to €{:.2}.", new_value));
    }
  }
  Some(hit)
}

/// Discount call parameterized by a membership flag.
fn member_discount(diff: &str) -> Option<RuleHit> {
  if !RE_MEMBER_DISCOUNT.is_match(diff) {
    return None;
  }
  Some(RuleHit {
    points: vec!["Introduced member-specific discount.".to_string()],
    impacts: vec!["Improves loyalty value; affects checkout messaging.".to_string()],
  })
}

/// Literal member rate 0.8 anywhere in the diff.
fn member_rate(diff: &str) -> Option<RuleHit> {
  if !RE_MEMBER_RATE.is_match(diff) {
    return None;
  }
  Some(RuleHit {
    points: vec!["Members receive 20% discount.".to_string()],
    impacts: Vec::new(),
  })
}

/// Literal non-member rate 0.9 anywhere in the diff.
fn non_member_rate(diff: &str) -> Option<RuleHit> {
  if !RE_NON_MEMBER_RATE.is_match(diff) {
    return None;
  }
  Some(RuleHit {
    points: vec!["Non-members retain 10% discount.".to_string()],
    impacts: Vec::new(),
  })
}
