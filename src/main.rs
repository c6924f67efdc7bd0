//! Binary entrypoint: read the diff, run the rules, feed the three sinks
//! (markdown log, proposal store, PR comment file), print `OK`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use chrono::Utc;
use clap::{ArgGroup, Parser};

use diff_brief::{
  analyze, append_proposal, append_update, line_diff, pr_comment, update_block, write_comment,
  BriefError, ProposalRecord,
};

#[derive(Parser)]
#[command(
  name = "diff-brief",
  about = "Business-impact briefs from code diffs for PR automation",
  version,
  group(ArgGroup::new("input").required(true).args(["diff_file", "old_file"]))
)]
struct Args {
  /// Unified diff to analyze
  #[arg(long)]
  diff_file: Option<PathBuf>,

  /// Old version of a source file (paired with --new-file, replaces --diff-file)
  #[arg(long, requires = "new_file")]
  old_file: Option<PathBuf>,

  /// New version of a source file (paired with --old-file)
  #[arg(long, requires = "old_file", conflicts_with = "diff_file")]
  new_file: Option<PathBuf>,

  /// Markdown log collecting business-update entries
  #[arg(long, default_value = "docs/business_updates.md")]
  business_md: PathBuf,

  /// JSON proposal store read by the docs dashboard
  #[arg(long, default_value = "docs/proposals.json")]
  proposals_json: PathBuf,

  /// HTML URL of the pull request under analysis
  #[arg(long, default_value = "")]
  pr_url: String,

  /// Number of the pull request under analysis
  #[arg(long, default_value = "")]
  pr_number: String,

  /// Output file for the rendered PR comment
  #[arg(long, default_value = "pr_comment.md")]
  pr_comment_out: PathBuf,
}

fn main() {
  let args = Args::parse();
  if let Err(e) = run(&args) {
    let _ = writeln!(io::stderr(), "diff-brief error: {}", e);
    process::exit(1);
  }
  println!("OK");
}

fn run(args: &Args) -> Result<(), BriefError> {
  let diff = load_diff(args)?;
  let report = analyze(&diff);

  let timestamp = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
  append_update(&args.business_md, &update_block(&report, &timestamp))?;
  append_proposal(
    &args.proposals_json,
    ProposalRecord::from_report(&report, &args.pr_url, &args.pr_number),
  )?;
  write_comment(&args.pr_comment_out, &pr_comment(&report))?;
  Ok(())
}

fn load_diff(args: &Args) -> Result<String, BriefError> {
  if let Some(path) = &args.diff_file {
    return read_input(path);
  }
  match (&args.old_file, &args.new_file) {
    (Some(old), Some(new)) => Ok(line_diff(&read_input(old)?, &read_input(new)?)),
    // The input arg group guarantees one of the two forms.
    _ => unreachable!("clap enforces --diff-file or --old-file/--new-file"),
  }
}

fn read_input(path: &Path) -> Result<String, BriefError> {
  fs::read_to_string(path).map_err(|e| BriefError::io(path, e))
}
