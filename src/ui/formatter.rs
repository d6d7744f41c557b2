//! Pure formatting functions for UI output.
//!
//! This module contains display/formatting logic separated from user
//! interaction. Status lines go to stderr so stdout only ever carries the
//! composed message or the requested report.

use console::style;
use semver::Version;

use crate::analyzer::ClassifiedCommit;
use crate::domain::{bump_label, VersionBump};

/// Red "ERROR:" line
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// One line of a classification report: `<LEVEL>\t<subject>`
pub fn format_classification(subject: &str, bump: Option<VersionBump>) -> String {
    format!("{}\t{}", bump_label(bump), subject)
}

/// Display the classified commits of a release range.
///
/// Shows up to 10 commits; if more exist, the count of remaining ones.
pub fn display_commit_analysis(commits: &[ClassifiedCommit], since: Option<&str>) {
    match since {
        Some(tag) => eprintln!("\n{}", style(format!("Commits since {}", tag)).bold()),
        None => eprintln!("\n{}", style("All commits").bold()),
    }

    for commit in commits.iter().take(10) {
        let short_hash = commit.hash.get(..7).unwrap_or(&commit.hash);
        eprintln!(
            "  {} {}",
            style(short_hash).dim(),
            format_classification(&commit.subject, commit.bump)
        );
    }

    if commits.len() > 10 {
        eprintln!("  ... and {} more commits", commits.len() - 10);
    }
}

/// Display the proposed release (or initial release).
pub fn display_proposed_version(current: Option<&Version>, next: &Version, new_tag: &str) {
    match current {
        Some(old) => {
            eprintln!("\n{}", style("Proposed Version Change:").bold());
            eprintln!("  From: {}", style(old).red());
            eprintln!("  To:   {} ({})", style(next).green(), new_tag);
        }
        None => {
            eprintln!("\n{}", style("Initial Version:").bold());
            eprintln!("  New version: {} ({})", style(next).green(), new_tag);
        }
    }
}
