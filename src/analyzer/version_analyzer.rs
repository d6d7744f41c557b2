use crate::analyzer::classify;
use crate::config::BumpConfig;
use crate::domain::{bump_version, VersionBump};
use crate::error::Result;
use crate::git::Repository;
use git2::Oid;
use semver::Version;
use tracing::{debug, info, instrument};

/// Per-commit classification result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommit {
    pub hash: String,
    pub subject: String,
    pub bump: Option<VersionBump>,
}

/// Aggregates commit classifications into a release decision
pub struct VersionAnalyzer {
    config: BumpConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(config: BumpConfig) -> Self {
        VersionAnalyzer { config }
    }

    /// Highest bump across classified commits; `None` when nothing bumps.
    pub fn analyze_classified(&self, commits: &[ClassifiedCommit]) -> Option<VersionBump> {
        let mut highest = None;

        for commit in commits {
            if commit.bump > highest {
                highest = commit.bump;
            }

            // Nothing outranks a major bump
            if highest == Some(VersionBump::Major) {
                break;
            }
        }

        info!(bump = ?highest, commits = commits.len(), "analyzed commits");
        highest
    }

    /// Classify each commit between two OIDs (`from` exclusive)
    #[instrument(skip(self, repo))]
    pub fn classify_repository_range<R: Repository>(
        &self,
        repo: &R,
        from_oid: Option<Oid>,
        to_oid: Oid,
    ) -> Result<Vec<ClassifiedCommit>> {
        let commits = repo.get_commits_between(from_oid, to_oid)?;
        debug!(count = commits.len(), "loaded commits");

        Ok(commits
            .into_iter()
            .map(|commit| ClassifiedCommit {
                bump: classify(&commit.message),
                subject: commit.message.lines().next().unwrap_or("").to_string(),
                hash: commit.hash,
            })
            .collect())
    }

    /// The version to release next.
    ///
    /// Without a previous release the configured initial version is used.
    /// With one, `None` is returned when no commit asks for a bump.
    pub fn next_version(
        &self,
        current: Option<&Version>,
        bump: Option<VersionBump>,
    ) -> Result<Option<Version>> {
        match (current, bump) {
            (None, _) => Ok(Some(self.config.initial_version()?)),
            (Some(_), None) => Ok(None),
            (Some(version), Some(bump)) => Ok(Some(bump_version(
                version,
                bump,
                self.config.major_version_zero,
            ))),
        }
    }
}
