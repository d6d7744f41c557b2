//! Git operations abstraction layer
//!
//! The [Repository] trait covers what cz-emoji needs from git: walking the
//! history since the last release, looking up tags and recording a composed
//! commit. Implementations:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust,no_run
//! # use cz_emoji::git::{Git2Repository, Repository};
//! # fn example() -> cz_emoji::Result<()> {
//! let repo = Git2Repository::open(".")?;
//! let head = repo.head_oid()?;
//! let commits = repo.get_commits_between(None, head)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::TagPattern;
use crate::error::Result;
use git2::Oid;
use semver::Version;
use tracing::debug;

/// Commit information for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit hash
    pub hash: String,
    /// The full commit message
    pub message: String,
    /// The commit author
    pub author: String,
}

/// Common git operation trait for abstraction
pub trait Repository {
    /// OID of the commit HEAD points at
    fn head_oid(&self) -> Result<Oid>;

    /// Commits reachable from `to_oid` but not from `from_oid`.
    ///
    /// With `from_oid` set to `None` the whole history up to `to_oid` is
    /// returned. Commits come oldest first.
    fn get_commits_between(&self, from_oid: Option<Oid>, to_oid: Oid) -> Result<Vec<CommitInfo>>;

    /// Commit a tag points at, or `None` if the tag does not exist
    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>>;

    /// All tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commit the current index on top of HEAD with the given message
    fn create_commit(&self, message: &str) -> Result<Oid>;
}

/// Latest release tag: the highest version among tags following `pattern`.
///
/// Prerelease tags are not releases and never become the baseline.
pub fn latest_version_tag<R: Repository>(
    repo: &R,
    pattern: &TagPattern,
) -> Result<Option<(String, Version)>> {
    let latest = repo
        .list_tags()?
        .into_iter()
        .filter_map(|tag| pattern.extract_version(&tag).map(|version| (tag, version)))
        .filter(|(_, version)| version.pre.is_empty())
        .max_by(|(_, a), (_, b)| a.cmp(b));

    debug!(pattern = pattern.as_str(), latest = ?latest, "resolved latest release tag");
    Ok(latest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_version_tag_uses_semver_order() {
        let mut repo = MockRepository::new();
        let oid = Oid::from_bytes(&[1; 20]).unwrap();
        repo.add_tag("v1.9.0", oid);
        repo.add_tag("v1.10.0", oid);
        repo.add_tag("v1.10.0-rc.1", oid);
        repo.add_tag("nightly", oid);

        let pattern = TagPattern::new("v{version}").unwrap();
        let (tag, version) = latest_version_tag(&repo, &pattern).unwrap().unwrap();
        assert_eq!(tag, "v1.10.0");
        assert_eq!(version, Version::new(1, 10, 0));
    }

    #[test]
    fn test_latest_version_tag_skips_prereleases() {
        let mut repo = MockRepository::new();
        let oid = Oid::from_bytes(&[1; 20]).unwrap();
        repo.add_tag("v1.0.0", oid);
        repo.add_tag("v1.1.0-rc.1", oid);

        let pattern = TagPattern::new("v{version}").unwrap();
        let (tag, version) = latest_version_tag(&repo, &pattern).unwrap().unwrap();
        assert_eq!(tag, "v1.0.0");
        assert_eq!(version, Version::new(1, 0, 0));
    }

    #[test]
    fn test_latest_version_tag_only_prereleases() {
        let mut repo = MockRepository::new();
        repo.add_tag("v0.1.0-beta.2", Oid::from_bytes(&[1; 20]).unwrap());

        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(latest_version_tag(&repo, &pattern).unwrap(), None);
    }

    #[test]
    fn test_latest_version_tag_none() {
        let mut repo = MockRepository::new();
        repo.add_tag("release-1.0.0", Oid::from_bytes(&[1; 20]).unwrap());

        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(latest_version_tag(&repo, &pattern).unwrap(), None);
    }
}
