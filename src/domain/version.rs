use semver::Version;
use std::fmt;

/// Version bump decision.
///
/// Variants are ordered by severity so the highest bump across a range of
/// commits is simply the maximum. "No bump" is expressed as `None` by the
/// callers that can produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    /// Upper-case label used in prompts and reports
    pub fn label(self) -> &'static str {
        match self {
            VersionBump::Major => "MAJOR",
            VersionBump::Minor => "MINOR",
            VersionBump::Patch => "PATCH",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for an optional bump, "nothing" when there is none
pub fn bump_label(bump: Option<VersionBump>) -> &'static str {
    bump.map(VersionBump::label).unwrap_or("nothing")
}

/// Bump a version according to bump type.
///
/// Lower components are reset and pre-release/build metadata is dropped.
/// When `major_version_zero` is set and the version is still `0.x`, a major
/// bump is applied as a minor one.
pub fn bump_version(version: &Version, bump: VersionBump, major_version_zero: bool) -> Version {
    let bump = if major_version_zero && version.major == 0 && bump == VersionBump::Major {
        VersionBump::Minor
    } else {
        bump
    };

    match bump {
        VersionBump::Major => Version::new(version.major + 1, 0, 0),
        VersionBump::Minor => Version::new(version.major, version.minor + 1, 0),
        VersionBump::Patch => Version::new(version.major, version.minor, version.patch + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_ordering() {
        assert!(VersionBump::Major > VersionBump::Minor);
        assert!(VersionBump::Minor > VersionBump::Patch);
        assert!(Some(VersionBump::Patch) > None);
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(bump_version(&v, VersionBump::Major, false), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(bump_version(&v, VersionBump::Minor, false), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(bump_version(&v, VersionBump::Patch, false), Version::new(1, 2, 4));
    }

    #[test]
    fn test_major_version_zero_downgrades_major() {
        let v = Version::new(0, 4, 1);
        assert_eq!(bump_version(&v, VersionBump::Major, true), Version::new(0, 5, 0));
        assert_eq!(bump_version(&v, VersionBump::Major, false), Version::new(1, 0, 0));

        let stable = Version::new(1, 0, 0);
        assert_eq!(bump_version(&stable, VersionBump::Major, true), Version::new(2, 0, 0));
    }

    #[test]
    fn test_bump_drops_prerelease() {
        let v = Version::parse("1.2.3-rc.1").unwrap();
        assert_eq!(bump_version(&v, VersionBump::Patch, false), Version::new(1, 2, 4));
    }

    #[test]
    fn test_labels() {
        assert_eq!(VersionBump::Major.to_string(), "MAJOR");
        assert_eq!(bump_label(Some(VersionBump::Minor)), "MINOR");
        assert_eq!(bump_label(None), "nothing");
    }
}
