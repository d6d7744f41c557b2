use regex::Regex;
use semver::Version;

use crate::error::{CzEmojiError, Result};

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Create a new tag pattern; it must contain exactly one `{version}`
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches("{version}").count() != 1 {
            return Err(CzEmojiError::config(format!(
                "Tag format '{}' must contain exactly one {{version}} placeholder",
                pattern
            )));
        }

        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"(.+)");
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| CzEmojiError::config(format!("Invalid tag format '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace("{version}", &version.to_string())
    }

    /// Extract the semantic version from a tag that follows this pattern.
    ///
    /// Returns `None` for tags of another shape or with an unparsable version.
    pub fn extract_version(&self, tag: &str) -> Option<Version> {
        let captures = self.matcher.captures(tag)?;
        Version::parse(captures.get(1)?.as_str()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_format() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.format(&Version::new(1, 2, 3)), "v1.2.3");
    }

    #[test]
    fn test_pattern_format_with_suffix() {
        let pattern = TagPattern::new("release-{version}").unwrap();
        assert_eq!(pattern.format(&Version::new(1, 2, 3)), "release-1.2.3");
    }

    #[test]
    fn test_extract_version() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.extract_version("v1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(pattern.extract_version("release-1.2.3"), None);
        assert_eq!(pattern.extract_version("vnext"), None);
    }

    #[test]
    fn test_extract_version_escapes_pattern() {
        let pattern = TagPattern::new("app.{version}+x").unwrap();
        assert_eq!(
            pattern.extract_version("app.0.3.0+x"),
            Some(Version::new(0, 3, 0))
        );
        assert_eq!(pattern.extract_version("appX0.3.0+x"), None);
    }

    #[test]
    fn test_pattern_requires_placeholder() {
        assert!(TagPattern::new("latest").is_err());
        assert!(TagPattern::new("{version}-{version}").is_err());
    }
}
