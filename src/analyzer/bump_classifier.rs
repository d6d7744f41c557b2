use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::{TypeTag, VersionBump};
use crate::error::{CzEmojiError, Result};

/// Ordered bump rules; the first one that matches wins.
///
/// Breaking markers come first so they escalate any type to major.
const BUMP_PATTERNS: [(&str, VersionBump); 4] = [
    (r"^.+!$", VersionBump::Major),
    (r"^BREAKING CHANGE", VersionBump::Major),
    (r"^🎉? ?feat", VersionBump::Minor),
    (r"^🔨? ?fix", VersionBump::Patch),
];

/// Every header the convention knows about, including the types that never
/// bump. Group 1 is the type, group 3 the scope, group 4 the `!` marker.
const RECOGNITION_PATTERN: &str =
    r"^(BREAKING CHANGE|🎉? ?feat|🔨? ?fix|➗? ?refactor|🧼? ?correction)(\((.+?)\))?(!)?";

static BUMP_RULES: LazyLock<Vec<BumpRule>> = LazyLock::new(|| {
    BUMP_PATTERNS
        .iter()
        .map(|(pattern, level)| BumpRule::new(pattern, *level).expect("bump pattern is valid"))
        .collect()
});

static RECOGNITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RECOGNITION_PATTERN).expect("recognition pattern is valid"));

/// A subject-line pattern and the bump it implies
#[derive(Debug, Clone)]
pub struct BumpRule {
    pattern: Regex,
    level: VersionBump,
}

impl BumpRule {
    pub fn new(pattern: &str, level: VersionBump) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| CzEmojiError::config(format!("Invalid bump pattern '{}': {}", pattern, e)))?;
        Ok(BumpRule { pattern, level })
    }

    pub fn matches(&self, subject: &str) -> bool {
        self.pattern.is_match(subject)
    }

    pub fn level(&self) -> VersionBump {
        self.level
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// The built-in rules in priority order
pub fn default_rules() -> &'static [BumpRule] {
    &BUMP_RULES
}

/// Classify a commit message with the built-in rules.
///
/// Only the first line is looked at. `None` means the commit causes no bump.
///
/// # Example
/// ```
/// use cz_emoji::analyzer::classify;
/// use cz_emoji::domain::VersionBump;
///
/// assert_eq!(classify("🎉 feat: new thing"), Some(VersionBump::Minor));
/// assert_eq!(classify("feat(x): y!"), Some(VersionBump::Major));
/// assert_eq!(classify("➗ refactor: cleanup"), None);
/// ```
pub fn classify(message: &str) -> Option<VersionBump> {
    classify_with(message, default_rules())
}

/// Classify a commit message against an ordered rule list
pub fn classify_with(message: &str, rules: &[BumpRule]) -> Option<VersionBump> {
    let subject = subject_line(message);
    let bump = rules
        .iter()
        .find(|rule| rule.matches(subject))
        .map(BumpRule::level);
    debug!(subject, bump = ?bump, "classified commit");
    bump
}

/// Whether the message starts with a header of a known type
pub fn is_recognized(message: &str) -> bool {
    RECOGNITION.is_match(subject_line(message))
}

/// What a recognized header is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    Breaking,
    Type(TypeTag),
}

/// The parts of a recognized commit header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitHeader {
    pub kind: HeaderKind,
    pub scope: Option<String>,
    pub has_exclamation: bool,
}

impl CommitHeader {
    /// Changelog section for this header
    pub fn changelog_title(&self) -> &'static str {
        match self.kind {
            HeaderKind::Breaking => "BREAKING CHANGE",
            HeaderKind::Type(tag) => tag.changelog_title(),
        }
    }
}

/// Split a recognized header into type, scope and breaking marker.
///
/// Returns `None` when [`is_recognized`] would return false.
pub fn parse_header(message: &str) -> Option<CommitHeader> {
    let captures = RECOGNITION.captures(subject_line(message))?;
    let kind_text = captures.get(1)?.as_str();

    let kind = if kind_text == "BREAKING CHANGE" {
        HeaderKind::Breaking
    } else {
        let keyword = kind_text.rsplit(' ').next().unwrap_or(kind_text);
        let keyword = keyword.trim_start_matches(|c: char| !c.is_ascii_alphabetic());
        HeaderKind::Type(TypeTag::from_keyword(keyword)?)
    };

    Some(CommitHeader {
        kind,
        scope: captures.get(3).map(|m| m.as_str().to_string()),
        has_exclamation: captures.get(4).is_some(),
    })
}

fn subject_line(message: &str) -> &str {
    message.lines().next().unwrap_or("").trim_end()
}
