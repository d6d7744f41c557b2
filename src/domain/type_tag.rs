use std::fmt;

use crate::domain::VersionBump;

/// The kind of change a commit carries.
///
/// Each tag owns its glyph, keyword, description and the bump it implies, so
/// the prompt labels and the bump association come from one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Feat,
    Fix,
    Refactor,
    Correction,
}

impl TypeTag {
    /// All tags, in the order they are offered to the user
    pub const ALL: [TypeTag; 4] = [
        TypeTag::Feat,
        TypeTag::Fix,
        TypeTag::Refactor,
        TypeTag::Correction,
    ];

    pub fn emoji(self) -> &'static str {
        match self {
            TypeTag::Feat => "🎉",
            TypeTag::Fix => "🔨",
            TypeTag::Refactor => "➗",
            TypeTag::Correction => "🧼",
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            TypeTag::Feat => "feat",
            TypeTag::Fix => "fix",
            TypeTag::Refactor => "refactor",
            TypeTag::Correction => "correction",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TypeTag::Feat => {
                "Add a feature (captures new items; in particular, anything the end user can see)"
            }
            TypeTag::Fix => {
                "Fix an item (captures modifications; item must exist and the change affect its behavior)."
            }
            TypeTag::Refactor => "A change that does not add features or modify behavior.",
            TypeTag::Correction => {
                "A fix that does not add features or modify behavior (e.g. typos, formatting, white-space, etc.)"
            }
        }
    }

    /// Bump implied by this tag alone, before breaking markers are considered
    pub fn bump(self) -> Option<VersionBump> {
        match self {
            TypeTag::Feat => Some(VersionBump::Minor),
            TypeTag::Fix => Some(VersionBump::Patch),
            TypeTag::Refactor | TypeTag::Correction => None,
        }
    }

    /// Section title used when grouping commits into a changelog
    pub fn changelog_title(self) -> &'static str {
        match self {
            TypeTag::Feat => "Feat",
            TypeTag::Fix => "Fix",
            TypeTag::Refactor => "Refactor",
            TypeTag::Correction => "Correction",
        }
    }

    /// The prefix written into the message, e.g. `🎉 feat`
    pub fn value(self) -> String {
        format!("{} {}", self.emoji(), self.keyword())
    }

    /// The label shown in the type selection list
    pub fn label(self) -> String {
        let consequence = match self.bump() {
            Some(bump) => format!("Bumps {}", bump),
            None => "Bumps nothing".to_string(),
        };
        format!("{}: ({}) {}", self.value(), consequence, self.description())
    }

    /// Look a tag up by its bare keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        TypeTag::ALL.into_iter().find(|tag| tag.keyword() == keyword)
    }

    /// Look a tag up by its prefix value (`🎉 feat`)
    pub fn from_value(value: &str) -> Option<Self> {
        TypeTag::ALL.into_iter().find(|tag| tag.value() == value)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(TypeTag::Feat.value(), "🎉 feat");
        assert_eq!(TypeTag::Fix.value(), "🔨 fix");
        assert_eq!(TypeTag::Refactor.value(), "➗ refactor");
        assert_eq!(TypeTag::Correction.value(), "🧼 correction");
        assert_eq!(TypeTag::Feat.to_string(), TypeTag::Feat.value());
    }

    #[test]
    fn test_bump_association() {
        assert_eq!(TypeTag::Feat.bump(), Some(VersionBump::Minor));
        assert_eq!(TypeTag::Fix.bump(), Some(VersionBump::Patch));
        assert_eq!(TypeTag::Refactor.bump(), None);
        assert_eq!(TypeTag::Correction.bump(), None);
    }

    #[test]
    fn test_labels_state_consequence() {
        assert!(TypeTag::Feat
            .label()
            .starts_with("🎉 feat: (Bumps MINOR) Add a feature"));
        assert!(TypeTag::Fix.label().starts_with("🔨 fix: (Bumps PATCH) Fix an item"));
        assert!(TypeTag::Refactor
            .label()
            .starts_with("➗ refactor: (Bumps nothing)"));
        assert!(TypeTag::Correction
            .label()
            .contains("typos, formatting, white-space"));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(TypeTag::from_keyword("fix"), Some(TypeTag::Fix));
        assert_eq!(TypeTag::from_keyword("docs"), None);
        assert_eq!(TypeTag::from_value("🧼 correction"), Some(TypeTag::Correction));
        assert_eq!(TypeTag::from_value("correction"), None);
    }

    #[test]
    fn test_changelog_titles() {
        let titles: Vec<_> = TypeTag::ALL.iter().map(|t| t.changelog_title()).collect();
        assert_eq!(titles, vec!["Feat", "Fix", "Refactor", "Correction"]);
    }
}
