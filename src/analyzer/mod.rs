//! Analysis engine for classifying commits and determining version bumps

pub mod bump_classifier;
pub mod version_analyzer;

pub use bump_classifier::{
    classify, classify_with, default_rules, is_recognized, parse_header, BumpRule, CommitHeader,
    HeaderKind,
};
pub use version_analyzer::{ClassifiedCommit, VersionAnalyzer};
