//! Domain logic - pure business rules independent of git operations

pub mod answers;
pub mod tag;
pub mod type_tag;
pub mod version;

pub use answers::{Answer, AnswerSet, Field};
pub use tag::TagPattern;
pub use type_tag::TypeTag;
pub use version::{bump_label, bump_version, VersionBump};
