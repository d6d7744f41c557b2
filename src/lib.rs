//! Compose emoji-tagged conventional commit messages and derive semantic
//! version bumps from them.
//!
//! [`questions::questions`] describes what to ask, [`message::render`] turns
//! the answers into a message, and [`analyzer::classify`] maps a commit
//! subject back to the bump it causes.

pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod message;
pub mod questions;
pub mod text;
pub mod ui;

pub use analyzer::{classify, VersionAnalyzer};
pub use domain::{AnswerSet, TypeTag, VersionBump};
pub use error::{CzEmojiError, Result};
pub use message::render;
