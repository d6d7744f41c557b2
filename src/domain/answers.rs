use std::fmt;

use crate::error::{CzEmojiError, Result};

/// Name of a collected answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Prefix,
    Scope,
    Subject,
    Body,
    IsBreakingChange,
    Footer,
}

impl Field {
    /// Answer key as exposed to prompt engines
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Prefix => "prefix",
            Field::Scope => "scope",
            Field::Subject => "subject",
            Field::Body => "body",
            Field::IsBreakingChange => "is_breaking_change",
            Field::Footer => "footer",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resolved answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
}

/// Resolved answers for one commit message.
///
/// Built up field by field while the host collects input, then handed to
/// [`crate::message::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    pub prefix: String,
    pub scope: String,
    pub subject: String,
    pub body: String,
    pub is_breaking_change: bool,
    pub footer: String,
}

impl AnswerSet {
    /// Store an answer under its field.
    ///
    /// Fails when the answer kind does not fit the field, e.g. free text for
    /// the breaking-change confirmation.
    pub fn record(&mut self, field: Field, answer: Answer) -> Result<()> {
        match (field, answer) {
            (Field::IsBreakingChange, Answer::Confirm(value)) => self.is_breaking_change = value,
            (Field::IsBreakingChange, Answer::Text(_)) | (_, Answer::Confirm(_)) => {
                return Err(CzEmojiError::validation(format!(
                    "Unexpected answer type for `{}`",
                    field
                )));
            }
            (Field::Prefix, Answer::Text(value)) => self.prefix = value,
            (Field::Scope, Answer::Text(value)) => self.scope = value,
            (Field::Subject, Answer::Text(value)) => self.subject = value,
            (Field::Body, Answer::Text(value)) => self.body = value,
            (Field::Footer, Answer::Text(value)) => self.footer = value,
        }
        Ok(())
    }
}
