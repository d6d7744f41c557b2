//! The ordered questions a host asks to build a commit message.
//!
//! A prompt engine only needs what is declared here: the answer key, the
//! kind of prompt, its text, the choices, the filter to run on raw input and
//! the default. The order of [`questions`] is the order the user sees.

use crate::domain::{Answer, Field, TypeTag};
use crate::error::Result;
use crate::text::{emojize, require_non_empty};

/// Transform applied to raw input before it is stored.
///
/// An `Err` is a validation failure: the host shows it and asks again.
pub type Filter = fn(&str) -> Result<String>;

/// How a question is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick one entry from `choices`
    List,
    /// Free text
    Input,
    /// Yes/no
    Confirm,
}

/// One selectable entry of a list question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Value stored as the answer
    pub value: String,
    /// Label displayed to the user
    pub name: String,
}

/// One entry of the question schema
#[derive(Debug, Clone)]
pub struct Question {
    /// Answer key the result is stored under
    pub field: Field,
    /// How the question is presented
    pub kind: QuestionKind,
    /// Prompt text
    pub message: &'static str,
    /// Entries of a list question, empty otherwise
    pub choices: Vec<Choice>,
    /// Transform run on raw text input
    pub filter: Option<Filter>,
    /// Answer used when the input is left empty
    pub default: Option<Answer>,
}

impl Question {
    fn new(field: Field, kind: QuestionKind, message: &'static str) -> Self {
        Question {
            field,
            kind,
            message,
            choices: Vec::new(),
            filter: None,
            default: None,
        }
    }

    fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    fn with_default(mut self, default: Answer) -> Self {
        self.default = Some(default);
        self
    }

    /// Answer key
    pub fn name(&self) -> &'static str {
        self.field.as_str()
    }

    /// Run the question's filter over raw input, or pass it through.
    ///
    /// Must be called again on every resubmission until it succeeds.
    pub fn apply_filter(&self, raw: &str) -> Result<String> {
        match self.filter {
            Some(filter) => filter(raw),
            None => Ok(raw.to_string()),
        }
    }
}

/// Clean up the scope answer.
///
/// A single word is returned as is. Several words are joined by single spaces
/// and their `:shortcode:` tokens are turned into emoji.
pub fn parse_scope(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    match words.as_slice() {
        [] => String::new(),
        [word] => word.to_string(),
        _ => emojize(&words.join(" ")),
    }
}

/// Strip surrounding periods and whitespace from the subject and require
/// something to be left.
pub fn parse_subject(text: &str) -> Result<String> {
    let subject = text.trim_matches(|c: char| c == '.' || c.is_whitespace());
    require_non_empty(subject, "Subject is required.")
}

fn scope_filter(text: &str) -> Result<String> {
    Ok(parse_scope(text))
}

fn body_filter(text: &str) -> Result<String> {
    Ok(crate::text::normalize_breaks(text))
}

/// The questions to ask, in order.
pub fn questions() -> Vec<Question> {
    let mut prefix = Question::new(
        Field::Prefix,
        QuestionKind::List,
        "Select the type of change you are committing",
    );
    prefix.choices = TypeTag::ALL
        .into_iter()
        .map(|tag| Choice {
            value: tag.value(),
            name: tag.label(),
        })
        .collect();

    vec![
        prefix,
        Question::new(
            Field::Scope,
            QuestionKind::Input,
            "Scope. Enter the scope of the change (e.g. docs/test/ci/perf, a file name, or a category).\n\
             Enter MarkDown emojis with ':emoji:' style syntax (e.g. :tada:):",
        )
        .with_filter(scope_filter),
        Question::new(
            Field::Subject,
            QuestionKind::Input,
            "Subject. Concise description of the changes. Imperative, lower case and no final dot:",
        )
        .with_filter(parse_subject),
        Question::new(
            Field::Body,
            QuestionKind::Input,
            "Body. Motivation for the change and contrast this with previous behavior \
             (use '|' to break lines):",
        )
        .with_filter(body_filter),
        Question::new(
            Field::IsBreakingChange,
            QuestionKind::Confirm,
            "Is this a BREAKING CHANGE? (Bumps MAJOR)",
        )
        .with_default(Answer::Confirm(false)),
        Question::new(
            Field::Footer,
            QuestionKind::Input,
            "Footer. Information about Breaking Changes and reference issues that this commit \
             closes: (press [enter] to skip)",
        )
        .with_default(Answer::Text(String::new())),
    ]
}
