//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - A line-based prompt engine driving the question schema

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use tracing::debug;

use crate::domain::{Answer, AnswerSet};
use crate::questions::{Question, QuestionKind};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_commit_analysis, display_error, display_proposed_version, display_status,
    display_success, format_classification, format_error,
};

/// Ask every question in order and collect the answers.
///
/// Prompts are written to `output` and answers read line by line from
/// `input`. A question whose filter rejects the answer is asked again.
///
/// # Returns
/// * `Ok(AnswerSet)` - All answers, filtered
/// * `Err` - If input ends early or an I/O error occurs
pub fn ask_all<R: BufRead, W: Write>(
    schema: &[Question],
    input: &mut R,
    output: &mut W,
) -> Result<AnswerSet> {
    let mut answers = AnswerSet::default();
    for question in schema {
        let answer = ask(question, input, output)?;
        debug!(field = question.name(), "answer recorded");
        answers.record(question.field, answer)?;
    }
    Ok(answers)
}

/// Ask a single question until it gets an acceptable answer.
pub fn ask<R: BufRead, W: Write>(
    question: &Question,
    input: &mut R,
    output: &mut W,
) -> Result<Answer> {
    loop {
        write_prompt(question, output)?;
        let raw = read_answer(question, input)?;

        let answer = match question.kind {
            QuestionKind::List => select_choice(question, &raw),
            QuestionKind::Confirm => parse_confirmation(question, &raw),
            QuestionKind::Input => filter_text(question, &raw),
        };

        match answer {
            Ok(answer) => return Ok(answer),
            Err(message) => writeln!(output, "{}", format_error(&message))?,
        }
    }
}

fn write_prompt<W: Write>(question: &Question, output: &mut W) -> Result<()> {
    match question.kind {
        QuestionKind::List => {
            writeln!(output, "\n{}", question.message)?;
            for (i, choice) in question.choices.iter().enumerate() {
                writeln!(output, "  {}. {}", i + 1, choice.name)?;
            }
            write!(output, "Select (1-{}) [default: 1]: ", question.choices.len())?;
        }
        QuestionKind::Confirm => {
            let hint = match question.default {
                Some(Answer::Confirm(true)) => "Y/n",
                _ => "y/N",
            };
            write!(output, "\n{} ({}): ", question.message, hint)?;
        }
        QuestionKind::Input => {
            write!(output, "\n{}\n> ", question.message)?;
        }
    }
    output.flush()?;
    Ok(())
}

fn read_answer<R: BufRead>(question: &Question, input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input closed before '{}' was answered", question.name());
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn select_choice(question: &Question, raw: &str) -> std::result::Result<Answer, String> {
    let selection = raw.trim();

    // If empty input, default to first choice (index 1)
    let index = if selection.is_empty() {
        1
    } else {
        selection.parse::<usize>().unwrap_or(0)
    };

    match index.checked_sub(1).and_then(|i| question.choices.get(i)) {
        Some(choice) => Ok(Answer::Text(choice.value.clone())),
        None => Err(format!(
            "Invalid selection '{}', expected a number between 1 and {}",
            selection,
            question.choices.len()
        )),
    }
}

fn parse_confirmation(question: &Question, raw: &str) -> std::result::Result<Answer, String> {
    match raw.trim().to_lowercase().as_str() {
        "" => match &question.default {
            Some(Answer::Confirm(value)) => Ok(Answer::Confirm(*value)),
            _ => Ok(Answer::Confirm(false)),
        },
        "y" | "yes" => Ok(Answer::Confirm(true)),
        "n" | "no" => Ok(Answer::Confirm(false)),
        other => Err(format!("Please answer 'y' or 'n' (got '{}')", other)),
    }
}

fn filter_text(question: &Question, raw: &str) -> std::result::Result<Answer, String> {
    if raw.is_empty() {
        if let Some(Answer::Text(default)) = &question.default {
            return Ok(Answer::Text(default.clone()));
        }
    }

    question
        .apply_filter(raw)
        .map(Answer::Text)
        .map_err(|e| e.to_string())
}
