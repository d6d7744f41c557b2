//! Commit message assembly.

use tracing::debug;

use crate::domain::AnswerSet;

/// Text that replaces the body when the change is breaking
pub const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE 🚨: ";

/// Render the final commit message from resolved answers.
///
/// The header is `prefix(scope): subject`, with the parentheses omitted for
/// an empty scope. For a breaking change the body slot holds
/// [`BREAKING_CHANGE_MARKER`] followed by the footer text, the typed body is
/// dropped and the footer is not repeated. Otherwise body and footer each
/// follow a blank line when present.
pub fn render(answers: &AnswerSet) -> String {
    let mut message = answers.prefix.clone();

    if !answers.scope.is_empty() {
        message.push('(');
        message.push_str(&answers.scope);
        message.push(')');
    }

    message.push_str(": ");
    message.push_str(&answers.subject);

    if answers.is_breaking_change {
        // The footer moves into the body slot; nothing else follows it.
        message.push_str(BREAKING_CHANGE_MARKER);
        message.push_str(&answers.footer);
    } else {
        for section in [&answers.body, &answers.footer] {
            if !section.is_empty() {
                message.push_str("\n\n");
                message.push_str(section);
            }
        }
    }

    debug!(
        prefix = %answers.prefix,
        breaking = answers.is_breaking_change,
        len = message.len(),
        "rendered commit message"
    );
    message
}

/// A complete example message
pub fn example() -> String {
    "🔨 fix: correct minor typos in code\n\n\
     see the issue for details on the typos fixed\n\n\
     closes issue #12"
        .to_string()
}

/// The shape every rendered message follows
pub fn schema() -> String {
    format!(
        "<prefix>(<scope>): <subject>\n<BLANK LINE>\n<body>\n<BLANK LINE>\n({})<footer>",
        BREAKING_CHANGE_MARKER
    )
}

/// Short description of the convention
pub fn info() -> String {
    "Commits start with an emoji type tag: 🎉 feat adds capability and bumps MINOR, \
     🔨 fix changes existing behavior and bumps PATCH, ➗ refactor and 🧼 correction \
     bump nothing. A subject ending in '!' or starting with 'BREAKING CHANGE' bumps MAJOR."
        .to_string()
}
