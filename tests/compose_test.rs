// tests/compose_test.rs
use cz_emoji::analyzer::{classify, is_recognized};
use cz_emoji::questions::{parse_scope, parse_subject, questions};
use cz_emoji::{render, ui, AnswerSet, TypeTag, VersionBump};
use std::io::Cursor;

fn compose(input: &str) -> String {
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();
    let answers = ui::ask_all(&questions(), &mut reader, &mut output).unwrap();
    render(&answers)
}

#[test]
fn test_compose_feature_with_scope() {
    assert_eq!(compose("1\napi\nadd x\n\n\n\n"), "🎉 feat(api): add x");
}

#[test]
fn test_compose_fix_with_body() {
    assert_eq!(compose("2\n\nfix y\ndetails\nn\n\n"), "🔨 fix: fix y\n\ndetails");
}

#[test]
fn test_compose_breaking_change_uses_footer() {
    let message = compose("1\ncli\nnew flags\nignored body\ny\nold flags removed\n");
    assert_eq!(
        message,
        "🎉 feat(cli): new flagsBREAKING CHANGE 🚨: old flags removed"
    );
    assert_eq!(message.matches("old flags removed").count(), 1);
    assert!(!message.contains("ignored body"));
}

#[test]
fn test_composed_breaking_change_classifies_by_type() {
    // The marker lands mid-line, so only the type prefix decides the bump
    let feature = compose("1\ncli\nnew flags\n\ny\nold flags removed\n");
    assert_eq!(classify(&feature), Some(VersionBump::Minor));
    assert!(is_recognized(&feature));

    let refactor = compose("3\n\nsplit parser\n\ny\nparser api changed\n");
    assert_eq!(
        refactor,
        "➗ refactor: split parserBREAKING CHANGE 🚨: parser api changed"
    );
    assert_eq!(classify(&refactor), None);
}

#[test]
fn test_compose_emojized_scope() {
    assert_eq!(
        compose("4\nrelease :tada:\nfix wording\n\n\n\n"),
        "🧼 correction(release 🎉): fix wording"
    );
}

#[test]
fn test_composed_messages_classify_like_their_type() {
    for tag in TypeTag::ALL {
        let message = render(&AnswerSet {
            prefix: tag.value(),
            subject: "something".to_string(),
            ..AnswerSet::default()
        });
        assert!(is_recognized(&message), "{} should be recognized", message);
        assert_eq!(classify(&message), tag.bump(), "{}", message);
    }
}

#[test]
fn test_breaking_marker_escalates_any_type() {
    for tag in TypeTag::ALL {
        let message = render(&AnswerSet {
            prefix: tag.value(),
            subject: "drop the old api!".to_string(),
            ..AnswerSet::default()
        });
        assert_eq!(classify(&message), Some(VersionBump::Major));
    }
}

#[test]
fn test_filters_from_schema_match_public_helpers() {
    assert_eq!(parse_scope("docs"), "docs");
    assert_eq!(parse_subject("Write docs.").unwrap(), "Write docs");
    assert_eq!(
        parse_subject(" .. ").unwrap_err().to_string(),
        "Subject is required."
    );
}
