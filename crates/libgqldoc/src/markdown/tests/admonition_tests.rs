use crate::markdown::AdmonitionKind;
use crate::markdown::MarkdownProcessor;

fn process(content: &str) -> String {
    MarkdownProcessor::new().process(content)
}

#[test]
fn warning_with_title() {
    let html = process("$$WARNING\ntitle: Heads up\nBody text\n$$");

    assert_eq!(html, concat!(
        "<div class=\"admonition admonition-warning\">\n",
        "<div class=\"admonition-title\">Heads up</div>\n",
        "<div class=\"admonition-content\">\n",
        "\n",
        "Body text\n",
        "\n",
        "</div>\n",
        "</div>",
    ));
    assert!(!html.contains("title:"));
}

#[test]
fn title_defaults_to_the_normalized_type_name() {
    let html = process("$$info\nJust so you know.\n$$");

    assert!(html.starts_with("<div class=\"admonition admonition-info\">\n"));
    assert!(html.contains("<div class=\"admonition-title\">INFO</div>"));
    assert!(html.contains("\n\nJust so you know.\n\n"));
}

#[test]
fn title_match_is_case_insensitive_and_trimmed() {
    let html = process("$$Danger\nTITLE:   Careful now   \nDo not do this.\n$$");

    assert!(html.contains("<div class=\"admonition-title\">Careful now</div>"));
    assert!(html.contains("\n\nDo not do this.\n\n"));
}

#[test]
fn title_line_must_come_first() {
    let html = process("$$INFO\nSome body\ntitle: not a title\n$$");

    assert!(html.contains("<div class=\"admonition-title\">INFO</div>"));
    assert!(html.contains("Some body\ntitle: not a title"));
}

#[test]
fn unknown_types_are_left_alone() {
    let content = "$$NOTE\nNot supported\n$$";

    assert_eq!(process(content), content);
}

#[test]
fn multiple_admonitions_in_one_document() {
    let html = process(concat!(
        "Intro\n\n",
        "$$WARNING\nFirst\n$$\n\n",
        "Middle\n\n",
        "$$DANGER\ntitle: Second\nBody\n$$\n",
    ));

    assert_eq!(html.matches("class=\"admonition admonition-").count(), 2);
    assert!(html.starts_with("Intro\n\n<div class=\"admonition admonition-warning\">"));
    assert!(html.contains("Middle"));
    assert!(html.contains("<div class=\"admonition-title\">Second</div>"));
}

#[test]
fn admonition_kind_names() {
    assert_eq!(AdmonitionKind::from_name("warning"), Some(AdmonitionKind::Warning));
    assert_eq!(AdmonitionKind::from_name("Info"), Some(AdmonitionKind::Info));
    assert_eq!(AdmonitionKind::from_name("DANGER"), Some(AdmonitionKind::Danger));
    assert_eq!(AdmonitionKind::from_name("generic"), None);
    assert_eq!(AdmonitionKind::Danger.css_class(), "admonition admonition-danger");
}
