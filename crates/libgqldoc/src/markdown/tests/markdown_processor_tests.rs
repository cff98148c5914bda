use crate::markdown::MarkdownProcessor;

fn process(content: &str) -> String {
    MarkdownProcessor::new().process(content)
}

#[test]
fn plain_markdown_is_unchanged() {
    let content = "# Title\n\nSome *emphasis* and `code`.\n";

    assert_eq!(process(content), content);
}

#[test]
fn mermaid_block_is_wrapped_and_trimmed() {
    let html = process("Before\n```mermaid\n\n  flowchart TD\n    A --> B\n\n```\nAfter");

    assert_eq!(html, concat!(
        "Before\n",
        "<div class=\"mermaid-container\">\n",
        "<pre class=\"mermaid\">\n",
        "flowchart TD\n",
        "    A --> B\n",
        "</pre>\n",
        "</div>\n",
        "After",
    ));
}

#[test]
fn other_code_fences_are_not_mermaid() {
    let content = "```rust\nlet x = 1;\n```";

    assert_eq!(process(content), content);
}

#[test]
fn highlight_span() {
    assert_eq!(
        process("==foo=="),
        "<mark class=\"text-highlight\">foo</mark>",
    );
    assert_eq!(
        process("a ==b c== d ==e=="),
        concat!(
            "a <mark class=\"text-highlight\">b c</mark> ",
            "d <mark class=\"text-highlight\">e</mark>",
        ),
    );
}

#[test]
fn empty_highlight_does_not_match() {
    assert_eq!(process("===="), "====");
}

#[test]
fn highlight_inside_admonition_body_survives_until_the_last_pass() {
    let html = process("$$INFO\nThis is ==important==.\n$$");

    assert!(html.contains("This is <mark class=\"text-highlight\">important</mark>."));
}

#[test]
fn highlight_inside_tab_body_is_expanded() {
    let html = process("$$generic\n=== \"T\"\n    a ==b== c\n$$");

    assert!(html.contains("a <mark class=\"text-highlight\">b</mark> c"));
}

#[test]
fn mermaid_inside_a_tab_is_expanded_first() {
    let html = process(concat!(
        "$$generic\n",
        "=== \"Diagram\"\n",
        "    ```mermaid\n",
        "    graph LR\n",
        "    ```\n",
        "$$",
    ));

    assert!(html.contains("<pre class=\"mermaid\">\ngraph LR\n</pre>"));
    assert!(html.contains("<label for=\"__tabbed_1_1\">Diagram</label>"));
}
