use crate::markdown::TabSetCounter;
use regex::Captures;
use regex::Regex;
use std::sync::OnceLock;

fn generic_block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\$\$generic\s*\n([\s\S]*?)\s*\$\$")
            .expect("generic block pattern is a valid regex")
    })
}

fn tab_marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"===\s*"([^"]+)"\s*\n"#)
            .expect("tab marker pattern is a valid regex")
    })
}

fn leading_indent_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)^ {4}")
            .expect("leading indent pattern is a valid regex")
    })
}

/// Position of a `=== "Title"` line within a `$$generic` block body.
#[derive(Debug)]
struct TabMarker<'a> {
    title: &'a str,
    start: usize,
    content_start: usize,
}

#[derive(Debug)]
struct Tab<'a> {
    title: &'a str,
    content: String,
}

/// Replaces every `$$generic ... $$` block with a `tabbed-set`. Each block
/// consumes one id from `counter`, including blocks that turn out to contain
/// no tab markers.
pub(super) fn apply(content: &str, counter: &mut TabSetCounter) -> String {
    generic_block_pattern()
        .replace_all(content, |caps: &Captures<'_>| {
            let tab_set_id = counter.next_id();
            render_block(&caps[1], tab_set_id)
        })
        .into_owned()
}

fn render_block(inner: &str, tab_set_id: u32) -> String {
    let tabs = split_tabs(inner);
    if tabs.is_empty() {
        log::trace!(
            "`$$generic` block #{tab_set_id} has no tab markers; emitting a \
            plain paragraph.",
        );
        return format!("<p>\n\n{}\n\n</p>", inner.trim());
    }

    let mut html = format!(
        r#"<div class="tabbed-set" data-tabs="{tab_set_id}:{}">"#,
        tabs.len(),
    );
    for (index, tab) in tabs.iter().enumerate() {
        let tab_id = format!("__tabbed_{tab_set_id}_{}", index + 1);
        let checked = if index == 0 { r#" checked="checked""# } else { "" };
        html.push_str(&format!(
            r#"<input{checked} id="{tab_id}" name="__tabbed_{tab_set_id}" type="radio">"#,
        ));
        html.push_str(&format!(r#"<label for="{tab_id}">{}</label>"#, tab.title));
        html.push_str(&format!(
            "<div class=\"tabbed-content\">\n\n{}\n\n</div>",
            tab.content,
        ));
    }
    html.push_str("</div>");
    html
}

/// A tab's body runs from the end of its marker line up to the next marker
/// (or the end of the block). The fixed 4-space indent is removed from every
/// line before the body is trimmed.
fn split_tabs(inner: &str) -> Vec<Tab<'_>> {
    let markers: Vec<TabMarker<'_>> =
        tab_marker_pattern()
            .captures_iter(inner)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let title = caps.get(1)?;
                Some(TabMarker {
                    title: title.as_str(),
                    start: whole.start(),
                    content_start: whole.end(),
                })
            })
            .collect();

    markers.iter()
        .enumerate()
        .map(|(index, marker)| {
            let content_end =
                markers.get(index + 1)
                    .map_or(inner.len(), |next| next.start);
            let raw = &inner[marker.content_start..content_end];
            Tab {
                title: marker.title,
                content: leading_indent_pattern()
                    .replace_all(raw, "")
                    .trim()
                    .to_string(),
            }
        })
        .collect()
}
