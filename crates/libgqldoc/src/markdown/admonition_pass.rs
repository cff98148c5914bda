use crate::markdown::AdmonitionKind;
use regex::Captures;
use regex::Regex;
use std::sync::OnceLock;

fn admonition_block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\$\$(WARNING|INFO|DANGER)\s*\n([\s\S]*?)\s*\$\$")
            .expect("admonition block pattern is a valid regex")
    })
}

fn title_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\Atitle:\s*(.+?)(?:\r?\n|$)")
            .expect("title line pattern is a valid regex")
    })
}

pub(super) fn apply(content: &str) -> String {
    admonition_block_pattern()
        .replace_all(content, |caps: &Captures<'_>| {
            match AdmonitionKind::from_name(&caps[1]) {
                Some(kind) => render(kind, &caps[2]),
                // The pattern only admits the known kinds.
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn render(kind: AdmonitionKind, inner: &str) -> String {
    let (title, body) = match title_line_pattern().captures(inner) {
        Some(title_caps) => {
            let title_end = title_caps.get(0).map_or(0, |m| m.end());
            let title = title_caps.get(1).map_or("", |m| m.as_str().trim());
            (title, &inner[title_end..])
        },
        None => (kind.name(), inner),
    };

    format!(
        "<div class=\"{css_class}\">\n\
        <div class=\"admonition-title\">{title}</div>\n\
        <div class=\"admonition-content\">\n\
        \n\
        {body}\n\
        \n\
        </div>\n\
        </div>",
        css_class = kind.css_class(),
        body = body.trim(),
    )
}
