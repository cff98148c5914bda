use regex::Captures;
use regex::Regex;
use std::sync::OnceLock;

fn mermaid_block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)```mermaid\s*\n([\s\S]*?)```")
            .expect("mermaid block pattern is a valid regex")
    })
}

/// Wraps every fenced ```` ```mermaid ```` block in the container markup the
/// mermaid runtime looks for.
pub(super) fn apply(content: &str) -> String {
    mermaid_block_pattern()
        .replace_all(content, |caps: &Captures<'_>| {
            format!(
                "<div class=\"mermaid-container\">\n\
                <pre class=\"mermaid\">\n\
                {}\n\
                </pre>\n\
                </div>",
                caps[1].trim(),
            )
        })
        .into_owned()
}
