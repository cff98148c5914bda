use regex::Regex;
use std::sync::OnceLock;

fn highlight_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"==([^=]+)==")
            .expect("highlight pattern is a valid regex")
    })
}

/// Turns `==text==` spans into `<mark>` elements. At least one character
/// (and no `=`) is required between the markers.
pub(super) fn apply(content: &str) -> String {
    highlight_pattern()
        .replace_all(content, r#"<mark class="text-highlight">${1}</mark>"#)
        .into_owned()
}
