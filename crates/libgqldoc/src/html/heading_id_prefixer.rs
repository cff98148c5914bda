use crate::slugify;
use regex::Captures;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn heading_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)<(h[1-6])([^>]*)\sid=["']([^"']+)["']([^>]*)>"#)
            .expect("heading id pattern is a valid regex")
    })
}

/// Prefixes the `id` of every `<h1>`..`<h6>` tag in `html` with the slugified
/// `prefix_parts`, joined by `-`.
///
/// ```text
/// prefix_heading_ids(r#"<h4 id="disjunction">Disjunction</h4>"#, &["GraphQL API", "Filters"])
///   => <h4 id="graphql-api-filters-disjunction">Disjunction</h4>
/// ```
///
/// Other attributes and the heading's content are kept verbatim, and headings
/// without an `id` are left alone. Empty `html` or an empty list of prefix
/// parts returns the input unchanged.
pub fn prefix_heading_ids<'html, S: AsRef<str>>(
    html: &'html str,
    prefix_parts: &[S],
) -> Cow<'html, str> {
    if html.is_empty() || prefix_parts.is_empty() {
        return Cow::Borrowed(html);
    }

    let prefix =
        prefix_parts.iter()
            .map(|part| slugify(part.as_ref()))
            .collect::<Vec<_>>()
            .join("-");

    heading_id_pattern().replace_all(html, |caps: &Captures<'_>| {
        format!(
            r#"<{tag}{before_id} id="{prefix}-{existing_id}"{after_id}>"#,
            tag = &caps[1],
            before_id = &caps[2],
            existing_id = &caps[3],
            after_id = &caps[4],
        )
    })
}
