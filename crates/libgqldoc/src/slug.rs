/// Converts `text` into a URL-friendly slug.
///
/// The text is lowercased and trimmed, each run of whitespace becomes a single
/// hyphen, anything other than ASCII word characters (`[a-z0-9_]`) and hyphens
/// is dropped, repeated hyphens collapse into one, and leading/trailing
/// hyphens are removed.
///
/// Slugs are stable under re-slugification:
/// `slugify(&slugify(x)) == slugify(x)`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    for ch in lowered.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            // Hyphens are only emitted between two kept characters.
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}
