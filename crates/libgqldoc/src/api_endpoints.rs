/// A server entry as listed in the documentation config (e.g. "Production"
/// at `https://api.example.com/graphql`).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ServerEntry {
    #[serde(default)]
    pub description: String,
    pub url: String,
}

const ENTRY_SEPARATOR: &str = "\n\u{200B}\n";

/// Renders the list of API endpoints shown at the top of the generated docs.
///
/// Each server becomes `"<description>:\n<url>"`. Consecutive entries are
/// separated by a line holding a single zero-width space so that markdown
/// renderers keep the blank line between them.
pub fn format_api_endpoints(servers: &[ServerEntry]) -> String {
    servers.iter()
        .map(|server| format!(
            "{}:\n{}",
            server.description.trim(),
            server.url.trim(),
        ))
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR)
}
