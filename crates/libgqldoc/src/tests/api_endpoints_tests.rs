use crate::format_api_endpoints;
use crate::ServerEntry;

fn server(description: &str, url: &str) -> ServerEntry {
    ServerEntry {
        description: description.to_string(),
        url: url.to_string(),
    }
}

#[test]
fn single_server_has_no_separator() {
    let servers = vec![server(" Production ", " https://api.example.com/graphql\n")];

    assert_eq!(
        format_api_endpoints(&servers),
        "Production:\nhttps://api.example.com/graphql",
    );
}

#[test]
fn servers_are_separated_by_a_zero_width_space_line() {
    let servers = vec![
        server("Production", "https://api.example.com/graphql"),
        server("Staging", "https://staging.example.com/graphql"),
    ];

    assert_eq!(
        format_api_endpoints(&servers),
        concat!(
            "Production:\nhttps://api.example.com/graphql",
            "\n\u{200B}\n",
            "Staging:\nhttps://staging.example.com/graphql",
        ),
    );
}

#[test]
fn no_servers_yield_empty_text() {
    assert_eq!(format_api_endpoints(&[]), "");
}
