//! Transforms used to turn a GraphQL introspection result into API
//! documentation: a navigation/content tree, representative example values,
//! example filtering, and a small custom-markdown dialect that is expanded
//! into HTML.
//!
//! Every transform here is pure and total. Loading configuration or
//! introspection JSON from disk is the only fallible surface.

mod api_endpoints;
pub mod config;
pub mod example_filter;
pub mod example_value;
pub mod html;
pub mod introspection;
pub mod markdown;
pub mod navigation;
mod slug;

pub use api_endpoints::format_api_endpoints;
pub use api_endpoints::ServerEntry;
pub use slug::slugify;

#[cfg(test)]
mod tests;
