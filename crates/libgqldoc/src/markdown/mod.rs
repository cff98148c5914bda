//! Expansion of the documentation's custom markdown dialect into HTML
//! fragments:
//!
//! ````text
//! ```mermaid                  $$generic                 $$WARNING
//! flowchart TD                === "Tab 1"               title: Heads up
//!     A --> B                     Tab 1 body...         Body...
//! ```                         === "Tab 2"               $$
//!                                 Tab 2 body...
//!                             $$                        ==highlighted==
//! ````
//!
//! Supported admonition types are `WARNING`, `INFO` and `DANGER`.

mod admonition_kind;
mod admonition_pass;
mod highlight_pass;
mod markdown_processor;
mod mermaid_pass;
mod tab_set_counter;
mod tabbed_content_pass;

pub use admonition_kind::AdmonitionKind;
pub use markdown_processor::MarkdownProcessor;
pub use tab_set_counter::TabSetCounter;

#[cfg(test)]
mod tests;
