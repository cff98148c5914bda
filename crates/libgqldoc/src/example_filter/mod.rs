//! Per-operation trimming of the generated Query / Variables / Response
//! examples. Only the examples are affected; argument tables and field
//! definitions in the docs still list everything.

mod example_config;
#[allow(clippy::module_inception)]
mod example_filter;
mod query_filter;
mod response_filter;
mod variables_filter;

pub use example_config::ExampleConfig;
pub use example_config::OperationExampleConfig;
pub use example_filter::ExampleFilter;

#[cfg(test)]
mod tests;
