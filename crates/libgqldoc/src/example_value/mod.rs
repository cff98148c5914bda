//! Representative example values for fields, arguments and input fields,
//! used to fill the Query / Variables / Response samples of the docs.
//!
//! All knowledge lives in the static tables of [`example_tables`]; the
//! generator only decides which table to consult.

mod example_context;
mod example_generator;
mod example_literal;
pub mod example_tables;

pub use example_context::ExampleContext;
pub use example_generator::generate_example;
pub use example_literal::ExampleLiteral;

#[cfg(test)]
mod tests;
