mod example_config_tests;
mod variables_filter_tests;

use crate::example_filter::ExampleConfig;
use crate::example_filter::OperationExampleConfig;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Config for the `reservations` operation used throughout these tests.
fn reservations_config(operation: OperationExampleConfig) -> ExampleConfig {
    ExampleConfig::new().with_operation("reservations", operation)
}
