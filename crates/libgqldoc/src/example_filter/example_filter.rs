use crate::example_filter::query_filter;
use crate::example_filter::response_filter;
use crate::example_filter::variables_filter;
use crate::example_filter::ExampleConfig;

/// Applies an [`ExampleConfig`] to the generated examples of an operation.
///
/// Every method is the identity for operations without a config entry.
#[derive(Clone, Copy, Debug)]
pub struct ExampleFilter<'config> {
    config: &'config ExampleConfig,
}
impl<'config> ExampleFilter<'config> {
    pub fn new(config: &'config ExampleConfig) -> Self {
        Self {
            config,
        }
    }

    /// Removes excluded arguments and fields from a serialized Query example.
    pub fn filter_query(&self, query: &str, operation_name: &str) -> String {
        match self.config.get(operation_name) {
            Some(config) => query_filter::filter(query, operation_name, config),
            None => query.to_string(),
        }
    }

    /// Filters the Variables example: excluded arguments are dropped and
    /// overridden arguments take their configured value.
    pub fn filter_variables(
        &self,
        variables: &serde_json::Map<String, serde_json::Value>,
        operation_name: &str,
    ) -> serde_json::Map<String, serde_json::Value> {
        match self.config.get(operation_name) {
            Some(config) => variables_filter::filter(variables, config),
            None => variables.clone(),
        }
    }

    /// Removes excluded keys, at any depth, from the Response example.
    pub fn filter_response(
        &self,
        response: &serde_json::Value,
        operation_name: &str,
    ) -> serde_json::Value {
        match self.config.get(operation_name) {
            Some(config) if !config.exclude_response_fields.is_empty() => {
                response_filter::filter(response, &config.exclude_response_fields)
            },
            _ => response.clone(),
        }
    }
}
