use crate::introspection::IntrospectionSchema;
use indexmap::IndexMap;
use std::collections::HashSet;

/// What to hide or override in the examples of one operation.
///
/// ```yaml
/// room_stays:
///   excludeQueryFields: [first_guest, maidNotes, totalCount]
///   excludeArguments: [last, before]
///   overrideArguments: { first: 15 }
///   excludeResponseFields: [totalCount]
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationExampleConfig {
    /// Fields (with their whole selection set) removed from the Query example.
    pub exclude_query_fields: Vec<String>,

    /// Arguments removed from the Query example (both the variable signature
    /// and the invocation) and from the Variables example.
    pub exclude_arguments: Vec<String>,

    /// Values substituted for the generated ones in the Variables example.
    pub override_arguments: serde_json::Map<String, serde_json::Value>,

    /// Keys removed, at any depth, from the Response example.
    pub exclude_response_fields: Vec<String>,
}

/// Example filtering configuration keyed by operation (root field) name.
/// Operations without an entry are shown unfiltered.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ExampleConfig {
    operations: IndexMap<String, OperationExampleConfig>,
}
impl ExampleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, operation_name: &str) -> Option<&OperationExampleConfig> {
        self.operations.get(operation_name)
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    /// Names configured here that are neither a query nor a mutation of
    /// `schema`. Filtering silently ignores such entries; this lets callers
    /// report them.
    pub fn unknown_operations(&self, schema: &IntrospectionSchema) -> Vec<&str> {
        let known: HashSet<&str> =
            [schema.query_type_name(), schema.mutation_type_name()]
                .into_iter()
                .flatten()
                .filter_map(|root_type_name| schema.get_type(root_type_name))
                .flat_map(|root_type| root_type.fields.iter().flatten())
                .map(|field| field.name.as_str())
                .collect();

        self.operation_names()
            .filter(|name| !known.contains(name))
            .collect()
    }

    pub fn with_operation(
        mut self,
        operation_name: impl Into<String>,
        config: OperationExampleConfig,
    ) -> Self {
        self.operations.insert(operation_name.into(), config);
        self
    }
}
