use crate::navigation::OperationKind;
use indexmap::IndexMap;

/// Per-operation overrides of how many levels of nested fields are expanded
/// in an operation's generated example query. Operations not listed use the
/// build-wide default.
///
/// ```yaml
/// queries:
///   roomAccessKeys: 6
/// mutations:
///   updateReservation: 2
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FieldExpansionDepthConfig {
    pub queries: IndexMap<String, u32>,
    pub mutations: IndexMap<String, u32>,
}
impl FieldExpansionDepthConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth_for(&self, kind: OperationKind, operation_name: &str) -> Option<u32> {
        let overrides = match kind {
            OperationKind::Mutation => &self.mutations,
            OperationKind::Query => &self.queries,
        };
        overrides.get(operation_name).copied()
    }

    pub fn with_mutation(mut self, operation_name: impl Into<String>, depth: u32) -> Self {
        self.mutations.insert(operation_name.into(), depth);
        self
    }

    pub fn with_query(mut self, operation_name: impl Into<String>, depth: u32) -> Self {
        self.queries.insert(operation_name.into(), depth);
        self
    }
}
