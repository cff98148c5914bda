use crate::introspection::DirectiveLocation;
use crate::introspection::IntrospectionInputValue;

/// A directive declared by the schema (`__Directive`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionDirective {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub locations: Vec<DirectiveLocation>,
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(default)]
    pub is_repeatable: bool,
}
impl IntrospectionDirective {
    /// The subset of [`Self::locations`] a client can use, in declaration
    /// order.
    pub fn client_executable_locations(&self) -> Vec<DirectiveLocation> {
        self.locations.iter()
            .copied()
            .filter(DirectiveLocation::is_client_executable)
            .collect()
    }
}
