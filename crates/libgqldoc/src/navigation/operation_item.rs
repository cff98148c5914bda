use crate::introspection::IntrospectionField;
use crate::navigation::OperationKind;

/// A query or mutation (i.e. a root field) listed in the navigation tree.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationItem {
    pub(super) expansion_depth: Option<u32>,
    pub(super) field: IntrospectionField,
    pub(super) kind: OperationKind,
}
impl OperationItem {
    pub fn new(
        kind: OperationKind,
        field: IntrospectionField,
        expansion_depth: Option<u32>,
    ) -> Self {
        Self {
            expansion_depth,
            field,
            kind,
        }
    }

    /// The per-operation expansion depth override, if one was configured.
    pub fn expansion_depth_override(&self) -> Option<u32> {
        self.expansion_depth
    }

    pub fn field(&self) -> &IntrospectionField {
        &self.field
    }

    /// How deep nested fields should be expanded when rendering this
    /// operation's example: the configured override, or `default_depth`.
    ///
    /// Renderers pass the result straight into the example-generating call
    /// for this item.
    pub fn field_expansion_depth(&self, default_depth: u32) -> u32 {
        self.expansion_depth.unwrap_or(default_depth)
    }

    pub fn is_mutation(&self) -> bool {
        self.kind == OperationKind::Mutation
    }

    pub fn is_query(&self) -> bool {
        self.kind == OperationKind::Query
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.field.name.as_str()
    }
}

/// Wire shape consumed by the templates: the root field's own properties
/// plus the `isQuery`/`isMutation` flags and the optional depth override.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct OperationItemRepr<'a> {
    #[serde(flatten)]
    field: &'a IntrospectionField,
    is_query: bool,
    is_mutation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_expansion_depth: Option<u32>,
}

impl serde::Serialize for OperationItem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OperationItemRepr {
            field: &self.field,
            is_query: self.is_query(),
            is_mutation: self.is_mutation(),
            field_expansion_depth: self.expansion_depth,
        }.serialize(serializer)
    }
}
