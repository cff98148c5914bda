use crate::introspection::TypeKind;

/// A (possibly wrapped) reference to a type, as found in the `type` of a field
/// or argument: e.g. `[ID!]!` is
/// `NON_NULL(LIST(NON_NULL(SCALAR "ID")))`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}
impl IntrospectionTypeRef {
    /// A reference to a named (unwrapped) type.
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    pub fn list_of(inner: IntrospectionTypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn non_null(inner: IntrospectionTypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// The innermost type reference once every `LIST`/`NON_NULL` wrapper has
    /// been peeled off.
    pub fn underlying(&self) -> &IntrospectionTypeRef {
        let mut current = self;
        while current.kind.is_wrapper()
            && let Some(inner) = current.of_type.as_deref() {
            current = inner;
        }
        current
    }

    /// The name of the [underlying](Self::underlying) type.
    pub fn underlying_name(&self) -> Option<&str> {
        self.underlying().name.as_deref()
    }
}
