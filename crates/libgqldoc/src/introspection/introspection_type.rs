use crate::introspection::IntrospectionField;
use crate::introspection::IntrospectionInputValue;
use crate::introspection::IntrospectionTypeRef;
use crate::introspection::TypeKind;

/// A named type of the schema (`__Type`).
///
/// Which of the optional lists are populated depends on `kind`, the same way
/// it does in the raw introspection JSON.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    pub kind: TypeKind,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<IntrospectionField>>,
    #[serde(default)]
    pub input_fields: Option<Vec<IntrospectionInputValue>>,
    #[serde(default)]
    pub interfaces: Option<Vec<IntrospectionTypeRef>>,
    #[serde(default)]
    pub enum_values: Option<Vec<IntrospectionEnumValue>>,
    #[serde(default)]
    pub possible_types: Option<Vec<IntrospectionTypeRef>>,
    #[serde(
        default,
        rename = "specifiedByURL",
        alias = "specifiedByUrl",
        skip_serializing_if = "Option::is_none",
    )]
    pub specified_by_url: Option<String>,
}
impl IntrospectionType {
    /// A type of the given kind with no description and no members.
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: None,
            fields: None,
            input_fields: None,
            interfaces: None,
            enum_values: None,
            possible_types: None,
            specified_by_url: None,
        }
    }

    /// Names that start with `__` are reserved for the introspection system
    /// itself (`__Schema`, `__Type`, ...).
    pub fn is_reserved(&self) -> bool {
        self.name.starts_with("__")
    }

    pub fn field(&self, name: &str) -> Option<&IntrospectionField> {
        self.fields.as_ref()?
            .iter()
            .find(|field| field.name == name)
    }

    pub fn input_field(&self, name: &str) -> Option<&IntrospectionInputValue> {
        self.input_fields.as_ref()?
            .iter()
            .find(|input_field| input_field.name == name)
    }
}

/// A value of an enum type (`__EnumValue`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}
