use crate::introspection::IntrospectionTypeRef;

/// A field of an object or interface type (`__Field`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// An argument or input-object field (`__InputValue`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}
impl IntrospectionInputValue {
    /// Presents this input value as an argument-less field. Used when a
    /// directive is documented as if it were an object type whose fields are
    /// the directive's arguments.
    pub fn to_field(&self) -> IntrospectionField {
        IntrospectionField {
            name: self.name.clone(),
            description: self.description.clone(),
            args: vec![],
            type_ref: self.type_ref.clone(),
            is_deprecated: self.is_deprecated,
            deprecation_reason: self.deprecation_reason.clone(),
        }
    }
}
