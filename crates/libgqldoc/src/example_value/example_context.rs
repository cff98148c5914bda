use crate::introspection::IntrospectionField;
use crate::introspection::IntrospectionInputValue;
use crate::introspection::IntrospectionType;

/// What an example value is being generated for.
///
/// At most one of `arg`, `input_field` and `field` is normally set. When
/// several are, the name used for lookups is taken from the first present of
/// `arg`, `input_field`, `field` (in that order).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExampleContext<'a> {
    /// Name of the underlying (unwrapped) GraphQL type of the value, e.g.
    /// `"String"` for a `[String!]!` field.
    pub underlying_type: Option<&'a str>,

    /// Name of the type the field, argument or input field belongs to.
    pub parent_type: Option<&'a str>,

    pub field: Option<&'a str>,
    pub arg: Option<&'a str>,
    pub input_field: Option<&'a str>,
}
impl<'a> ExampleContext<'a> {
    /// Context for a field of `parent`.
    pub fn for_field(
        parent: &'a IntrospectionType,
        field: &'a IntrospectionField,
    ) -> Self {
        Self {
            underlying_type: field.type_ref.underlying_name(),
            parent_type: Some(parent.name.as_str()),
            field: Some(field.name.as_str()),
            ..Self::default()
        }
    }

    /// Context for an argument of `field`, itself defined on `parent`.
    pub fn for_arg(
        parent: &'a IntrospectionType,
        field: &'a IntrospectionField,
        arg: &'a IntrospectionInputValue,
    ) -> Self {
        Self {
            underlying_type: arg.type_ref.underlying_name(),
            parent_type: Some(parent.name.as_str()),
            field: Some(field.name.as_str()),
            arg: Some(arg.name.as_str()),
            input_field: None,
        }
    }

    /// Context for an input field of the input object `parent`.
    pub fn for_input_field(
        parent: &'a IntrospectionType,
        input_field: &'a IntrospectionInputValue,
    ) -> Self {
        Self {
            underlying_type: input_field.type_ref.underlying_name(),
            parent_type: Some(parent.name.as_str()),
            input_field: Some(input_field.name.as_str()),
            ..Self::default()
        }
    }

    /// The name consulted by name-based example lookups.
    pub fn target_name(&self) -> Option<&'a str> {
        self.arg
            .or(self.input_field)
            .or(self.field)
    }
}
