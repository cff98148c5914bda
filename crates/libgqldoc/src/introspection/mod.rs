//! Serde model of a standard GraphQL introspection result, plus the small
//! manipulation API the navigation builder needs on top of it.

mod all_types_filter;
mod directive_location;
mod introspection_directive;
mod introspection_field;
mod introspection_load_error;
mod introspection_manipulator;
mod introspection_schema;
mod introspection_type;
mod introspection_type_ref;
mod type_kind;

pub use all_types_filter::AllTypesFilter;
pub use directive_location::DirectiveLocation;
pub use introspection_directive::IntrospectionDirective;
pub use introspection_field::IntrospectionField;
pub use introspection_field::IntrospectionInputValue;
pub use introspection_load_error::IntrospectionLoadError;
pub use introspection_manipulator::IntrospectionManipulator;
pub use introspection_schema::IntrospectionSchema;
pub use introspection_schema::RootTypeRef;
pub use introspection_type::IntrospectionEnumValue;
pub use introspection_type::IntrospectionType;
pub use introspection_type_ref::IntrospectionTypeRef;
pub use type_kind::TypeKind;

#[cfg(test)]
mod tests;
