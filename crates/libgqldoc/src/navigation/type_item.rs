use crate::introspection::DirectiveLocation;
use crate::introspection::IntrospectionDirective;
use crate::introspection::IntrospectionType;
use crate::introspection::TypeKind;

/// A named type (or a directive presented as one) listed in the navigation
/// tree.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeItem {
    pub(super) locations: Vec<DirectiveLocation>,
    pub(super) type_: IntrospectionType,
}
impl TypeItem {
    pub fn new(type_: IntrospectionType) -> Self {
        Self {
            locations: vec![],
            type_,
        }
    }

    /// Presents a directive as an `OBJECT` whose fields are the directive's
    /// arguments.
    ///
    /// Only the client-executable locations are kept. When there are any,
    /// the description gets a trailing `**Locations:** A, B` paragraph.
    pub fn from_directive(directive: &IntrospectionDirective) -> Self {
        let locations = directive.client_executable_locations();

        let mut description = directive.description.clone().unwrap_or_default();
        if !locations.is_empty() {
            description.push_str("\n\n**Locations:** ");
            description.push_str(
                locations.iter()
                    .map(DirectiveLocation::name)
                    .collect::<Vec<_>>()
                    .join(", ")
                    .as_str(),
            );
        }

        let mut type_ = IntrospectionType::new(TypeKind::Object, directive.name.as_str());
        type_.description = Some(description);
        type_.fields = Some(
            directive.args.iter()
                .map(|arg| arg.to_field())
                .collect(),
        );

        Self {
            locations,
            type_,
        }
    }

    /// The client-executable locations of a directive item. Empty for
    /// ordinary types.
    pub fn directive_locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn introspection_type(&self) -> &IntrospectionType {
        &self.type_
    }

    pub fn kind(&self) -> TypeKind {
        self.type_.kind
    }

    pub fn name(&self) -> &str {
        self.type_.name.as_str()
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TypeItemRepr<'a> {
    #[serde(flatten)]
    type_: &'a IntrospectionType,
    is_type: bool,
    #[serde(skip_serializing_if = "<[DirectiveLocation]>::is_empty")]
    locations: &'a [DirectiveLocation],
}

impl serde::Serialize for TypeItem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TypeItemRepr {
            type_: &self.type_,
            is_type: true,
            locations: &self.locations,
        }.serialize(serializer)
    }
}
