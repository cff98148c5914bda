use crate::introspection::AllTypesFilter;
use crate::introspection::IntrospectionManipulator;
use crate::introspection::IntrospectionSchema;
use crate::introspection::IntrospectionType;
use crate::introspection::TypeKind;
use crate::navigation::FieldExpansionDepthConfig;
use crate::navigation::NavigationItem;
use crate::navigation::NavigationNode;
use crate::navigation::OperationItem;
use crate::navigation::OperationKind;
use crate::navigation::TypeItem;

/// Kinds of the `Types` sub-groups, in display order.
const TYPE_GROUPS: &[(&str, TypeKind)] = &[
    ("Objects", TypeKind::Object),
    ("Input objects", TypeKind::InputObject),
    ("Interfaces", TypeKind::Interface),
    ("Enums", TypeKind::Enum),
    ("Unions", TypeKind::Union),
    ("Scalars", TypeKind::Scalar),
];

/// Builds the navigation tree for one documentation run.
///
/// ```ignore
/// let nav = NavigationBuilder::new(&schema)
///     .depth_config(&config.field_expansion_depth_overrides)
///     .build();
/// ```
///
/// The source schema is left untouched: deprecated fields are stripped from
/// a private copy.
pub struct NavigationBuilder<'schema> {
    depth_config: Option<&'schema FieldExpansionDepthConfig>,
    schema: &'schema IntrospectionSchema,
}
impl<'schema> NavigationBuilder<'schema> {
    pub fn new(schema: &'schema IntrospectionSchema) -> Self {
        Self {
            depth_config: None,
            schema,
        }
    }

    pub fn depth_config(mut self, depth_config: &'schema FieldExpansionDepthConfig) -> Self {
        self.depth_config = Some(depth_config);
        self
    }

    pub fn build(self) -> Vec<NavigationNode> {
        let mut manipulator = IntrospectionManipulator::new(self.schema);
        manipulator.remove_deprecated_fields();

        let queries = self.operation_items(
            OperationKind::Query,
            manipulator.query_type(),
        );
        let mutations = self.operation_items(
            OperationKind::Mutation,
            manipulator.mutation_type(),
        );
        let operations = NavigationNode::new("Operations")
            .hide_in_content(true)
            .items(non_empty_groups(vec![
                NavigationNode::section("Queries", queries),
                NavigationNode::section("Mutations", mutations),
            ]));

        let other_types = manipulator.all_types(AllTypesFilter::without_root_types());
        let types = NavigationNode::new("Types")
            .hide_in_content(true)
            .items(non_empty_groups(
                TYPE_GROUPS.iter()
                    .map(|(group_name, kind)| {
                        NavigationNode::section(
                            *group_name,
                            type_items(&other_types, *kind),
                        )
                    })
                    .collect(),
            ));

        let directives = NavigationNode::new("Directives")
            .make_content_section(true)
            .items(
                manipulator.directives().iter()
                    .filter(|directive| {
                        directive.locations.iter()
                            .any(|location| location.is_client_executable())
                    })
                    .map(|directive| NavigationItem::Type(TypeItem::from_directive(directive)))
                    .collect(),
            );

        let nav: Vec<NavigationNode> =
            [operations, types, directives].into_iter()
                .filter(|node| !node.is_empty())
                .collect();
        log::debug!(
            "Built navigation with top-level groups: {}.",
            nav.iter()
                .map(|node| node.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        );
        nav
    }

    fn operation_items(
        &self,
        kind: OperationKind,
        root_type: Option<&IntrospectionType>,
    ) -> Vec<NavigationItem> {
        let Some(root_type) = root_type else {
            return vec![];
        };

        root_type.fields.iter()
            .flatten()
            .map(|field| {
                let expansion_depth = self.depth_config.and_then(|depth_config| {
                    depth_config.depth_for(kind, field.name.as_str())
                });
                if let Some(depth) = expansion_depth {
                    log::trace!(
                        "Using field expansion depth {depth} for `{}`.",
                        field.name,
                    );
                }
                NavigationItem::Operation(OperationItem::new(kind, field.clone(), expansion_depth))
            })
            .collect()
    }
}

/// Shorthand for `NavigationBuilder::new(schema).depth_config(depth_config).build()`.
pub fn build_navigation(
    schema: &IntrospectionSchema,
    depth_config: &FieldExpansionDepthConfig,
) -> Vec<NavigationNode> {
    NavigationBuilder::new(schema)
        .depth_config(depth_config)
        .build()
}

fn non_empty_groups(groups: Vec<NavigationNode>) -> Vec<NavigationItem> {
    groups.into_iter()
        .filter(|node| !node.is_empty())
        .map(NavigationItem::Group)
        .collect()
}

fn type_items(types: &[&IntrospectionType], kind: TypeKind) -> Vec<NavigationItem> {
    types.iter()
        .filter(|type_| type_.kind == kind)
        .map(|type_| NavigationItem::Type(TypeItem::new((*type_).clone())))
        .collect()
}
