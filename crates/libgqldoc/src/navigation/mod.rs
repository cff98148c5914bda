//! Shapes an introspection result into the navigation/content tree walked by
//! the documentation templates:
//!
//! ```text
//! Operations            (hidden in content)
//!   Queries
//!   Mutations
//! Types                 (hidden in content)
//!   Objects, Input objects, Interfaces, Enums, Unions, Scalars
//! Directives
//! ```
//!
//! Groups without items are left out.

mod field_expansion_depth_config;
mod navigation_builder;
mod navigation_item;
mod navigation_node;
mod operation_item;
mod operation_kind;
mod type_item;

pub use field_expansion_depth_config::FieldExpansionDepthConfig;
pub use navigation_builder::build_navigation;
pub use navigation_builder::NavigationBuilder;
pub use navigation_item::NavigationItem;
pub use navigation_node::NavigationNode;
pub use operation_item::OperationItem;
pub use operation_kind::OperationKind;
pub use type_item::TypeItem;
