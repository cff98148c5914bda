use crate::navigation::NavigationNode;
use crate::navigation::OperationItem;
use crate::navigation::TypeItem;

/// An entry in a [`NavigationNode`]'s `items`: either a nested group or a
/// leaf item.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum NavigationItem {
    Group(NavigationNode),
    Operation(OperationItem),
    Type(TypeItem),
}
impl NavigationItem {
    pub fn as_group(&self) -> Option<&NavigationNode> {
        if let Self::Group(node) = self {
            Some(node)
        } else {
            None
        }
    }

    pub fn as_operation(&self) -> Option<&OperationItem> {
        if let Self::Operation(operation) = self {
            Some(operation)
        } else {
            None
        }
    }

    pub fn as_type(&self) -> Option<&TypeItem> {
        if let Self::Type(type_item) = self {
            Some(type_item)
        } else {
            None
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Group(node) => node.name.as_str(),
            Self::Operation(operation) => operation.name(),
            Self::Type(type_item) => type_item.name(),
        }
    }
}
