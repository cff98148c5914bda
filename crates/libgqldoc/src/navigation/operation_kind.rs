/// The root operation type an [`OperationItem`](crate::navigation::OperationItem)
/// belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
}
