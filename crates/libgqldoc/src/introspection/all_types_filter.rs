/// Controls which named types [`IntrospectionManipulator::all_types()`]
/// returns.
///
/// By default every type is returned except the reserved `__`-prefixed
/// introspection types.
///
/// [`IntrospectionManipulator::all_types()`]: crate::introspection::IntrospectionManipulator::all_types
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AllTypesFilter {
    pub include_query: bool,
    pub include_mutation: bool,
    pub include_subscription: bool,
    pub include_reserved: bool,
}
impl AllTypesFilter {
    /// Every non-reserved type that is not one of the operation root types.
    pub fn without_root_types() -> Self {
        Self {
            include_query: false,
            include_mutation: false,
            include_subscription: false,
            include_reserved: false,
        }
    }
}
impl std::default::Default for AllTypesFilter {
    fn default() -> Self {
        Self {
            include_query: true,
            include_mutation: true,
            include_subscription: true,
            include_reserved: false,
        }
    }
}
