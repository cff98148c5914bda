use crate::introspection::AllTypesFilter;
use crate::introspection::IntrospectionDirective;
use crate::introspection::IntrospectionSchema;
use crate::introspection::IntrospectionType;

/// Owns a copy of an [`IntrospectionSchema`] and offers the queries and edits
/// needed while shaping it into documentation. The schema it was created from
/// is never touched.
#[derive(Clone, Debug)]
pub struct IntrospectionManipulator {
    schema: IntrospectionSchema,
}
impl IntrospectionManipulator {
    pub fn new(schema: &IntrospectionSchema) -> Self {
        Self {
            schema: schema.clone(),
        }
    }

    /// Named types in schema order, narrowed by `filter`.
    pub fn all_types(&self, filter: AllTypesFilter) -> Vec<&IntrospectionType> {
        let query_name = self.schema.query_type_name();
        let mutation_name = self.schema.mutation_type_name();
        let subscription_name = self.schema.subscription_type_name();
        let is_named = |root: Option<&str>, type_: &IntrospectionType| {
            root.is_some_and(|root_name| root_name == type_.name)
        };

        self.schema.types.iter()
            .filter(|type_| filter.include_reserved || !type_.is_reserved())
            .filter(|type_| filter.include_query || !is_named(query_name, type_))
            .filter(|type_| filter.include_mutation || !is_named(mutation_name, type_))
            .filter(|type_| {
                filter.include_subscription || !is_named(subscription_name, type_)
            })
            .collect()
    }

    pub fn directives(&self) -> &[IntrospectionDirective] {
        &self.schema.directives
    }

    pub fn into_schema(self) -> IntrospectionSchema {
        self.schema
    }

    pub fn mutation_type(&self) -> Option<&IntrospectionType> {
        self.schema.get_type(self.schema.mutation_type_name()?)
    }

    pub fn query_type(&self) -> Option<&IntrospectionType> {
        self.schema.get_type(self.schema.query_type_name()?)
    }

    /// Removes every field and input field flagged `isDeprecated` from every
    /// type. Returns how many were removed.
    pub fn remove_deprecated_fields(&mut self) -> usize {
        let deprecated: Vec<(String, String)> =
            self.schema.types.iter()
                .flat_map(|type_| {
                    let fields =
                        type_.fields.iter()
                            .flatten()
                            .filter(|field| field.is_deprecated)
                            .map(|field| field.name.as_str());
                    let input_fields =
                        type_.input_fields.iter()
                            .flatten()
                            .filter(|input_field| input_field.is_deprecated)
                            .map(|input_field| input_field.name.as_str());
                    fields.chain(input_fields)
                        .map(move |field_name| {
                            (type_.name.clone(), field_name.to_string())
                        })
                })
                .collect();

        let mut num_removed = 0;
        for (type_name, field_name) in &deprecated {
            if self.remove_field(type_name, field_name) {
                num_removed += 1;
            }
        }
        log::debug!("Removed {num_removed} deprecated fields.");
        num_removed
    }

    /// Removes the field (or input field) `field_name` from the type named
    /// `type_name`. Returns whether anything was removed.
    pub fn remove_field(&mut self, type_name: &str, field_name: &str) -> bool {
        let Some(type_) =
            self.schema.types.iter_mut()
                .find(|type_| type_.name == type_name) else {
            return false;
        };

        let mut removed = false;
        if let Some(fields) = type_.fields.as_mut() {
            let before = fields.len();
            fields.retain(|field| field.name != field_name);
            removed |= fields.len() != before;
        }
        if let Some(input_fields) = type_.input_fields.as_mut() {
            let before = input_fields.len();
            input_fields.retain(|input_field| input_field.name != field_name);
            removed |= input_fields.len() != before;
        }

        if removed {
            log::trace!("Removed field `{type_name}.{field_name}`.");
        }
        removed
    }

    pub fn schema(&self) -> &IntrospectionSchema {
        &self.schema
    }

    pub fn subscription_type(&self) -> Option<&IntrospectionType> {
        self.schema.get_type(self.schema.subscription_type_name()?)
    }
}
