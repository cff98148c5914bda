use crate::introspection::IntrospectionDirective;
use crate::introspection::IntrospectionLoadError;
use crate::introspection::IntrospectionType;
use std::path::Path;

type Result<T> = std::result::Result<T, IntrospectionLoadError>;

/// The `{ name }` object used by `queryType`, `mutationType` and
/// `subscriptionType`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RootTypeRef {
    pub name: String,
}

/// The `__schema` object of an introspection result.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub query_type: Option<RootTypeRef>,
    #[serde(default)]
    pub mutation_type: Option<RootTypeRef>,
    #[serde(default)]
    pub subscription_type: Option<RootTypeRef>,
    #[serde(default)]
    pub types: Vec<IntrospectionType>,
    #[serde(default)]
    pub directives: Vec<IntrospectionDirective>,
}

/// The envelopes an introspection result is commonly stored in: the raw
/// `{"data": {"__schema": ...}}` HTTP response, or just its `data`.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum IntrospectionEnvelope {
    Response {
        data: SchemaEnvelope,
    },
    Data(SchemaEnvelope),
}

#[derive(serde::Deserialize)]
struct SchemaEnvelope {
    #[serde(rename = "__schema")]
    schema: IntrospectionSchema,
}

impl IntrospectionSchema {
    /// Parses an introspection result given either as
    /// `{"__schema": {...}}` or as `{"data": {"__schema": {...}}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let envelope: IntrospectionEnvelope = serde_json::from_str(json)?;
        Ok(match envelope {
            IntrospectionEnvelope::Response { data } => data.schema,
            IntrospectionEnvelope::Data(data) => data.schema,
        })
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let json = std::fs::read_to_string(file_path).map_err(|err| {
            IntrospectionLoadError::ReadError {
                file_path: file_path.to_path_buf(),
                err,
            }
        })?;
        Self::from_json_str(json.as_str())
    }

    pub fn get_type(&self, name: &str) -> Option<&IntrospectionType> {
        self.types.iter().find(|type_| type_.name == name)
    }

    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type.as_ref().map(|root| root.name.as_str())
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_ref().map(|root| root.name.as_str())
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_ref().map(|root| root.name.as_str())
    }
}
