/// A statically known example value. Converted to a [`serde_json::Value`]
/// when handed to a caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExampleLiteral {
    Bool(bool),
    Float(f64),
    Int(i64),
    Str(&'static str),
    StrList(&'static [&'static str]),
}
impl ExampleLiteral {
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Self::Bool(value) => serde_json::Value::Bool(*value),
            Self::Float(value) => serde_json::Value::from(*value),
            Self::Int(value) => serde_json::Value::from(*value),
            Self::Str(value) => serde_json::Value::from(*value),
            Self::StrList(values) => serde_json::Value::from(
                values.iter()
                    .map(|value| serde_json::Value::from(*value))
                    .collect::<Vec<_>>(),
            ),
        }
    }
}
