/// Rebuilds `value` without any object key listed in `excluded_keys`,
/// descending into nested objects and arrays. Scalars are passed through.
pub(super) fn filter(
    value: &serde_json::Value,
    excluded_keys: &[String],
) -> serde_json::Value {
    match value {
        serde_json::Value::Array(items) => serde_json::Value::Array(
            items.iter()
                .map(|item| filter(item, excluded_keys))
                .collect(),
        ),

        serde_json::Value::Object(entries) => serde_json::Value::Object(
            entries.iter()
                .filter(|(key, _)| !excluded_keys.contains(key))
                .map(|(key, nested)| (key.clone(), filter(nested, excluded_keys)))
                .collect(),
        ),

        scalar => scalar.clone(),
    }
}
