use crate::example_filter::OperationExampleConfig;

pub(super) fn filter(
    variables: &serde_json::Map<String, serde_json::Value>,
    config: &OperationExampleConfig,
) -> serde_json::Map<String, serde_json::Value> {
    variables.iter()
        .filter(|(name, _)| !config.exclude_arguments.contains(name))
        .map(|(name, value)| {
            let value = config.override_arguments.get(name).unwrap_or(value);
            (name.clone(), value.clone())
        })
        .collect()
}
