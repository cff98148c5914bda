use crate::example_filter::ExampleConfig;
use crate::example_filter::ExampleFilter;
use crate::example_filter::OperationExampleConfig;
use crate::example_filter::tests::reservations_config;
use crate::example_filter::tests::strings;
use serde_json::json;

fn variables() -> serde_json::Map<String, serde_json::Value> {
    match json!({ "first": 20, "last": 15, "after": "eyJpZCI6MTAwfQ==" }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[test]
fn operation_without_config_is_unchanged() {
    let config = ExampleConfig::new();

    assert_eq!(
        ExampleFilter::new(&config).filter_variables(&variables(), "reservations"),
        variables(),
    );
}

#[test]
fn excluded_arguments_are_dropped_and_overrides_applied() {
    let mut overrides = serde_json::Map::new();
    overrides.insert("first".to_string(), json!(15));
    overrides.insert("unused".to_string(), json!(true));
    let config = reservations_config(OperationExampleConfig {
        exclude_arguments: strings(&["last"]),
        override_arguments: overrides,
        ..OperationExampleConfig::default()
    });

    let filtered = ExampleFilter::new(&config).filter_variables(&variables(), "reservations");

    assert_eq!(
        serde_json::Value::Object(filtered.clone()),
        json!({ "first": 15, "after": "eyJpZCI6MTAwfQ==" }),
    );
    assert_eq!(filtered.keys().collect::<Vec<_>>(), vec!["first", "after"]);
}

#[test]
fn exclusion_wins_over_override() {
    let mut overrides = serde_json::Map::new();
    overrides.insert("last".to_string(), json!(1));
    let config = reservations_config(OperationExampleConfig {
        exclude_arguments: strings(&["last"]),
        override_arguments: overrides,
        ..OperationExampleConfig::default()
    });

    let filtered = ExampleFilter::new(&config).filter_variables(&variables(), "reservations");

    assert!(!filtered.contains_key("last"));
}
