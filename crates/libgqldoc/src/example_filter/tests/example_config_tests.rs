use crate::example_filter::ExampleConfig;
use crate::tests::test_utils;
use serde_json::json;

#[test]
fn deserializes_camel_case_entries_with_defaults() {
    let config: ExampleConfig = serde_json::from_value(json!({
        "room_stays": {
            "excludeQueryFields": ["first_guest", "maidNotes", "totalCount"],
            "excludeArguments": ["last", "before"],
            "overrideArguments": { "first": 15 },
            "excludeResponseFields": ["totalCount"]
        },
        "reservations": {
            "excludeArguments": ["after"]
        }
    })).expect("valid example config");

    let room_stays = config.get("room_stays").expect("entry is present");
    assert_eq!(room_stays.exclude_query_fields, vec!["first_guest", "maidNotes", "totalCount"]);
    assert_eq!(room_stays.override_arguments.get("first"), Some(&json!(15)));

    let reservations = config.get("reservations").expect("entry is present");
    assert_eq!(reservations.exclude_arguments, vec!["after"]);
    assert!(reservations.exclude_query_fields.is_empty());
    assert!(reservations.override_arguments.is_empty());

    assert_eq!(config.operation_names().collect::<Vec<_>>(), vec!["room_stays", "reservations"]);
    assert!(config.get("settings").is_none());
}

#[test]
fn unknown_operations_are_reported_not_rejected() {
    let schema = test_utils::hotel_schema();
    let config: ExampleConfig = serde_json::from_value(json!({
        "reservations": { "excludeArguments": ["last"] },
        "updateReservation": {},
        "room_stays": {}
    })).expect("valid example config");

    assert_eq!(config.unknown_operations(&schema), vec!["room_stays"]);
}
