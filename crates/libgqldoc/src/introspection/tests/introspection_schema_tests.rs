use crate::introspection::DirectiveLocation;
use crate::introspection::IntrospectionLoadError;
use crate::introspection::IntrospectionSchema;
use crate::introspection::IntrospectionTypeRef;
use crate::introspection::TypeKind;
use crate::tests::test_utils;

type Result<T> = std::result::Result<T, IntrospectionLoadError>;

#[test]
fn parses_http_response_envelope() -> Result<()> {
    let schema = IntrospectionSchema::from_json_str(test_utils::HOTEL_SCHEMA_JSON)?;

    assert_eq!(schema.query_type_name(), Some("Query"));
    assert_eq!(schema.mutation_type_name(), Some("Mutation"));
    assert_eq!(schema.subscription_type_name(), None);
    assert_eq!(schema.types.len(), 10);
    assert_eq!(schema.directives.len(), 3);

    Ok(())
}

#[test]
fn parses_bare_schema_envelope() -> Result<()> {
    let schema = IntrospectionSchema::from_json_str(r#"{
        "__schema": {
            "queryType": { "name": "Query" },
            "types": [{ "kind": "SCALAR", "name": "Date" }],
            "directives": []
        }
    }"#)?;

    assert_eq!(schema.query_type_name(), Some("Query"));
    let date = schema.get_type("Date").expect("Date type is present");
    assert_eq!(date.kind, TypeKind::Scalar);
    assert!(date.fields.is_none());

    Ok(())
}

#[test]
fn missing_schema_object_is_an_error() {
    let result = IntrospectionSchema::from_json_str(r#"{ "data": { "types": [] } }"#);

    assert!(matches!(result, Err(IntrospectionLoadError::JsonError(_))));
}

#[test]
fn missing_file_is_a_read_error() {
    let result = IntrospectionSchema::from_file("/definitely/not/here.json");

    assert!(matches!(result, Err(IntrospectionLoadError::ReadError { .. })));
}

#[test]
fn underlying_type_unwraps_every_wrapper() {
    let type_ref = IntrospectionTypeRef::non_null(
        IntrospectionTypeRef::list_of(
            IntrospectionTypeRef::non_null(
                IntrospectionTypeRef::named(TypeKind::Scalar, "ID"),
            ),
        ),
    );

    assert_eq!(type_ref.underlying_name(), Some("ID"));
    assert_eq!(type_ref.underlying().kind, TypeKind::Scalar);
}

#[test]
fn deprecation_flags_are_read() -> Result<()> {
    let schema = IntrospectionSchema::from_json_str(test_utils::HOTEL_SCHEMA_JSON)?;
    let reservation = schema.get_type("Reservation").expect("type is present");
    let old_code = reservation.field("oldCode").expect("field is present");

    assert!(old_code.is_deprecated);
    assert_eq!(old_code.deprecation_reason.as_deref(), Some("Use `code`."));

    let input = schema.get_type("ReservationInput").expect("type is present");
    assert!(input.input_field("legacyNotes").expect("input field is present").is_deprecated);
    assert!(!input.input_field("notes").expect("input field is present").is_deprecated);

    Ok(())
}

#[test]
fn client_executable_locations_keep_declaration_order() -> Result<()> {
    let schema = IntrospectionSchema::from_json_str(test_utils::HOTEL_SCHEMA_JSON)?;
    let cached = schema.directives.iter()
        .find(|directive| directive.name == "cached")
        .expect("directive is present");

    assert_eq!(
        cached.client_executable_locations(),
        vec![DirectiveLocation::Query, DirectiveLocation::Field],
    );
    assert!(!DirectiveLocation::Subscription.is_client_executable());
    assert!(DirectiveLocation::VariableDefinition.is_client_executable());

    Ok(())
}

#[test]
fn unrecognized_directive_location_still_loads() -> Result<()> {
    let schema = IntrospectionSchema::from_json_str(r#"{
        "__schema": {
            "queryType": { "name": "Query" },
            "types": [],
            "directives": [{
                "name": "trace",
                "locations": ["FIELD", "EXPERIMENTAL_LOCATION"],
                "args": []
            }]
        }
    }"#)?;

    let trace = &schema.directives[0];
    assert_eq!(
        trace.locations,
        vec![DirectiveLocation::Field, DirectiveLocation::Unknown],
    );
    assert!(!DirectiveLocation::Unknown.is_client_executable());
    assert_eq!(trace.client_executable_locations(), vec![DirectiveLocation::Field]);

    Ok(())
}
