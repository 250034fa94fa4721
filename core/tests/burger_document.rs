//! End-to-end checks over the compiled Burger Restaurant API document and
//! its emitted YAML representation.

use apidesc_core::{burger_document, burger_registry, compile, document_meta, emit, to_yaml};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn compiling_twice_yields_equal_documents() {
    let first = burger_document().unwrap();
    let second = burger_document().unwrap();
    assert_eq!(first, second);
}

#[test]
fn serializing_twice_yields_identical_bytes() {
    let document = burger_document().unwrap();
    assert_eq!(to_yaml(&document).unwrap(), to_yaml(&document).unwrap());

    let mut first = Vec::new();
    let mut second = Vec::new();
    emit(&document, &mut first).unwrap();
    emit(&document, &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn path_mapping_contains_exactly_the_declared_routes() {
    let document = burger_document().unwrap();
    let paths = document["paths"].as_object().unwrap();
    let keys: Vec<&str> = paths.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["/burgers", "/burgers/{id}", "/webhooks/burgers"]);

    let burger_methods: Vec<&str> = paths["/burgers"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(burger_methods, vec!["post"]);
    assert!(paths["/burgers/{id}"].get("get").is_some());
    assert!(paths["/webhooks/burgers"].get("post").is_some());
}

#[test]
fn components_list_only_the_registered_schema() {
    let document = burger_document().unwrap();
    let schemas = document["components"]["schemas"].as_object().unwrap();
    let names: Vec<&str> = schemas.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Burger"]);
}

#[test]
fn document_metadata_matches_declarations() {
    let document = burger_document().unwrap();
    assert_eq!(document["openapi"], json!("3.1.0"));
    assert_eq!(document["info"]["title"], json!("Burger Restaurant API"));
    assert_eq!(
        document["info"]["description"],
        json!("An API for managing burgers at a restaurant.")
    );
    assert_eq!(document["info"]["version"], json!("1.0.0"));
    assert_eq!(
        document["servers"],
        json!([{
            "url": "https://example.com",
            "description": "The production server."
        }])
    );
}

#[test]
fn get_burger_path_parameter_uses_the_id_schema() {
    let document = burger_document().unwrap();
    let params = document["paths"]["/burgers/{id}"]["get"]["parameters"]
        .as_array()
        .unwrap();
    assert_eq!(params.len(), 1);
    let param = params[0].as_object().unwrap();
    assert_eq!(param["name"], json!("id"));
    assert_eq!(param["in"], json!("path"));
    assert_eq!(param["required"], json!(true));
    // BurgerId is not component-registered, so the parameter schema is inline.
    assert_eq!(param["schema"]["type"], json!("integer"));
    assert_eq!(param["schema"]["minimum"], json!(1));
}

#[test]
fn emitted_yaml_round_trips_to_the_same_structure() {
    let document = burger_document().unwrap();
    let yaml = to_yaml(&document).unwrap();
    let parsed: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, document);
}

#[test]
fn redeclaring_create_burger_is_rejected() {
    use apidesc_core::{AppError, HttpMethod, Operation, Response};

    let mut registry = burger_registry().unwrap();
    let err = registry
        .declare_operation(
            Operation::new("createBurger", HttpMethod::Put, "/burgers/other")
                .with_response("200", Response::new("ok").with_schema("Burger")),
        )
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateOperationId(id) if id == "createBurger"));
}

#[test]
fn registry_compiles_against_any_valid_metadata() {
    let registry = burger_registry().unwrap();
    let document = compile(&registry, &document_meta()).unwrap();
    assert_eq!(document, burger_document().unwrap());
}
