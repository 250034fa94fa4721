#![deny(missing_docs)]

//! # Burger Catalog
//!
//! The concrete declarations for the Burger Restaurant API: the `Burger`
//! resource, its identifier and create variant, the three operations over
//! them, and the document metadata. Everything downstream (CLI, tests)
//! starts from this registry.

use crate::document::{compile, DocumentMeta, Server};
use crate::error::AppResult;
use crate::operation::{HttpMethod, Operation, PathParam, RequestBody, Response};
use crate::registry::Registry;
use crate::schema::{FieldSchema, ResourceSchema};
use serde_json::{json, Value};
use std::rc::Rc;

/// Builds the registry holding the burger schemas and operations.
pub fn burger_registry() -> AppResult<Registry> {
    let mut registry = Registry::new();

    let burger_id = Rc::new(
        FieldSchema::integer()
            .with_minimum(1)
            .with_description("The unique identifier of the burger.")
            .with_example(json!(1)),
    );

    let burger = ResourceSchema::new("Burger")
        .with_description("A burger served at the restaurant.")
        .with_shared_field("id", burger_id.clone())?
        .with_field(
            "name",
            FieldSchema::string()
                .with_min_length(1)
                .with_max_length(50)
                .with_description("The name of the burger.")
                .with_example(json!("Veggie Burger")),
        )?
        .with_field(
            "description",
            FieldSchema::string()
                .with_max_length(255)
                .optional()
                .with_description("The description of the burger.")
                .with_example(json!("A delicious bean burger with avocado.")),
        )?;

    let burger_create = burger
        .without_fields("BurgerCreate", &["id"])?
        .with_description("A burger to create.");

    registry.declare_field("BurgerId", burger_id)?;
    registry.declare_resource(burger)?;
    registry.declare_resource(burger_create)?;
    registry.register_component("Burger")?;

    registry.declare_operation(
        Operation::new("createBurger", HttpMethod::Post, "/burgers")
            .with_summary("Create a new burger")
            .with_description("Creates a new burger in the database.")
            .with_request_body(RequestBody::new("The burger to create.", "BurgerCreate"))
            .with_response(
                "201",
                Response::new("The burger was created successfully.").with_schema("Burger"),
            ),
    )?;

    registry.declare_operation(
        Operation::new("getBurger", HttpMethod::Get, "/burgers/{id}")
            .with_summary("Get a burger")
            .with_description("Gets a burger from the database.")
            .with_path_param(PathParam::new("id", "BurgerId"))
            .with_response(
                "200",
                Response::new("The burger was retrieved successfully.").with_schema("Burger"),
            ),
    )?;

    registry.declare_operation(
        Operation::new("createBurgerWebhook", HttpMethod::Post, "/webhooks/burgers")
            .with_summary("New burger webhook")
            .with_description("A webhook that is called when a new burger is created.")
            .with_request_body(RequestBody::new("The burger that was created.", "Burger"))
            .with_response("200", Response::new("The webhook was processed successfully.")),
    )?;

    Ok(registry)
}

/// Document metadata for the Burger Restaurant API.
pub fn document_meta() -> DocumentMeta {
    DocumentMeta::new(
        "Burger Restaurant API",
        "An API for managing burgers at a restaurant.",
        "1.0.0",
    )
    .with_server(Server::new("https://example.com").with_description("The production server."))
}

/// Compiles the full Burger Restaurant API document.
pub fn burger_document() -> AppResult<Value> {
    let registry = burger_registry()?;
    compile(&registry, &document_meta())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_burger_component_fields() {
        let document = burger_document().unwrap();
        let burger = document["components"]["schemas"]["Burger"]
            .as_object()
            .unwrap();
        let props: Vec<&str> = burger["properties"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(props, vec!["id", "name", "description"]);
        assert_eq!(burger["required"], json!(["id", "name"]));
    }

    #[test]
    fn test_create_variant_excludes_id() {
        let document = burger_document().unwrap();
        let body_schema =
            &document["paths"]["/burgers"]["post"]["requestBody"]["content"]["application/json"]
                ["schema"];
        // BurgerCreate is not component-registered, so it is inlined.
        assert!(body_schema.get("$ref").is_none());
        let props = body_schema["properties"].as_object().unwrap();
        assert!(!props.contains_key("id"));
        assert!(props.contains_key("name"));
        assert!(props.contains_key("description"));
    }

    #[test]
    fn test_read_paths_reference_burger_component() {
        let document = burger_document().unwrap();
        let ref_value = json!({ "$ref": "#/components/schemas/Burger" });
        assert_eq!(
            document["paths"]["/burgers/{id}"]["get"]["responses"]["200"]["content"]
                ["application/json"]["schema"],
            ref_value
        );
        assert_eq!(
            document["paths"]["/webhooks/burgers"]["post"]["requestBody"]["content"]
                ["application/json"]["schema"],
            ref_value
        );
    }

    #[test]
    fn test_webhook_response_has_no_body() {
        let document = burger_document().unwrap();
        let response = &document["paths"]["/webhooks/burgers"]["post"]["responses"]["200"];
        assert_eq!(
            response["description"],
            json!("The webhook was processed successfully.")
        );
        assert!(response.get("content").is_none());
    }
}
