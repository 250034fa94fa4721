#![deny(missing_docs)]

//! # Schema Definitions
//!
//! Value types describing resource shapes: field-level semantic types and
//! constraints, and named resource schemas built from ordered field lists.
//! Constraints are validated when a field joins a resource or registry, not
//! against runtime data.

use crate::error::{AppError, AppResult};
use serde_json::{json, Map, Value};
use std::rc::Rc;

/// Semantic type of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// JSON Schema `integer`.
    Integer,
    /// JSON Schema `number`.
    Number,
    /// JSON Schema `string`.
    String,
    /// JSON Schema `boolean`.
    Boolean,
}

impl FieldType {
    /// The JSON Schema `type` keyword value.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::String => "string",
            FieldType::Boolean => "boolean",
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Number)
    }
}

/// Describes one resource attribute: semantic type, declared constraints,
/// and documentation metadata.
///
/// Immutable once declared; resources share field definitions by `Rc`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// Semantic type of the field.
    pub ty: FieldType,
    /// Inclusive lower bound (numeric fields only).
    pub minimum: Option<i64>,
    /// Inclusive upper bound (numeric fields only).
    pub maximum: Option<i64>,
    /// Minimum length (string fields only).
    pub min_length: Option<u64>,
    /// Maximum length (string fields only).
    pub max_length: Option<u64>,
    /// Whether the field must be present in its resource. Defaults to true.
    pub required: bool,
    /// Human-readable description emitted into the document.
    pub description: Option<String>,
    /// Example value emitted into the document.
    pub example: Option<Value>,
}

impl FieldSchema {
    /// Creates a new required field of the given type with no constraints.
    pub fn new(ty: FieldType) -> Self {
        Self {
            ty,
            minimum: None,
            maximum: None,
            min_length: None,
            max_length: None,
            required: true,
            description: None,
            example: None,
        }
    }

    /// Shorthand for an integer field.
    pub fn integer() -> Self {
        Self::new(FieldType::Integer)
    }

    /// Shorthand for a string field.
    pub fn string() -> Self {
        Self::new(FieldType::String)
    }

    /// Sets the inclusive lower bound.
    pub fn with_minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets the inclusive upper bound.
    pub fn with_maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Sets the minimum length.
    pub fn with_min_length(mut self, min_length: u64) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the maximum length.
    pub fn with_max_length(mut self, max_length: u64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Marks the field as optional within its resource.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the field description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the example value.
    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Checks the declared constraints for internal consistency.
    ///
    /// `context` names the field in error messages.
    pub fn validate(&self, context: &str) -> AppResult<()> {
        if let (Some(min), Some(max)) = (self.minimum, self.maximum) {
            if min > max {
                return Err(AppError::ConstraintViolation(format!(
                    "field '{}': minimum {} exceeds maximum {}",
                    context, min, max
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(AppError::ConstraintViolation(format!(
                    "field '{}': minLength {} exceeds maxLength {}",
                    context, min, max
                )));
            }
        }
        if (self.minimum.is_some() || self.maximum.is_some()) && !self.ty.is_numeric() {
            return Err(AppError::ConstraintViolation(format!(
                "field '{}': value bounds declared on non-numeric type '{}'",
                context,
                self.ty.as_str()
            )));
        }
        if (self.min_length.is_some() || self.max_length.is_some()) && self.ty != FieldType::String
        {
            return Err(AppError::ConstraintViolation(format!(
                "field '{}': length bounds declared on non-string type '{}'",
                context,
                self.ty.as_str()
            )));
        }
        Ok(())
    }

    /// Renders the field as a JSON Schema fragment with fixed key order.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!(self.ty.as_str()));
        if let Some(desc) = &self.description {
            obj.insert("description".to_string(), json!(desc));
        }
        if let Some(min) = self.minimum {
            obj.insert("minimum".to_string(), json!(min));
        }
        if let Some(max) = self.maximum {
            obj.insert("maximum".to_string(), json!(max));
        }
        if let Some(min) = self.min_length {
            obj.insert("minLength".to_string(), json!(min));
        }
        if let Some(max) = self.max_length {
            obj.insert("maxLength".to_string(), json!(max));
        }
        if let Some(example) = &self.example {
            obj.insert("example".to_string(), example.clone());
        }
        Value::Object(obj)
    }
}

/// A named, ordered mapping of field name to [`FieldSchema`].
///
/// The reference name is used for cross-referencing within the emitted
/// document (`#/components/schemas/{name}`) when the resource is registered
/// as a reusable component.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSchema {
    /// Document-level reference name, unique within a registry.
    pub ref_name: String,
    /// Human-readable description.
    pub description: Option<String>,
    /// Ordered field list. Definitions are shared by `Rc`, so a derived
    /// variant sees edits to its base's fields.
    pub fields: Vec<(String, Rc<FieldSchema>)>,
}

impl ResourceSchema {
    /// Creates an empty resource with the given reference name.
    pub fn new(ref_name: impl Into<String>) -> Self {
        Self {
            ref_name: ref_name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Sets the resource description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field, validating its constraints and name uniqueness.
    pub fn with_field(self, name: impl Into<String>, field: FieldSchema) -> AppResult<Self> {
        self.with_shared_field(name, Rc::new(field))
    }

    /// Appends a field definition shared with another schema.
    pub fn with_shared_field(
        mut self,
        name: impl Into<String>,
        field: Rc<FieldSchema>,
    ) -> AppResult<Self> {
        let name = name.into();
        field.validate(&name)?;
        if self.fields.iter().any(|(existing, _)| *existing == name) {
            return Err(AppError::ConstraintViolation(format!(
                "resource '{}': duplicate field '{}'",
                self.ref_name, name
            )));
        }
        self.fields.push((name, field));
        Ok(self)
    }

    /// Derives a new resource by structural projection, excluding the named
    /// fields. The derived resource shares the remaining field definitions
    /// with this one by reference.
    pub fn without_fields(
        &self,
        ref_name: impl Into<String>,
        excluded: &[&str],
    ) -> AppResult<Self> {
        let ref_name = ref_name.into();
        for name in excluded {
            if !self.fields.iter().any(|(existing, _)| existing == name) {
                return Err(AppError::ConstraintViolation(format!(
                    "resource '{}': cannot exclude unknown field '{}'",
                    self.ref_name, name
                )));
            }
        }
        Ok(Self {
            ref_name,
            description: None,
            fields: self
                .fields
                .iter()
                .filter(|(name, _)| !excluded.contains(&name.as_str()))
                .cloned()
                .collect(),
        })
    }

    /// Renders the resource as a JSON Schema object with properties and the
    /// required-field list in declaration order.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!("object"));
        if let Some(desc) = &self.description {
            obj.insert("description".to_string(), json!(desc));
        }
        let mut properties = Map::new();
        for (name, field) in &self.fields {
            properties.insert(name.clone(), field.to_value());
        }
        obj.insert("properties".to_string(), Value::Object(properties));
        let required: Vec<Value> = self
            .fields
            .iter()
            .filter(|(_, field)| field.required)
            .map(|(name, _)| json!(name))
            .collect();
        if !required.is_empty() {
            obj.insert("required".to_string(), Value::Array(required));
        }
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_resource() -> ResourceSchema {
        ResourceSchema::new("Widget")
            .with_description("A widget.")
            .with_field("id", FieldSchema::integer().with_minimum(1))
            .and_then(|r| {
                r.with_field(
                    "label",
                    FieldSchema::string().with_max_length(20).optional(),
                )
            })
            .expect("sample resource is valid")
    }

    #[test]
    fn test_inconsistent_bounds_rejected() {
        let field = FieldSchema::integer().with_minimum(5).with_maximum(1);
        let err = ResourceSchema::new("Bad")
            .with_field("count", field)
            .unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation(_)));
    }

    #[test]
    fn test_length_bounds_only_on_strings() {
        let field = FieldSchema::integer().with_max_length(10);
        let err = ResourceSchema::new("Bad")
            .with_field("count", field)
            .unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation(_)));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = sample_resource()
            .with_field("id", FieldSchema::integer())
            .unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation(_)));
    }

    #[test]
    fn test_projection_shares_definitions() {
        let base = sample_resource();
        let derived = base.without_fields("WidgetCreate", &["id"]).unwrap();
        assert_eq!(derived.fields.len(), 1);
        let (_, base_label) = &base.fields[1];
        let (_, derived_label) = &derived.fields[0];
        assert!(Rc::ptr_eq(base_label, derived_label));
    }

    #[test]
    fn test_projection_unknown_field_rejected() {
        let err = sample_resource()
            .without_fields("WidgetCreate", &["missing"])
            .unwrap_err();
        assert!(matches!(err, AppError::ConstraintViolation(_)));
    }

    #[test]
    fn test_resource_rendering_order() {
        let value = sample_resource().to_value();
        let obj = value.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["type", "description", "properties", "required"]);
        let properties = obj["properties"].as_object().unwrap();
        let prop_keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(prop_keys, vec!["id", "label"]);
        assert_eq!(obj["required"], serde_json::json!(["id"]));
    }
}
