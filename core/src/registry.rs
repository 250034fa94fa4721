#![deny(missing_docs)]

//! # Schema & Operation Registry
//!
//! Single place where every resource shape and every operation referencing
//! those shapes is declared. Cross-references are resolved at declaration
//! time, so a schema change propagates consistently to all operations using
//! it and a dangling reference never reaches compilation.

use crate::error::{AppError, AppResult};
use crate::operation::Operation;
use crate::schema::{FieldSchema, ResourceSchema};
use indexmap::IndexMap;
use serde_json::{json, Value};
use std::rc::Rc;

/// A declared schema entry: either a standalone field (scalar) schema or a
/// full resource schema.
#[derive(Debug, Clone)]
pub enum SchemaEntry {
    /// A named scalar schema, usable as a field or parameter type.
    Field(Rc<FieldSchema>),
    /// A named object schema.
    Resource(Rc<ResourceSchema>),
}

impl SchemaEntry {
    /// Renders the full (inline) JSON Schema value for the entry.
    pub fn to_value(&self) -> Value {
        match self {
            SchemaEntry::Field(field) => field.to_value(),
            SchemaEntry::Resource(resource) => resource.to_value(),
        }
    }
}

/// Registry of declared schemas, component registrations, and operations.
///
/// Fully constructed in memory before compilation; the compiler only reads
/// it.
#[derive(Debug, Default)]
pub struct Registry {
    schemas: IndexMap<String, SchemaEntry>,
    components: Vec<String>,
    operations: Vec<Operation>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a named scalar schema.
    pub fn declare_field(
        &mut self,
        name: impl Into<String>,
        field: Rc<FieldSchema>,
    ) -> AppResult<()> {
        let name = name.into();
        field.validate(&name)?;
        self.insert_schema(name, SchemaEntry::Field(field))
    }

    /// Declares a resource schema under its reference name.
    pub fn declare_resource(&mut self, resource: ResourceSchema) -> AppResult<()> {
        let name = resource.ref_name.clone();
        self.insert_schema(name, SchemaEntry::Resource(Rc::new(resource)))
    }

    fn insert_schema(&mut self, name: String, entry: SchemaEntry) -> AppResult<()> {
        if self.schemas.contains_key(&name) {
            return Err(AppError::ConstraintViolation(format!(
                "schema '{}' declared twice",
                name
            )));
        }
        self.schemas.insert(name, entry);
        Ok(())
    }

    /// Marks a declared schema as a reusable component.
    ///
    /// Only explicitly registered schemas appear in `components.schemas`;
    /// everything else is inlined where referenced.
    pub fn register_component(&mut self, name: &str) -> AppResult<()> {
        if !self.schemas.contains_key(name) {
            return Err(AppError::UnresolvedSchemaReference(name.to_string()));
        }
        if self.components.iter().any(|existing| existing == name) {
            return Err(AppError::ConstraintViolation(format!(
                "component '{}' registered twice",
                name
            )));
        }
        self.components.push(name.to_string());
        Ok(())
    }

    /// Declares an operation, checking identifier uniqueness and resolving
    /// every schema reference it makes.
    pub fn declare_operation(&mut self, operation: Operation) -> AppResult<()> {
        if self
            .operations
            .iter()
            .any(|existing| existing.operation_id == operation.operation_id)
        {
            return Err(AppError::DuplicateOperationId(
                operation.operation_id.clone(),
            ));
        }
        if operation.responses.is_empty() {
            return Err(AppError::ConstraintViolation(format!(
                "operation '{}' declares no responses",
                operation.operation_id
            )));
        }
        for (index, (status, _)) in operation.responses.iter().enumerate() {
            if operation.responses[..index]
                .iter()
                .any(|(existing, _)| existing == status)
            {
                return Err(AppError::ConstraintViolation(format!(
                    "operation '{}' declares status '{}' twice",
                    operation.operation_id, status
                )));
            }
        }
        for schema_ref in operation.schema_refs() {
            if !self.schemas.contains_key(schema_ref) {
                return Err(AppError::UnresolvedSchemaReference(schema_ref.to_string()));
            }
        }
        self.operations.push(operation);
        Ok(())
    }

    /// Declared operations, in declaration order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Component-registered schema names, in registration order.
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Looks up a declared schema entry by reference name.
    pub fn schema(&self, name: &str) -> Option<&SchemaEntry> {
        self.schemas.get(name)
    }

    /// Renders a schema reference at a use site: a `$ref` into
    /// `components.schemas` when the name is component-registered, the full
    /// inline value otherwise.
    pub fn schema_value(&self, name: &str) -> AppResult<Value> {
        let entry = self
            .schemas
            .get(name)
            .ok_or_else(|| AppError::UnresolvedSchemaReference(name.to_string()))?;
        if self.components.iter().any(|component| component == name) {
            return Ok(json!({ "$ref": format!("#/components/schemas/{}", name) }));
        }
        Ok(entry.to_value())
    }
}
