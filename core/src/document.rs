#![deny(missing_docs)]

//! # Document Compiler
//!
//! Folds a [`Registry`] into a single OpenAPI 3.1 document value. The fold
//! is a pure function over the immutable registry; every map in the output
//! is insertion-ordered, so repeated compilations of the same registry are
//! structurally identical.

use crate::error::{AppError, AppResult};
use crate::operation::Operation;
use crate::registry::Registry;
use indexmap::IndexMap;
use serde_json::{json, Map, Value};

/// The OpenAPI version emitted at the document root.
pub const OPENAPI_VERSION: &str = "3.1.0";

/// One server entry for the document's `servers` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    /// Server URL.
    pub url: String,
    /// Optional server description.
    pub description: Option<String>,
}

impl Server {
    /// Creates a server entry with the required URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
        }
    }

    /// Sets the server description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Top-level API metadata required to compile a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    /// API title.
    pub title: String,
    /// API description.
    pub description: String,
    /// API version string.
    pub version: String,
    /// Server list; must be non-empty.
    pub servers: Vec<Server>,
}

impl DocumentMeta {
    /// Creates document metadata with the required fields and no servers.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            version: version.into(),
            servers: Vec::new(),
        }
    }

    /// Adds a server entry.
    pub fn with_server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Checks that every required piece of metadata is present.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.is_empty() {
            return Err(AppError::MissingMetadata("title".into()));
        }
        if self.description.is_empty() {
            return Err(AppError::MissingMetadata("description".into()));
        }
        if self.version.is_empty() {
            return Err(AppError::MissingMetadata("version".into()));
        }
        if self.servers.is_empty() {
            return Err(AppError::MissingMetadata("servers".into()));
        }
        Ok(())
    }
}

/// Compiles the registry into one OpenAPI document value.
///
/// Top-level keys are emitted in fixed order: `openapi`, `info`, `servers`,
/// `components`, `paths`. Operations are grouped by path string in
/// first-declaration order, then by method; a repeated (path, method) pair
/// is a [`AppError::DuplicateRoute`].
pub fn compile(registry: &Registry, meta: &DocumentMeta) -> AppResult<Value> {
    meta.validate()?;

    let mut doc = Map::new();
    doc.insert("openapi".to_string(), json!(OPENAPI_VERSION));

    let mut info = Map::new();
    info.insert("title".to_string(), json!(meta.title));
    info.insert("description".to_string(), json!(meta.description));
    info.insert("version".to_string(), json!(meta.version));
    doc.insert("info".to_string(), Value::Object(info));

    let servers: Vec<Value> = meta.servers.iter().map(server_value).collect();
    doc.insert("servers".to_string(), Value::Array(servers));

    let mut schemas = Map::new();
    for name in registry.components() {
        let entry = registry
            .schema(name)
            .ok_or_else(|| AppError::UnresolvedSchemaReference(name.clone()))?;
        schemas.insert(name.clone(), entry.to_value());
    }
    let mut components = Map::new();
    components.insert("schemas".to_string(), Value::Object(schemas));
    doc.insert("components".to_string(), Value::Object(components));

    doc.insert("paths".to_string(), Value::Object(build_paths(registry)?));

    Ok(Value::Object(doc))
}

fn build_paths(registry: &Registry) -> AppResult<Map<String, Value>> {
    // Group by path first, preserving first-declaration order for both the
    // path keys and the methods under each path.
    let mut grouped: IndexMap<String, Map<String, Value>> = IndexMap::new();

    for operation in registry.operations() {
        let method_key = operation.method.as_key();
        let path_item = grouped.entry(operation.path.clone()).or_default();
        if path_item.contains_key(method_key) {
            return Err(AppError::DuplicateRoute(format!(
                "{} {}",
                method_key, operation.path
            )));
        }
        path_item.insert(
            method_key.to_string(),
            build_operation(registry, operation)?,
        );
    }

    let mut paths = Map::new();
    for (path, item) in grouped {
        paths.insert(path, Value::Object(item));
    }
    Ok(paths)
}

fn build_operation(registry: &Registry, operation: &Operation) -> AppResult<Value> {
    let mut op = Map::new();
    op.insert("operationId".to_string(), json!(operation.operation_id));
    if let Some(summary) = &operation.summary {
        op.insert("summary".to_string(), json!(summary));
    }
    if let Some(desc) = &operation.description {
        op.insert("description".to_string(), json!(desc));
    }

    if !operation.path_params.is_empty() {
        let mut params = Vec::new();
        for param in &operation.path_params {
            let mut param_obj = Map::new();
            param_obj.insert("name".to_string(), json!(param.name));
            param_obj.insert("in".to_string(), json!("path"));
            if let Some(desc) = &param.description {
                param_obj.insert("description".to_string(), json!(desc));
            }
            param_obj.insert("required".to_string(), json!(true));
            param_obj.insert("schema".to_string(), registry.schema_value(&param.schema)?);
            params.push(Value::Object(param_obj));
        }
        op.insert("parameters".to_string(), Value::Array(params));
    }

    if let Some(body) = &operation.request_body {
        let mut body_obj = Map::new();
        body_obj.insert("description".to_string(), json!(body.description));
        body_obj.insert(
            "content".to_string(),
            json_content(registry.schema_value(&body.schema)?),
        );
        op.insert("requestBody".to_string(), Value::Object(body_obj));
    }

    let mut responses = Map::new();
    for (status, response) in &operation.responses {
        let mut response_obj = Map::new();
        response_obj.insert("description".to_string(), json!(response.description));
        if let Some(schema) = &response.schema {
            response_obj.insert(
                "content".to_string(),
                json_content(registry.schema_value(schema)?),
            );
        }
        responses.insert(status.clone(), Value::Object(response_obj));
    }
    op.insert("responses".to_string(), Value::Object(responses));

    Ok(Value::Object(op))
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn server_value(server: &Server) -> Value {
    let mut obj = Map::new();
    obj.insert("url".to_string(), json!(server.url));
    if let Some(desc) = &server.description {
        obj.insert("description".to_string(), json!(desc));
    }
    Value::Object(obj)
}
