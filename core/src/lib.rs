#![deny(missing_docs)]

//! # API Description Core
//!
//! Library for compiling declarative resource and operation definitions
//! into a static OpenAPI 3.1 document and emitting it as YAML. The pipeline
//! is one straight line: a registry is fully constructed in memory, folded
//! into a single document value, and serialized to a destination.

/// Shared error types.
pub mod error;

/// Field and resource schema definitions.
pub mod schema;

/// HTTP operation definitions.
pub mod operation;

/// Schema & operation registry.
pub mod registry;

/// Document compilation (registry -> OpenAPI value).
pub mod document;

/// YAML serialization and emission.
pub mod emitter;

/// The concrete Burger Restaurant API declarations.
pub mod catalog;

pub use catalog::{burger_document, burger_registry, document_meta};
pub use document::{compile, DocumentMeta, Server, OPENAPI_VERSION};
pub use emitter::{emit, emit_to_path, to_yaml};
pub use error::{AppError, AppResult};
pub use operation::{HttpMethod, Operation, PathParam, RequestBody, Response};
pub use registry::{Registry, SchemaEntry};
pub use schema::{FieldSchema, FieldType, ResourceSchema};
