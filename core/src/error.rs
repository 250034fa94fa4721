#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Every variant except `Io` and `Serialization` is detectable before any
/// I/O happens and aborts document construction immediately.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A declared schema constraint is internally inconsistent (e.g. min > max).
    #[from(ignore)]
    #[display("Constraint violation: {_0}")]
    ConstraintViolation(String),

    /// An operation identifier was declared more than once.
    #[from(ignore)]
    #[display("Duplicate operationId '{_0}'")]
    DuplicateOperationId(String),

    /// An operation references a schema that was never declared.
    #[from(ignore)]
    #[display("Unresolved schema reference '{_0}'")]
    UnresolvedSchemaReference(String),

    /// Two operations were declared for the same (path, method) pair.
    #[from(ignore)]
    #[display("Duplicate route: {_0}")]
    DuplicateRoute(String),

    /// Required document metadata (title, description, version, servers) is missing.
    #[from(ignore)]
    #[display("Missing metadata: {_0}")]
    MissingMetadata(String),

    /// Wrapper for standard IO errors raised while persisting the document.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for YAML serialization errors.
    #[display("Serialization Error: {_0}")]
    Serialization(serde_yaml::Error),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
