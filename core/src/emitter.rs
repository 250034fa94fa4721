#![deny(missing_docs)]

//! # Document Emitter
//!
//! Serializes a compiled document value to YAML and writes it to a
//! destination. The destination is a parameter (any `io::Write` sink or a
//! file path), so tests can emit into memory without touching the
//! filesystem. Writes are one-shot; failures surface as [`AppError::Io`]
//! with no retry.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Serializes the document to its YAML text representation.
///
/// The document value is built from insertion-ordered maps, so the output
/// is byte-identical across runs with unchanged input.
pub fn to_yaml(document: &Value) -> AppResult<String> {
    Ok(serde_yaml::to_string(document)?)
}

/// Writes the serialized document into the given sink.
pub fn emit<W: Write>(document: &Value, sink: &mut W) -> AppResult<()> {
    let yaml = to_yaml(document)?;
    sink.write_all(yaml.as_bytes())?;
    Ok(())
}

/// Writes the serialized document to a file path, creating parent
/// directories as needed.
pub fn emit_to_path(document: &Value, path: &Path) -> AppResult<()> {
    let yaml = to_yaml(document)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(AppError::Io)?;
        }
    }
    fs::write(path, yaml).map_err(AppError::Io)?;
    Ok(())
}
