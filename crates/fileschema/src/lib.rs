//! Fileschema - schemas for values that carry file content
//!
//! This crate provides a "file" schema type with four representational
//! variants:
//! - **string**: the content is a text string (default)
//! - **buffer**: the content is a raw byte buffer
//! - **binary**: the content is either a byte buffer or a text string
//! - **base64**: the content is a base64-encoded text string
//!
//! ## Features
//!
//! - **Structured Issues**: every failure carries a code, a message and a path
//! - **Ordered Checks**: the type check runs first, format checks second, and
//!   the first failing check short-circuits
//! - **Metadata Tagging**: every file schema reports `kind = "File"` so
//!   downstream tooling can recognize file fields
//! - **Documentation**: OpenAPI-style depictions and markdown field tables
//! - **Batch Processing**: validate many candidates with one schema
//!
//! ## Quick Start
//!
//! ```rust
//! use fileschema::{file_schema, get_meta, FileVariant, SchemaValidator, Value};
//!
//! let schema = file_schema(FileVariant::Base64);
//! assert_eq!(get_meta(&schema, "kind"), Some(&serde_json::json!("File")));
//!
//! let data = schema.safe_parse(Value::from("aGVsbG8=")).unwrap();
//! assert_eq!(data, Value::from("aGVsbG8="));
//!
//! let error = schema.safe_parse(Value::from("~~~~")).unwrap_err();
//! assert_eq!(error.issues[0].message, "Does not match base64 encoding");
//! ```
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

pub mod documentation;
pub mod file;
pub mod metadata;
pub mod validation;
pub mod value;

// Re-export commonly used types for convenience
pub use file::{file_schema, FileSchema, FileVariant, VariantParseError, BASE64_PATTERN};
pub use metadata::{get_meta, HasMetadata, Metadata, FILE_KIND};
pub use validation::{
    validate_batch, BatchConfig, Issue, IssueCode, PathSegment, SchemaValidator,
    ValidationContext, ValidationError, ValidationResult,
};
pub use value::Value;
