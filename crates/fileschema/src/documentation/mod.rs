//! Schema documentation generation
//!
//! This module turns file schemas into OpenAPI-style depictions and markdown
//! field tables. File fields are recognized through their `kind` metadata
//! only, never by inspecting validation logic.
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

pub mod depict;
pub mod generator;
pub mod templates;

pub use depict::{depict, Documented};
pub use generator::{DocGenerator, GeneratorConfig, GeneratorError, GeneratorResult};
pub use templates::Template;

/// Create a documentation generator with default configuration
pub fn create_doc_generator() -> DocGenerator {
    DocGenerator::new()
}

/// Generate markdown documentation for a set of named fields
pub fn generate_docs(title: &str, fields: &[(&str, &dyn Documented)]) -> GeneratorResult<String> {
    create_doc_generator().generate(title, fields)
}
