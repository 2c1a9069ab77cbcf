//! Main documentation generator
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

use crate::documentation::depict::Documented;
use crate::documentation::templates::Template;
use crate::metadata::{get_meta, FILE_KIND, KIND_KEY};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Documentation generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Optional text placed under the title
    pub description: Option<String>,
    /// Include an examples section for fields with examples
    pub include_examples: bool,
    /// Include the footer
    pub include_footer: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            description: None,
            include_examples: true,
            include_footer: true,
        }
    }
}

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Generator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("Invalid title: {0}")]
    InvalidTitle(String),
    #[error("Duplicate field: {0}")]
    DuplicateField(String),
}

/// Main documentation generator
#[derive(Debug, Clone, Default)]
pub struct DocGenerator {
    config: GeneratorConfig,
}

impl DocGenerator {
    /// Create a new documentation generator
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Names of the fields whose schema is tagged as a file
    pub fn file_fields<'a>(fields: &[(&'a str, &dyn Documented)]) -> Vec<&'a str> {
        fields
            .iter()
            .filter(|(_, schema)| is_file(*schema))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Generate markdown documentation for named fields, in the given order
    pub fn generate(&self, title: &str, fields: &[(&str, &dyn Documented)]) -> GeneratorResult<String> {
        if title.trim().is_empty() {
            return Err(GeneratorError::InvalidTitle("title cannot be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for (name, _) in fields {
            if !seen.insert(*name) {
                return Err(GeneratorError::DuplicateField(name.to_string()));
            }
        }

        let mut doc = Template::header(title, self.config.description.as_deref());

        doc.push_str("## Fields\n\n");
        if fields.is_empty() {
            doc.push_str("No fields defined.\n\n");
        } else {
            doc.push_str(&Template::field_table_header());
            for (name, schema) in fields {
                let kind = get_meta(*schema, KIND_KEY)
                    .and_then(Value::as_str)
                    .unwrap_or("-");
                doc.push_str(&Template::field_row(name, kind, &schema.depiction()));
            }
            doc.push('\n');
        }

        let file_fields = Self::file_fields(fields);
        if !file_fields.is_empty() {
            doc.push_str("## File Uploads\n\n");
            doc.push_str("The following fields carry file content:\n\n");
            for name in &file_fields {
                doc.push_str(&format!("- `{}`\n", name));
            }
            doc.push('\n');
        }

        if self.config.include_examples {
            let mut examples = String::new();
            for (name, schema) in fields {
                for example in schema.metadata().examples() {
                    examples.push_str(&Template::example(name, example));
                }
            }
            if !examples.is_empty() {
                doc.push_str("## Examples\n\n");
                doc.push_str(&examples);
            }
        }

        if self.config.include_footer {
            doc.push_str(&Template::footer());
        }

        tracing::debug!(
            title = title,
            fields = fields.len(),
            file_fields = file_fields.len(),
            "Generated documentation"
        );

        Ok(doc)
    }
}

fn is_file(schema: &dyn Documented) -> bool {
    get_meta(schema, KIND_KEY).and_then(Value::as_str) == Some(FILE_KIND)
}
