//! OpenAPI-style depiction of file schemas
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

use crate::file::{FileSchema, FileVariant, BASE64_PATTERN};
use crate::metadata::HasMetadata;
use serde_json::{json, Value};

/// Schemas that can describe themselves for documentation
pub trait Documented: HasMetadata {
    /// Depiction of the accepted values as a JSON Schema fragment
    fn depiction(&self) -> Value;
}

impl Documented for FileSchema {
    fn depiction(&self) -> Value {
        depict(self)
    }
}

/// Depict a file schema
///
/// File content is always transported as a string: `format` is `file` for
/// plain text, `binary` for raw bytes and `byte` for base64.
pub fn depict(schema: &FileSchema) -> Value {
    let format = match schema.variant() {
        FileVariant::String => "file",
        FileVariant::Buffer | FileVariant::Binary => "binary",
        FileVariant::Base64 => "byte",
    };

    let mut depiction = json!({
        "type": "string",
        "format": format,
    });

    if schema.variant() == FileVariant::Base64 {
        depiction["pattern"] = json!(BASE64_PATTERN);
    }

    let metadata = schema.metadata();
    if let Some(description) = metadata.description() {
        depiction["description"] = json!(description);
    }
    if !metadata.examples().is_empty() {
        depiction["examples"] = Value::Array(metadata.examples().to_vec());
    }

    depiction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::file_schema;

    #[test]
    fn test_depict_formats() {
        assert_eq!(
            depict(&file_schema(FileVariant::String)),
            json!({"type": "string", "format": "file"})
        );
        assert_eq!(
            depict(&file_schema(FileVariant::Buffer)),
            json!({"type": "string", "format": "binary"})
        );
        assert_eq!(
            depict(&file_schema(FileVariant::Binary)),
            json!({"type": "string", "format": "binary"})
        );
        assert_eq!(
            depict(&file_schema(FileVariant::Base64)),
            json!({"type": "string", "format": "byte", "pattern": BASE64_PATTERN})
        );
    }

    #[test]
    fn test_depict_carries_metadata() {
        let schema = file_schema(FileVariant::Base64)
            .describe("Encoded logo")
            .example("aGVsbG8=");
        let depiction = schema.depiction();
        assert_eq!(depiction["description"], json!("Encoded logo"));
        assert_eq!(depiction["examples"], json!(["aGVsbG8="]));
    }
}
