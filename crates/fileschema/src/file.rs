//! File schema factory
//!
//! A file schema declares that a value must be interpretable as file content.
//! The variant picks the representation: a text string, a raw byte buffer,
//! either of the two, or a base64-encoded string.
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

use crate::metadata::{HasMetadata, Metadata, DESCRIPTION_KEY, FILE_KIND};
use crate::validation::base::{run_checks, Check};
use crate::validation::{Issue, SchemaValidator, ValidationContext, ValidationResult};
use crate::value::Value;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Base64 character set with mandatory padding; the empty string matches
pub const BASE64_PATTERN: &str =
    r"^([0-9a-zA-Z+/]{4})*(([0-9a-zA-Z+/]{2}==)|([0-9a-zA-Z+/]{3}=))?$";

static BASE64_REGEX: OnceLock<Regex> = OnceLock::new();

fn base64_regex() -> &'static Regex {
    BASE64_REGEX.get_or_init(|| Regex::new(BASE64_PATTERN).expect("base64 pattern is a valid regex"))
}

/// Representation of the file content a schema accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileVariant {
    /// Text string
    #[default]
    String,
    /// Raw byte buffer
    Buffer,
    /// Byte buffer or text string
    Binary,
    /// Base64-encoded text string
    Base64,
}

impl FileVariant {
    pub const ALL: [FileVariant; 4] = [
        FileVariant::String,
        FileVariant::Buffer,
        FileVariant::Binary,
        FileVariant::Base64,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileVariant::String => "string",
            FileVariant::Buffer => "buffer",
            FileVariant::Binary => "binary",
            FileVariant::Base64 => "base64",
        }
    }

    /// Checks applied by this variant, in evaluation order
    fn checks(self) -> &'static [Check] {
        match self {
            FileVariant::String => STRING_CHECKS,
            FileVariant::Buffer => BUFFER_CHECKS,
            FileVariant::Binary => BINARY_CHECKS,
            FileVariant::Base64 => BASE64_CHECKS,
        }
    }
}

impl fmt::Display for FileVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown variant name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown file variant '{0}': expected one of string, buffer, binary, base64")]
pub struct VariantParseError(pub String);

impl FromStr for FileVariant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" => Ok(FileVariant::String),
            "buffer" => Ok(FileVariant::Buffer),
            "binary" => Ok(FileVariant::Binary),
            "base64" => Ok(FileVariant::Base64),
            _ => Err(VariantParseError(s.to_string())),
        }
    }
}

fn is_string(value: &Value) -> bool {
    value.is_string()
}

fn is_buffer(value: &Value) -> bool {
    value.is_buffer()
}

fn is_buffer_or_string(value: &Value) -> bool {
    value.is_buffer() || value.is_string()
}

fn is_base64(value: &Value) -> bool {
    value.as_str().is_some_and(|s| base64_regex().is_match(s))
}

fn expected_string(value: &Value) -> Issue {
    Issue::invalid_type("string", value.type_name())
}

fn expected_buffer(_: &Value) -> Issue {
    Issue::custom("Expected Buffer").fatal()
}

fn expected_buffer_or_string(_: &Value) -> Issue {
    Issue::custom("Expected Buffer or string").fatal()
}

fn not_base64(_: &Value) -> Issue {
    Issue::invalid_string("regex", "Does not match base64 encoding")
}

const STRING_TYPE: Check = Check {
    name: "string_type",
    predicate: is_string,
    issue: expected_string,
};

const STRING_CHECKS: &[Check] = &[STRING_TYPE];

const BUFFER_CHECKS: &[Check] = &[Check {
    name: "buffer_type",
    predicate: is_buffer,
    issue: expected_buffer,
}];

const BINARY_CHECKS: &[Check] = &[Check {
    name: "binary_type",
    predicate: is_buffer_or_string,
    issue: expected_buffer_or_string,
}];

const BASE64_CHECKS: &[Check] = &[
    STRING_TYPE,
    Check {
        name: "base64_format",
        predicate: is_base64,
        issue: not_base64,
    },
];

/// Schema accepting file content in one representation
///
/// Schemas are immutable: builder methods and the deprecated variant
/// methods return new schemas.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSchema {
    variant: FileVariant,
    metadata: Metadata,
}

/// Create a file schema for the given variant
///
/// # Examples
///
/// ```rust
/// use fileschema::{file_schema, FileVariant, SchemaValidator, Value};
///
/// let schema = file_schema(FileVariant::Buffer);
/// assert!(schema.validate(&Value::from(vec![0x89u8, 0x50])).is_ok());
///
/// let error = schema.validate(&Value::from("123")).unwrap_err();
/// assert_eq!(error.issues[0].message, "Expected Buffer");
/// ```
pub fn file_schema(variant: FileVariant) -> FileSchema {
    FileSchema::new(variant)
}

impl FileSchema {
    pub fn new(variant: FileVariant) -> Self {
        Self {
            variant,
            metadata: Metadata::with_kind(FILE_KIND),
        }
    }

    pub fn variant(&self) -> FileVariant {
        self.variant
    }

    /// Attach a human-readable description
    pub fn describe<D: Into<String>>(mut self, description: D) -> Self {
        self.metadata
            .insert(DESCRIPTION_KEY, serde_json::Value::String(description.into()));
        self
    }

    /// Attach an example value for documentation
    pub fn example<E: Into<serde_json::Value>>(mut self, example: E) -> Self {
        self.metadata.push_example(example.into());
        self
    }

    #[deprecated(note = "use `file_schema(FileVariant::String)` instead")]
    pub fn string(&self) -> Self {
        self.with_variant(FileVariant::String, "string")
    }

    #[deprecated(note = "use `file_schema(FileVariant::Buffer)` instead")]
    pub fn buffer(&self) -> Self {
        self.with_variant(FileVariant::Buffer, "buffer")
    }

    #[deprecated(note = "use `file_schema(FileVariant::Binary)` instead")]
    pub fn binary(&self) -> Self {
        self.with_variant(FileVariant::Binary, "binary")
    }

    #[deprecated(note = "use `file_schema(FileVariant::Base64)` instead")]
    pub fn base64(&self) -> Self {
        self.with_variant(FileVariant::Base64, "base64")
    }

    fn with_variant(&self, variant: FileVariant, method: &str) -> Self {
        tracing::warn!(
            from = %self.variant,
            to = %variant,
            "FileSchema::{}() is deprecated, use file_schema(FileVariant::{:?}) instead",
            method,
            variant
        );
        Self {
            variant,
            metadata: self.metadata.clone(),
        }
    }
}

impl Default for FileSchema {
    fn default() -> Self {
        Self::new(FileVariant::default())
    }
}

impl HasMetadata for FileSchema {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl SchemaValidator for FileSchema {
    fn validate_with_context(
        &self,
        input: &Value,
        context: &ValidationContext,
    ) -> ValidationResult<()> {
        tracing::trace!(variant = %self.variant, input = %input, "Validating file content");
        run_checks(self.variant.checks(), input, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::get_meta;
    use serde_json::json;

    #[test]
    fn test_default_is_string() {
        let schema = FileSchema::default();
        assert_eq!(schema.variant(), FileVariant::String);
        assert_eq!(get_meta(&schema, "kind"), Some(&json!("File")));
    }

    #[test]
    fn test_variant_parse() {
        for variant in FileVariant::ALL {
            assert_eq!(variant.as_str().parse::<FileVariant>(), Ok(variant));
        }
        assert_eq!("BASE64".parse::<FileVariant>(), Ok(FileVariant::Base64));

        let error = "stream".parse::<FileVariant>().unwrap_err();
        assert!(error.to_string().contains("'stream'"));
    }

    #[test]
    fn test_variant_serde() {
        assert_eq!(serde_json::to_value(FileVariant::Base64).unwrap(), json!("base64"));
        let variant: FileVariant = serde_json::from_value(json!("binary")).unwrap();
        assert_eq!(variant, FileVariant::Binary);
    }

    #[test]
    fn test_base64_pattern() {
        for valid in ["", "TWFu", "bGVhc3VyZS4=", "c3VyZS4=", "YWJjZA=="] {
            assert!(is_base64(&Value::from(valid)), "{} should match", valid);
        }
        for invalid in ["~~~~", "MTIz!", "MTI", "MT===", "MTIz\n456", "YW Jj"] {
            assert!(!is_base64(&Value::from(invalid)), "{} should not match", invalid);
        }
    }

    #[test]
    fn test_check_order_for_base64() {
        let names: Vec<_> = FileVariant::Base64.checks().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["string_type", "base64_format"]);
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_methods_rebuild() {
        let original = FileSchema::default().describe("Upload");
        let buffer = original.buffer();

        assert_eq!(buffer.variant(), FileVariant::Buffer);
        assert_eq!(original.variant(), FileVariant::String);
        assert_eq!(buffer.metadata().kind(), Some(FILE_KIND));
        assert_eq!(buffer.metadata().description(), Some("Upload"));

        assert_eq!(original.string().variant(), FileVariant::String);
        assert_eq!(original.binary().variant(), FileVariant::Binary);
        assert_eq!(original.base64().variant(), FileVariant::Base64);
    }

    #[test]
    fn test_builders_keep_kind() {
        let schema = file_schema(FileVariant::Base64)
            .describe("Encoded logo")
            .example("aGVsbG8=");
        assert_eq!(schema.metadata().kind(), Some("File"));
        assert_eq!(schema.metadata().examples(), &[json!("aGVsbG8=")]);
    }
}
