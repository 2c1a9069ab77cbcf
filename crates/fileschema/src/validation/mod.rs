//! Validation module for file schemas
//!
//! This module provides the validation surface shared by every schema:
//! structured issues, the `SchemaValidator` trait, path-carrying contexts,
//! and batch validation of many candidates against one schema.
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod error;

// Re-export commonly used types
pub use base::{SchemaValidator, ValidationContext};
pub use error::{format_path, Issue, IssueCode, PathSegment, ValidationError, ValidationResult};

use crate::value::Value;

/// Validation configuration for batch operations
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Whether to stop on the first failing candidate
    pub fail_fast: bool,
    /// Maximum number of issues to collect (0 = unlimited)
    pub max_errors: usize,
}

impl BatchConfig {
    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of issues to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Batch validation of several candidates against one schema
///
/// Each candidate is checked under its index, so issue paths start with the
/// position of the failing candidate.
pub fn validate_batch<S>(schema: &S, values: &[Value], config: &BatchConfig) -> ValidationResult<()>
where
    S: SchemaValidator + ?Sized,
{
    let mut errors = ValidationError::new();
    let context = ValidationContext::new();

    for (i, value) in values.iter().enumerate() {
        let item_context = context.child_index(i);
        match schema.validate_with_context(value, &item_context) {
            Ok(()) => continue,
            Err(error) => {
                errors.extend(error);

                if config.fail_fast {
                    break;
                }

                if config.max_errors > 0 && errors.len() >= config.max_errors {
                    errors.issues.truncate(config.max_errors);
                    break;
                }
            }
        }
    }

    tracing::debug!(
        candidates = values.len(),
        issues = errors.len(),
        "Batch validation finished"
    );

    errors.into_result()
}
