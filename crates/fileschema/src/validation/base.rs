//! Base validation trait and check pipeline
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{Issue, PathSegment, ValidationError, ValidationResult};
use crate::value::Value;

/// Validation context carrying the location of the value being checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    /// Steps from the root value; empty at the root
    pub path: Vec<PathSegment>,
}

impl ValidationContext {
    /// Create a root context
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    /// Create a child context for an object key
    pub fn child<P: AsRef<str>>(&self, key: P) -> Self {
        let mut path = self.path.clone();
        path.push(PathSegment::Key(key.as_ref().to_string()));
        Self { path }
    }

    /// Create a child context for an array index
    pub fn child_index(&self, index: usize) -> Self {
        let mut path = self.path.clone();
        path.push(PathSegment::Index(index));
        Self { path }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// Base trait for schema validators
pub trait SchemaValidator {
    /// Validate a value located at the context's path
    fn validate_with_context(&self, input: &Value, context: &ValidationContext)
        -> ValidationResult<()>;

    /// Validate a root value
    fn validate(&self, input: &Value) -> ValidationResult<()> {
        self.validate_with_context(input, &ValidationContext::new())
    }

    /// Validate and hand the value back unchanged on success
    fn safe_parse(&self, input: Value) -> ValidationResult<Value> {
        self.validate(&input)?;
        Ok(input)
    }

    /// Collect all validation issues (non-failing)
    fn collect_issues(&self, input: &Value) -> Vec<Issue> {
        match self.validate(input) {
            Ok(()) => Vec::new(),
            Err(error) => error.issues,
        }
    }
}

/// A predicate paired with the issue it raises when the predicate fails
#[derive(Clone, Copy)]
pub(crate) struct Check {
    pub name: &'static str,
    pub predicate: fn(&Value) -> bool,
    pub issue: fn(&Value) -> Issue,
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish()
    }
}

/// Run checks in declared order; the first failing check ends the run
pub(crate) fn run_checks(
    checks: &[Check],
    input: &Value,
    context: &ValidationContext,
) -> ValidationResult<()> {
    for check in checks {
        if !(check.predicate)(input) {
            let issue = (check.issue)(input).at(context.path.clone());
            tracing::trace!(
                check = check.name,
                code = %issue.code,
                fatal = issue.is_fatal(),
                "Check failed"
            );
            return Err(ValidationError::from(issue));
        }
    }
    Ok(())
}
