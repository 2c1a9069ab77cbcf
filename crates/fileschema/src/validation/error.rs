//! Validation issue and error types
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// The runtime type does not match the required primitive type
    InvalidType,
    /// The value is a string but fails a string format check
    InvalidString,
    /// A structural check that has no built-in primitive equivalent
    Custom,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::InvalidType => "invalid_type",
            IssueCode::InvalidString => "invalid_string",
            IssueCode::Custom => "custom",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step from the root value to a nested value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Render a path in `$.key[0]` notation; the root is `$`
pub fn format_path(path: &[PathSegment]) -> String {
    let mut out = String::from("$");
    for segment in path {
        match segment {
            PathSegment::Key(key) => {
                out.push('.');
                out.push_str(key);
            }
            PathSegment::Index(index) => {
                out.push_str(&format!("[{}]", index));
            }
        }
    }
    out
}

/// A single structured validation failure
///
/// Optional members are omitted from the serialized form when absent, so a
/// serialized issue carries exactly the members relevant to its code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    pub message: String,
    pub path: Vec<PathSegment>,
    /// Name of the failed string validation (e.g. `"regex"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
    /// Set when no further checks may run for this value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatal: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

impl Issue {
    /// Primitive type mismatch: `Expected <expected>, received <received>`
    pub fn invalid_type<E, R>(expected: E, received: R) -> Self
    where
        E: Into<String>,
        R: Into<String>,
    {
        let expected = expected.into();
        let received = received.into();
        Self {
            code: IssueCode::InvalidType,
            message: format!("Expected {}, received {}", expected, received),
            path: Vec::new(),
            validation: None,
            fatal: None,
            expected: Some(expected),
            received: Some(received),
        }
    }

    /// String format failure for the named validation
    pub fn invalid_string<V, M>(validation: V, message: M) -> Self
    where
        V: Into<String>,
        M: Into<String>,
    {
        Self {
            code: IssueCode::InvalidString,
            message: message.into(),
            path: Vec::new(),
            validation: Some(validation.into()),
            fatal: None,
            expected: None,
            received: None,
        }
    }

    /// Custom structural failure
    pub fn custom<M: Into<String>>(message: M) -> Self {
        Self {
            code: IssueCode::Custom,
            message: message.into(),
            path: Vec::new(),
            validation: None,
            fatal: None,
            expected: None,
            received: None,
        }
    }

    /// Mark the issue fatal
    pub fn fatal(mut self) -> Self {
        self.fatal = Some(true);
        self
    }

    /// Place the issue at the given path
    pub fn at(mut self, path: Vec<PathSegment>) -> Self {
        self.path = path;
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal.unwrap_or(false)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] at '{}': {}", self.code, format_path(&self.path), self.message)
    }
}

/// Validation failure carrying one or more issues in check order
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed with {} issue(s)", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  - {}", issue)?;
        }
        Ok(())
    }
}

impl ValidationError {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Append an issue
    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Append every issue from another error
    pub fn extend(&mut self, other: ValidationError) {
        self.issues.extend(other.issues);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Ok if no issues were collected, Err otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationError {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Issue> for ValidationError {
    fn from(issue: Issue) -> Self {
        Self { issues: vec![issue] }
    }
}

impl From<Vec<Issue>> for ValidationError {
    fn from(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
