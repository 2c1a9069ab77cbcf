//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with specialized
//! rendering for check reports and validation issues.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use fileschema::validation::format_path;
use fileschema::{FileVariant, Issue};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Outcome of reading and validating one file
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub file: PathBuf,
    pub variant: FileVariant,
    pub encoding: String,
    /// Bytes read from disk
    pub size: usize,
    pub valid: bool,
    pub kind: Option<String>,
    pub issues: Vec<Issue>,
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a check report
    fn format_check_report(&self, report: &CheckReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // For human format, use pretty JSON as fallback
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_check_report(&self, report: &CheckReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_check_report_human(report)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        self.writeln(formatted.trim_end())
    }

    /// Write a check report
    pub fn check_report(&mut self, report: &CheckReport) -> Result<()> {
        if self.format == OutputFormat::Human {
            let headline = if report.valid {
                format!(
                    "✓ {} is valid {} file content",
                    report.file.display(),
                    report.variant
                )
            } else {
                format!(
                    "✗ {} is not valid {} file content",
                    report.file.display(),
                    report.variant
                )
            };
            if report.valid {
                self.success(&headline)?;
            } else {
                self.error(&headline)?;
            }
            if self.quiet && report.valid {
                return Ok(());
            }
        }

        let formatted = self.format.format_check_report(report)?;
        self.writeln(formatted.trim_end())
    }
}

/// Format a check report for human reading
fn format_check_report_human(report: &CheckReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "📄 File: {} ({} bytes read as {})\n",
        report.file.display(),
        report.size,
        report.encoding
    ));
    if let Some(ref kind) = report.kind {
        output.push_str(&format!("🏷  Kind: {}\n", kind));
    }

    if !report.issues.is_empty() {
        output.push_str(&format!("🔍 Issues ({}):\n", report.issues.len()));
        for issue in &report.issues {
            output.push_str(&format_issue_human(issue));
        }
    }

    output
}

/// Format a single issue for human reading
fn format_issue_human(issue: &Issue) -> String {
    let mut output = String::new();

    output.push_str(&format!("  • Code: {}\n", issue.code));
    output.push_str(&format!("    Path: {}\n", format_path(&issue.path)));
    output.push_str(&format!("    Message: {}\n", issue.message));
    if let Some(ref validation) = issue.validation {
        output.push_str(&format!("    Validation: {}\n", validation));
    }
    if issue.is_fatal() {
        output.push_str("    Fatal: yes\n");
    }
    output.push('\n');

    output
}

#[cfg(test)]
mod tests;
