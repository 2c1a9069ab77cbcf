//! Markdown templates for documentation generation
//!
//! Copyright (c) 2025 Fileschema Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Template for generating markdown documentation
pub struct Template;

impl Template {
    /// Generate header section
    pub fn header(title: &str, description: Option<&str>) -> String {
        let mut result = format!("# {}\n\n", title);

        if let Some(desc) = description {
            result.push_str(&format!("{}\n\n", desc));
        }

        result.push_str("---\n\n");
        result
    }

    /// Generate the field table header
    pub fn field_table_header() -> String {
        String::from("| Field | Kind | Type | Format | Description |\n|---|---|---|---|---|\n")
    }

    /// Generate one field table row
    pub fn field_row(name: &str, kind: &str, depiction: &Value) -> String {
        let cell = |key: &str| {
            depiction
                .get(key)
                .and_then(Value::as_str)
                .map(escape_cell)
                .unwrap_or_else(|| "-".to_string())
        };
        format!(
            "| `{}` | {} | `{}` | {} | {} |\n",
            name,
            kind,
            cell("type"),
            cell("format"),
            cell("description")
        )
    }

    /// Generate an example code block
    pub fn example(name: &str, example: &Value) -> String {
        let rendered = serde_json::to_string_pretty(example).unwrap_or_else(|_| "null".to_string());
        format!("### `{}`\n\n```json\n{}\n```\n\n", name, rendered)
    }

    /// Generate footer
    pub fn footer() -> String {
        String::from("---\n\n*Generated by fileschema*\n")
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
