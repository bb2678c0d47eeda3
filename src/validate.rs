//! Structural checks over a loaded catalog.
//!
//! Problems are collected, never raised: the CLI decides whether a non-empty
//! report is fatal (`--validate`) or advisory (`--all`).

use crate::alias::ALIAS_MARKER;
use crate::catalog::{Catalog, Tool};

const REQUIRED_FIELDS: &[(&str, fn(&Tool) -> &str)] = &[
    ("name", |tool| tool.name.as_str()),
    ("category", |tool| tool.category.as_str()),
    ("description", |tool| tool.description.as_str()),
    ("image", |tool| tool.image.as_str()),
];

/// Report every structural problem in `catalog`, in tool order. Within a tool:
/// required fields, then the category reference, then aliases.
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    for (idx, tool) in catalog.tools().iter().enumerate() {
        for (field, value) in REQUIRED_FIELDS {
            if value(tool).trim().is_empty() {
                errors.push(format!("Tool {idx}: Missing required field '{field}'"));
            }
        }

        let label = tool_label(tool, idx);
        if !catalog.has_category(&tool.category) {
            errors.push(format!(
                "Tool {label}: Invalid category '{}'",
                tool.category
            ));
        }

        for alias in &tool.aliases {
            if !alias.starts_with(ALIAS_MARKER) {
                errors.push(format!(
                    "Tool {label}: Alias '{alias}' should start with '{ALIAS_MARKER}'"
                ));
            }
        }
    }

    errors
}

fn tool_label(tool: &Tool, idx: usize) -> String {
    if tool.name.trim().is_empty() {
        idx.to_string()
    } else {
        tool.name.clone()
    }
}
