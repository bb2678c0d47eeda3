//! Serde model of the `tools.yaml` document.
//!
//! Fields are deliberately lenient: every tool field defaults when absent so
//! malformed entries still load and surface through the validator instead of
//! aborting the parse.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Top-level catalog document. Missing keys load as empty sequences.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Tool {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Command name to shell template, in declaration order.
    #[serde(default)]
    pub commands: IndexMap<String, String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub command: String,
}

impl CatalogDocument {
    /// Parse a catalog document from YAML text. An empty document is an empty
    /// catalog rather than an error.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let document: Option<CatalogDocument> =
            serde_yaml::from_str(text).context("parsing catalog YAML")?;
        Ok(document.unwrap_or_default())
    }
}

/// Read and parse the catalog document at `path`.
pub fn load_document_from_path(path: &Path) -> Result<CatalogDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let document = CatalogDocument::from_yaml(&text)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    debug!(
        path = %path.display(),
        tools = document.tools.len(),
        categories = document.categories.len(),
        "loaded catalog document"
    );
    Ok(document)
}
