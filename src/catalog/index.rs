//! Indexed view of a loaded tool catalog.
//!
//! Categories are keyed by id for direct lookup while keeping their
//! declaration order for iteration. Nothing is validated here; unknown
//! category references are the validator's concern.

use crate::catalog::{CatalogDocument, Category, Tool, load_document_from_path};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
/// Catalog tools plus an insertion-ordered category index.
pub struct Catalog {
    categories: IndexMap<String, Category>,
    tools: Vec<Tool>,
}

/// Tools sharing one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection<'a> {
    pub id: &'a str,
    /// `None` when the id does not resolve to a declared category.
    pub category: Option<&'a Category>,
    pub tools: Vec<&'a Tool>,
}

impl CategorySection<'_> {
    /// Display name for the section, falling back to the raw id.
    pub fn name(&self) -> &str {
        self.category
            .map(|category| category.name.as_str())
            .unwrap_or(self.id)
    }
}

impl Catalog {
    /// Load the catalog document at `path` and index it.
    pub fn load(path: &Path) -> Result<Self> {
        let document =
            load_document_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Ok(Self::from_document(document))
    }

    /// Build the index. A repeated category id keeps its first position and
    /// the last declaration's contents.
    pub fn from_document(document: CatalogDocument) -> Self {
        let mut categories = IndexMap::new();
        for category in document.categories {
            categories.insert(category.id.clone(), category);
        }
        Self {
            categories,
            tools: document.tools,
        }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.categories.contains_key(id)
    }

    /// Tools grouped by category, sections ordered by each category's first
    /// appearance among the tools.
    pub fn sections(&self) -> Vec<CategorySection<'_>> {
        let mut grouped: IndexMap<&str, Vec<&Tool>> = IndexMap::new();
        for tool in &self.tools {
            grouped.entry(tool.category.as_str()).or_default().push(tool);
        }
        grouped
            .into_iter()
            .map(|(id, tools)| CategorySection {
                id,
                category: self.category(id),
                tools,
            })
            .collect()
    }

    /// Declared categories that have at least one tool, in declaration order,
    /// with the tools referencing each.
    pub fn populated_categories(&self) -> Vec<(&Category, Vec<&Tool>)> {
        self.categories()
            .filter_map(|category| {
                let tools: Vec<&Tool> = self
                    .tools
                    .iter()
                    .filter(|tool| tool.category == category.id)
                    .collect();
                (!tools.is_empty()).then_some((category, tools))
            })
            .collect()
    }
}
