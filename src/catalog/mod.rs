//! Tool catalog wiring.
//!
//! This module wraps the `tools.yaml` catalog on disk so the validator and
//! every renderer read one loaded snapshot. Types in `model` mirror the YAML
//! fields; callers use `Catalog` for ordered category lookups and the
//! per-category grouping views the renderers need.

pub mod index;
pub mod model;

pub use index::Catalog;
pub use model::{Category, CatalogDocument, Example, Tool, load_document_from_path};

/// Default file name of the catalog, resolved against the toolbox root.
pub const DEFAULT_CATALOG_FILE: &str = "tools.yaml";

/// Reserved command key for a tool's primary invocation.
pub const DEFAULT_COMMAND: &str = "default";
