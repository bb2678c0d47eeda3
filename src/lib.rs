pub mod alias;
pub mod catalog;
pub mod compile;
pub mod generate;
pub mod render;
pub mod validate;

pub use alias::{ALIAS_MARKER, COMMAND_SUFFIXES, resolve_alias};
pub use catalog::{Catalog, Category, CatalogDocument, Example, Tool};
pub use compile::{CompileOutcome, compile_typst};
pub use generate::{GenerateOptions, RunStatus, run_generation};
pub use render::{Artifact, select_artifacts};
pub use validate::validate_catalog;

use catalog::DEFAULT_CATALOG_FILE;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Env override naming the directory that holds `tools.yaml`.
pub const ROOT_ENV: &str = "TOOLBOX_ROOT";

fn holds_catalog(dir: &Path) -> bool {
    dir.join(DEFAULT_CATALOG_FILE).is_file()
}

/// Canonical `dir` when it is non-empty and contains the catalog.
fn catalog_dir(dir: &str) -> Option<PathBuf> {
    let dir = Path::new(dir);
    (!dir.as_os_str().is_empty() && holds_catalog(dir))
        .then(|| fs::canonicalize(dir).ok())
        .flatten()
}

/// Nearest ancestor of `start` (itself included) that contains the catalog.
fn nearest_catalog_ancestor(start: &Path) -> Option<PathBuf> {
    let start = fs::canonicalize(start).ok()?;
    start
        .ancestors()
        .find(|dir| holds_catalog(dir))
        .map(Path::to_path_buf)
}

/// Directory holding the catalog: `TOOLBOX_ROOT`, then the executable's
/// ancestors, then the build-time `TOOLBOX_ROOT_HINT`.
pub fn find_toolbox_root() -> Option<PathBuf> {
    let from_env = || env::var(ROOT_ENV).ok().and_then(|dir| catalog_dir(&dir));
    let from_exe = || {
        let exe = env::current_exe().ok()?;
        nearest_catalog_ancestor(exe.parent()?)
    };
    let from_build = || option_env!("TOOLBOX_ROOT_HINT").and_then(catalog_dir);

    from_env().or_else(from_exe).or_else(from_build)
}

/// Catalog path used when `--catalog` is not given. Falls back to
/// `./tools.yaml` so a missing catalog is reported against a concrete path.
pub fn default_catalog_path() -> PathBuf {
    find_toolbox_root()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_CATALOG_FILE)
}
