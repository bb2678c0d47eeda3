//! End-to-end generation run behind the `toolbox-gen` binary.
//!
//! Order is fixed: load, validate (when asked), create the output
//! directory, then write each selected artifact. Validation failure aborts
//! a plain `--validate` run but is only reported under `--all`. Each
//! artifact is written independently; a write error stops the run without
//! touching artifacts already on disk.

use crate::catalog::Catalog;
use crate::compile::{CompileOutcome, compile_typst};
use crate::render::{Artifact, select_artifacts};
use crate::validate::validate_catalog;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Compiled PDF, relative to the working directory.
pub const PDF_FILE: &str = "docker-toolbox.pdf";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub catalog_path: PathBuf,
    pub output_dir: PathBuf,
    /// Base for the Typst source and the compiled PDF.
    pub work_dir: PathBuf,
    pub validate: bool,
    pub requested: Vec<Artifact>,
    pub all: bool,
    pub compile_timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    /// Standalone validation found problems; nothing was generated.
    ValidationFailed,
}

pub fn run_generation(options: &GenerateOptions) -> Result<RunStatus> {
    if !options.catalog_path.exists() {
        bail!("{} not found", options.catalog_path.display());
    }
    let catalog = Catalog::load(&options.catalog_path)?;
    info!(
        catalog = %options.catalog_path.display(),
        tools = catalog.tools().len(),
        "catalog loaded"
    );

    if options.validate || options.all {
        let errors = validate_catalog(&catalog);
        if errors.is_empty() {
            println!("[OK] Validation passed!");
        } else {
            println!("Validation errors:");
            for error in &errors {
                println!("  - {error}");
            }
            if !options.all {
                return Ok(RunStatus::ValidationFailed);
            }
        }
    }

    fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("creating output directory {}", options.output_dir.display()))?;

    for artifact in select_artifacts(&options.requested, options.all) {
        let path = write_artifact(artifact, &catalog, options)?;
        if artifact == Artifact::Typst {
            report_compile(&path, &options.work_dir.join(PDF_FILE), options.compile_timeout);
        }
    }

    println!("\n[OK] Generation complete!");
    Ok(RunStatus::Completed)
}

fn write_artifact(artifact: Artifact, catalog: &Catalog, options: &GenerateOptions) -> Result<PathBuf> {
    println!("Generating {}...", artifact.label());
    let path = artifact.output_path(&options.output_dir, &options.work_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    let text = artifact.render(catalog);
    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    if artifact.is_executable() {
        mark_executable(&path)?;
    }
    debug!(artifact = artifact.as_str(), path = %path.display(), "artifact written");
    println!("[OK] Generated: {}", path.display());
    Ok(path)
}

fn report_compile(source: &Path, pdf: &Path, timeout: Duration) {
    println!("Compiling Typst to PDF...");
    let outcome = compile_typst(source, pdf, timeout);
    debug!(?outcome, "typst compile finished");

    if outcome.is_compiled() {
        println!("[OK] Generated: {}", pdf.display());
        println!("    To view: open {}", pdf.display());
        return;
    }

    warn!(?outcome, "typst compilation skipped, PDF not produced");
    println!("[INFO] Typst source created at {}", source.display());
    match outcome {
        CompileOutcome::Missing { program } => {
            println!("       '{program}' not found. Install Typst to compile to PDF: https://github.com/typst/typst");
            println!(
                "       Or use Docker: docker run --rm -v ${{PWD}}:/work ghcr.io/typst/typst compile /work/docgen/docker-toolbox.typ /work/{PDF_FILE}"
            );
        }
        CompileOutcome::Failed { .. } => {
            println!(
                "       Run 'typst compile {} {}' to generate PDF",
                source.display(),
                pdf.display()
            );
        }
        CompileOutcome::TimedOut { after } => {
            println!("       Could not compile to PDF: timed out after {}s", after.as_secs_f32());
        }
        CompileOutcome::Error { message } => {
            println!("       Could not compile to PDF: {message}");
        }
        CompileOutcome::Compiled => {}
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)
        .with_context(|| format!("reading permissions of {}", path.display()))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .with_context(|| format!("marking {} executable", path.display()))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}
