//! Artifact registry and shared rendering helpers.
//!
//! Each artifact maps to one pure renderer (`&Catalog -> String`) and one
//! fixed output location. Binaries should select artifacts through
//! `Artifact` rather than matching on file names or flag strings.

pub mod bash;
pub mod markdown;
pub mod powershell;
pub mod typst;

use crate::alias::resolve_alias;
use crate::catalog::{Catalog, DEFAULT_COMMAND, Tool};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    Markdown,
    PowerShellInstaller,
    BashInstaller,
    Typst,
}

/// Where an artifact lands relative to the run's directories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputBase {
    OutputDir,
    WorkDir,
}

impl Artifact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Artifact::Markdown => "markdown",
            Artifact::PowerShellInstaller => "powershell",
            Artifact::BashInstaller => "bash",
            Artifact::Typst => "typst",
        }
    }

    /// Progress label used in the CLI report.
    pub fn label(&self) -> &'static str {
        match self {
            Artifact::Markdown => "markdown documentation",
            Artifact::PowerShellInstaller => "PowerShell installer",
            Artifact::BashInstaller => "Bash installer",
            Artifact::Typst => "Typst documentation",
        }
    }

    /// Path of the artifact relative to its `OutputBase`.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Artifact::Markdown => "docker-dev-tools.md",
            Artifact::PowerShellInstaller => "install-interactive.ps1",
            Artifact::BashInstaller => "install.sh",
            Artifact::Typst => "docgen/docker-toolbox.typ",
        }
    }

    pub fn base(&self) -> OutputBase {
        match self {
            Artifact::Typst => OutputBase::WorkDir,
            _ => OutputBase::OutputDir,
        }
    }

    pub fn output_path(&self, output_dir: &Path, work_dir: &Path) -> PathBuf {
        match self.base() {
            OutputBase::OutputDir => output_dir.join(self.relative_path()),
            OutputBase::WorkDir => work_dir.join(self.relative_path()),
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(self, Artifact::BashInstaller)
    }

    pub fn render(&self, catalog: &Catalog) -> String {
        match self {
            Artifact::Markdown => markdown::render(catalog),
            Artifact::PowerShellInstaller => powershell::render(catalog),
            Artifact::BashInstaller => bash::render(catalog),
            Artifact::Typst => typst::render(catalog),
        }
    }
}

struct ArtifactSpec {
    artifact: Artifact,
    in_all: bool,
}

// Generation order; Typst is opt-in only.
const ARTIFACT_SPECS: &[ArtifactSpec] = &[
    ArtifactSpec {
        artifact: Artifact::Markdown,
        in_all: true,
    },
    ArtifactSpec {
        artifact: Artifact::PowerShellInstaller,
        in_all: true,
    },
    ArtifactSpec {
        artifact: Artifact::BashInstaller,
        in_all: true,
    },
    ArtifactSpec {
        artifact: Artifact::Typst,
        in_all: false,
    },
];

/// Artifacts to generate, in generation order: every artifact explicitly
/// requested plus, when `all` is set, every artifact included in "all".
pub fn select_artifacts(requested: &[Artifact], all: bool) -> Vec<Artifact> {
    ARTIFACT_SPECS
        .iter()
        .filter(|spec| requested.contains(&spec.artifact) || (all && spec.in_all))
        .map(|spec| spec.artifact)
        .collect()
}

/// Shell family an alias body is written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellFamily {
    Posix,
    PowerShell,
}

/// Placeholder in command templates standing for all remaining arguments.
pub const ARGS_PLACEHOLDER: &str = "$args";

impl ShellFamily {
    fn forward_args(&self) -> &'static str {
        match self {
            ShellFamily::Posix => "\"$@\"",
            ShellFamily::PowerShell => ARGS_PLACEHOLDER,
        }
    }

    /// Template with the argument placeholder in this shell's form.
    pub fn substitute_args(&self, template: &str) -> String {
        template.trim().replace(ARGS_PLACEHOLDER, self.forward_args())
    }
}

/// `alias name='body'` line: arguments forwarded, single quotes escaped so
/// the body stays one single-quoted word.
pub fn posix_alias(alias: &str, template: &str) -> String {
    let body = ShellFamily::Posix
        .substitute_args(template)
        .replace('\'', r"'\''");
    format!("alias {alias}='{body}'")
}

/// Trimmed template an alias expands to: the resolved command, else
/// `default`, else nothing.
pub fn alias_template<'a>(tool: &'a Tool, alias: &str) -> Option<&'a str> {
    let key = resolve_alias(alias, &tool.commands);
    tool.commands
        .get(key)
        .or_else(|| tool.commands.get(DEFAULT_COMMAND))
        .map(|template| template.trim())
}

/// Tool commands in presentation order: `(None, default)` first, then each
/// named command in declaration order.
pub fn ordered_commands(tool: &Tool) -> Vec<(Option<&str>, &str)> {
    let mut ordered = Vec::with_capacity(tool.commands.len());
    if let Some(default) = tool.commands.get(DEFAULT_COMMAND) {
        ordered.push((None, default.trim()));
    }
    for (name, template) in &tool.commands {
        if name != DEFAULT_COMMAND {
            ordered.push((Some(name.as_str()), template.trim()));
        }
    }
    ordered
}

/// Heading label for an entry of `ordered_commands`.
pub fn command_label(name: Option<&str>) -> String {
    match name {
        None => "Basic usage".to_string(),
        Some(name) => capitalize(name),
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// First letter of every alphabetic run upper-cased, the rest lower-cased.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Line buffer the renderers write into; joined with `\n` on finish.
#[derive(Debug, Default)]
pub(crate) struct Lines {
    lines: Vec<String>,
}

impl Lines {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub(crate) fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Push each line of a multi-line block.
    pub(crate) fn block(&mut self, text: &str) -> &mut Self {
        self.lines.extend(text.lines().map(str::to_string));
        self
    }

    pub(crate) fn finish(self) -> String {
        self.lines.join("\n")
    }
}
