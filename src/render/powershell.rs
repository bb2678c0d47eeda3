//! `install-interactive.ps1` renderer.
//!
//! Only the `$AllTools` data table and a selection stub are generated; the
//! script does not install functions into the PowerShell profile yet.

use crate::alias::strip_marker;
use crate::catalog::Catalog;
use crate::render::{Lines, capitalize};

const HEADER: &str = r#"#Requires -Version 5.1
<#
.SYNOPSIS
    Docker Toolbox - Interactive Installer (Generated from tools.yaml)
.DESCRIPTION
    Installs Docker Toolbox functions to PowerShell profile
#>
"#;

const STUB_UI: &str = r#"
# Main installer logic
function Show-Banner {
    Write-Host "Docker Toolbox - Interactive Installer" -ForegroundColor Cyan
    Write-Host "Generated from tools.yaml" -ForegroundColor Gray
    Write-Host ""
}

# Display tools and let user select
Show-Banner
$Selected = $AllTools | Out-GridView -Title "Select tools to install" -OutputMode Multiple

Write-Host ""
Write-Host "Selected $(@($Selected).Count) of $($AllTools.Count) entries."
Write-Host "Function installation is not generated yet; see docker-dev-tools.md for the PowerShell functions."
"#;

pub fn render(catalog: &Catalog) -> String {
    let mut out = Lines::new();
    out.block(HEADER).blank();

    out.push("# Tool definitions (auto-generated from tools.yaml)")
        .push("$AllTools = @(");

    for section in catalog.sections() {
        let category = quote(section.name());
        for tool in section.tools {
            out.push(entry(&category, &quote(&tool.name), &quote(&tool.description)));

            // The first alias is the tool's main command; the rest get their own rows.
            for alias in tool.aliases.iter().skip(1) {
                let name = strip_marker(alias);
                let description = format!("{} - {name}", capitalize(&tool.name));
                out.push(entry(&category, &quote(name), &quote(&description)));
            }
        }
    }

    out.push(")").blank();
    out.block(STUB_UI);
    out.finish()
}

fn entry(category: &str, name: &str, description: &str) -> String {
    format!("    @{{ Category = {category}; Name = {name}; Description = {description} }}")
}

/// Single-quoted PowerShell literal.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
