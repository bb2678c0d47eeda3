//! `docker-dev-tools.md` renderer.

use crate::catalog::{Catalog, Tool};
use crate::render::{
    Lines, ShellFamily, alias_template, capitalize, command_label, ordered_commands, posix_alias,
};

pub fn render(catalog: &Catalog) -> String {
    let mut out = Lines::new();

    out.push("# Docker Commands for Development Tools\n")
        .push("Run popular development tools without installing them locally. Just Docker required.\n")
        .push("---\n");

    out.push("## Table of Contents\n");
    for (category, tools) in catalog.populated_categories() {
        let names: Vec<&str> = tools.iter().map(|tool| tool.name.as_str()).collect();
        out.push(format!(
            "- [{}](#{}) - {}",
            category.name,
            anchor(&category.id),
            names.join(", ")
        ));
    }
    out.push("\n---\n");

    for section in catalog.sections() {
        out.push(format!("\n## {}\n", section.name()));
        for tool in section.tools {
            render_tool(&mut out, tool);
        }
    }

    out.finish()
}

fn render_tool(out: &mut Lines, tool: &Tool) {
    out.push(format!("\n### {}", capitalize(&tool.name)))
        .push(format!("{}\n", tool.description));

    out.push("```bash");
    for (name, template) in ordered_commands(tool) {
        out.push(format!("# {}", command_label(name)))
            .push(template)
            .blank();
    }
    out.push("```\n");

    if !tool.aliases.is_empty() && !tool.commands.is_empty() {
        out.push("**Aliases:**").push("```bash").push("# Linux/macOS");
        for (alias, template) in alias_templates(tool) {
            out.push(posix_alias(alias, template));
        }
        out.blank().push("# PowerShell");
        for (alias, template) in alias_templates(tool) {
            out.push(format!(
                "function {alias} {{ {} }}",
                ShellFamily::PowerShell.substitute_args(template)
            ));
        }
        out.push("```\n");
    }

    if let Some(notes) = &tool.notes {
        out.push(format!("**Note:** {}\n", notes.trim()));
    }

    out.push("---\n");
}

fn alias_templates(tool: &Tool) -> impl Iterator<Item = (&str, &str)> {
    tool.aliases.iter().filter_map(move |alias| {
        alias_template(tool, alias).map(|template| (alias.as_str(), template))
    })
}

/// Heading anchor for a category id.
fn anchor(id: &str) -> String {
    id.replace('_', "-")
}
