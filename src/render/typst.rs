//! `docgen/docker-toolbox.typ` renderer.
//!
//! Produces a self-contained Typst source: styling rules, a title page, an
//! outline, a per-category overview table, the tool reference, and a fixed
//! appendix. Free text is escaped for Typst markup; command templates go
//! into raw blocks untouched.

use crate::catalog::{Catalog, Tool};
use crate::render::{Lines, command_label, ordered_commands, title_case};

/// Aliases listed per tool in the reference section.
const LISTED_ALIASES: usize = 3;

const STYLE: &str = r##"#set document(
  title: "Docker Toolbox - Complete Reference",
  author: "Docker Toolbox Contributors",
  date: auto,
)

#set page(
  paper: "a4",
  margin: (x: 1.5cm, y: 2cm),
  numbering: "1",
  header: align(right)[
    _Docker Toolbox - Complete Reference_
  ],
)

#set text(
  size: 11pt,
  hyphenate: true,
)

#set heading(numbering: "1.1")
#show heading.where(level: 1): set text(size: 24pt, weight: "bold")
#show heading.where(level: 2): set text(size: 18pt, weight: "bold")
#show heading.where(level: 3): set text(size: 14pt, weight: "semibold")

#show raw.where(block: true): block.with(
  fill: luma(240),
  inset: 10pt,
  radius: 4pt,
  width: 100%,
)

#show link: underline
#show link: set text(fill: rgb("#0066cc"))"##;

const INTRODUCTION: &str = r#"= Table of Contents

#outline(depth: 2, indent: 2em)

#pagebreak()

= Introduction

Docker Toolbox provides ready-to-use Docker commands for development tools across multiple categories. This reference guide contains all available tools with usage examples.

== Benefits

- *No local installation* required (just Docker)
- *Consistent behavior* across Linux, macOS, and Windows
- *Isolated environments* prevent conflicts
- *Easy to try* new tools without commitment
- *Clean uninstall* - just remove the container

#pagebreak()"#;

const APPENDIX: &str = r#"#pagebreak()

= Appendix

== Installation

To use Docker Toolbox, you need Docker installed on your system.

*Prerequisites:*
- Docker 20.10 or later
- Basic command line knowledge

Run `toolbox-gen --bash` or `toolbox-gen --powershell` and execute the generated installer.

== Contributing

Docker Toolbox uses a YAML-based tool management system. To add a new tool:

1. Edit `tools.yaml`
2. Run `toolbox-gen --all`
3. Test the generated outputs
4. Submit a pull request

== License

MIT License - Free to use, modify, and distribute.
"#;

pub fn render(catalog: &Catalog) -> String {
    let mut out = Lines::new();
    out.block(STYLE).blank();

    render_title_page(&mut out, catalog.tools().len());
    out.block(INTRODUCTION).blank();
    render_overview(&mut out, catalog);

    out.push("= Tools Reference").blank();
    for (idx, section) in catalog.sections().into_iter().enumerate() {
        if idx > 0 {
            out.push("#pagebreak()").blank();
        }
        out.push(format!("== {}", escape(section.name()))).blank();
        for tool in section.tools {
            render_tool(&mut out, tool);
        }
    }

    out.block(APPENDIX).blank();
    out.finish()
}

fn render_title_page(out: &mut Lines, tool_count: usize) {
    out.push("#align(center)[")
        .push("  #v(3cm)")
        .push("  #text(size: 36pt, weight: \"bold\")[Docker Toolbox]")
        .push("  #v(0.5cm)")
        .push("  #text(size: 18pt)[Complete Reference Guide]")
        .push("  #v(1cm)")
        .push("  #text(size: 14pt)[")
        .push(format!("    {tool_count} Development Tools via Docker"))
        .push("  ]")
        .push("  #v(0.5cm)")
        .push("  #text(size: 12pt, style: \"italic\")[")
        .push("    Run popular development tools without installing them locally")
        .push("  ]")
        .push("  #v(3cm)")
        .push("  #text(size: 11pt)[")
        .push("    Generated from tools.yaml")
        .push("  ]")
        .push("]")
        .blank()
        .push("#pagebreak()")
        .blank();
}

fn render_overview(out: &mut Lines, catalog: &Catalog) {
    out.push("= Categories Overview")
        .blank()
        .push("#table(")
        .push("  columns: (auto, 1fr, auto),")
        .push("  stroke: 0.5pt,")
        .push("  align: (left, left, right),")
        .push("  [*Category*], [*Description*], [*Tools*],");
    for (category, tools) in catalog.populated_categories() {
        out.push(format!(
            "  [{}], [{}], [{}],",
            escape(&category.name),
            escape(&category.description),
            tools.len()
        ));
    }
    out.push(")").blank().push("#pagebreak()").blank();
}

fn render_tool(out: &mut Lines, tool: &Tool) {
    out.push(format!("=== {}", escape(&title_case(&tool.name))))
        .blank()
        .push(format!("_{}_", escape(&tool.description)))
        .blank()
        .push(format!("*Docker Image:* `{}`", tool.image))
        .blank();

    let commands = ordered_commands(tool);
    if !commands.is_empty() {
        out.push("*Usage:*").blank();
        for (name, template) in commands {
            out.push("```bash")
                .push(format!("# {}", command_label(name)))
                .block(template)
                .push("```")
                .blank();
        }
    }

    if !tool.aliases.is_empty() {
        let listed: Vec<String> = tool
            .aliases
            .iter()
            .take(LISTED_ALIASES)
            .map(|alias| format!("`{alias}`"))
            .collect();
        out.push("*Aliases:*")
            .blank()
            .push(format!("Bash/Zsh: {}", listed.join(", ")))
            .blank();
    }

    if let Some(notes) = &tool.notes {
        out.push("#block(")
            .push("  fill: rgb(\"#fffacd\"),")
            .push("  inset: 8pt,")
            .push("  radius: 4pt,")
            .push(")[")
            .push(format!("  *Note:* {}", escape(&notes.trim().replace('\n', " "))))
            .push("]")
            .blank();
    }

    if !tool.examples.is_empty() {
        out.push("*Examples:*").blank();
        for example in &tool.examples {
            out.push(format!("- _{}_", escape(&example.description)))
                .push("  ```bash")
                .push(format!("  {}", example.command.trim()))
                .push("  ```");
        }
        out.blank();
    }

    out.blank();
}

/// Escape characters that Typst markup would otherwise interpret.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        let comment_start = ch == '/' && matches!(chars.peek(), Some('/' | '*'));
        if comment_start
            || matches!(
                ch,
                '\\' | '#' | '*' | '_' | '$' | '@' | '<' | '>' | '[' | ']' | '`' | '~'
            )
        {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
