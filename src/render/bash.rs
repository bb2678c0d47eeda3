//! `install.sh` renderer.
//!
//! The emitted script picks `~/.zshrc` or `~/.bashrc` from the running shell,
//! drops any block a previous run left between the marker lines, and appends
//! a fresh alias block. It runs under `set -e`.

use crate::catalog::Catalog;
use crate::render::{Lines, alias_template, posix_alias};

/// First line of the alias block written to the shell profile.
pub const BLOCK_BEGIN: &str = "# Docker Toolbox aliases";
/// Last line of the alias block written to the shell profile.
pub const BLOCK_END: &str = "# End Docker Toolbox aliases";

const PREAMBLE: &str = r#"#!/usr/bin/env bash
# Docker Toolbox - Bash Installer (Generated from tools.yaml)
# Adds Docker Toolbox aliases to ~/.bashrc or ~/.zshrc

set -e

# Colors
RED="\033[0;31m"
GREEN="\033[0;32m"
YELLOW="\033[0;33m"
BLUE="\033[0;34m"
NC="\033[0m" # No Color

echo -e "${BLUE}Docker Toolbox - Bash Installer${NC}"
echo -e "${BLUE}Generated from tools.yaml${NC}"
echo ""

# Detect shell config file
if [ -n "$ZSH_VERSION" ]; then
    SHELL_CONFIG="$HOME/.zshrc"
elif [ -n "$BASH_VERSION" ]; then
    SHELL_CONFIG="$HOME/.bashrc"
else
    echo -e "${RED}Error: Unsupported shell${NC}" >&2
    exit 1
fi

echo -e "${GREEN}[OK] Using config file: $SHELL_CONFIG${NC}"
echo """#;

const EPILOGUE: &str = r#"echo -e "${GREEN}[OK] Aliases added to $SHELL_CONFIG${NC}"
echo ""
echo "To start using the aliases, run:"
echo -e "  ${YELLOW}source $SHELL_CONFIG${NC}"
echo "Or restart your terminal."
echo """#;

pub fn render(catalog: &Catalog) -> String {
    let mut out = Lines::new();
    out.block(PREAMBLE).blank();

    render_block_guard(&mut out);

    out.push("# Docker Toolbox aliases (auto-generated from tools.yaml)")
        .push("cat >> \"$SHELL_CONFIG\" << 'EOF'")
        .push(BLOCK_BEGIN)
        .push("# Generated by toolbox-gen from tools.yaml")
        .blank();

    for section in catalog.sections() {
        out.push(format!("# {}", section.name()));
        for tool in section.tools {
            for alias in &tool.aliases {
                if let Some(template) = alias_template(tool, alias) {
                    out.push(posix_alias(alias, template));
                }
            }
        }
        out.blank();
    }

    out.push(BLOCK_END).push("EOF").blank();
    out.block(EPILOGUE);
    out.finish()
}

// Removes a previously installed block so re-running leaves exactly one.
// Only a begin marker closed by an end marker is dropped; an unterminated
// block is printed back untouched.
fn render_block_guard(out: &mut Lines) {
    out.push(format!("BLOCK_BEGIN='{BLOCK_BEGIN}'"))
        .push(format!("BLOCK_END='{BLOCK_END}'"))
        .push("if [ -f \"$SHELL_CONFIG\" ] && grep -qxF \"$BLOCK_BEGIN\" \"$SHELL_CONFIG\"; then")
        .push("    echo -e \"${YELLOW}[INFO] Replacing existing Docker Toolbox aliases in $SHELL_CONFIG${NC}\"")
        .push("    TMP_CONFIG=\"$(mktemp)\"")
        .push("    awk -v begin=\"$BLOCK_BEGIN\" -v end=\"$BLOCK_END\" '")
        .push(r#"        $0 == begin { if (skip) printf "%s", held; skip = 1; held = $0 "\n"; next }"#)
        .push(r#"        skip && $0 == end { skip = 0; held = ""; next }"#)
        .push(r#"        skip { held = held $0 "\n"; next }"#)
        .push("        { print }")
        .push(r#"        END { if (skip) printf "%s", held }"#)
        .push("    ' \"$SHELL_CONFIG\" > \"$TMP_CONFIG\"")
        .push("    cat \"$TMP_CONFIG\" > \"$SHELL_CONFIG\"")
        .push("    rm -f \"$TMP_CONFIG\"")
        .push("fi")
        .blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogDocument, Category, Tool};

    fn tool(name: &str, category: &str, commands: &[(&str, &str)], aliases: &[&str]) -> Tool {
        Tool {
            name: name.to_string(),
            category: category.to_string(),
            description: format!("{name} tool"),
            image: format!("{name}:latest"),
            commands: commands
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            ..Tool::default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_document(CatalogDocument {
            tools: vec![
                tool("jq", "cli", &[("default", "docker run --rm -i jq $args")], &["dtjq"]),
                tool("redis", "db", &[("start", "docker start redis")], &["dtredisstart", "dtredisflush"]),
                tool("yq", "cli", &[("default", "docker run --rm -i yq $args")], &["dtyq"]),
            ],
            categories: vec![
                Category {
                    id: "cli".to_string(),
                    name: "CLI Utilities".to_string(),
                    description: String::new(),
                },
                Category {
                    id: "db".to_string(),
                    name: "Databases".to_string(),
                    description: String::new(),
                },
            ],
        })
    }

    #[test]
    fn script_fails_fast_and_detects_shell() {
        let script = render(&catalog());
        assert!(script.starts_with("#!/usr/bin/env bash\n"));
        assert!(script.contains("\nset -e\n"));
        assert!(script.contains("SHELL_CONFIG=\"$HOME/.zshrc\""));
        assert!(script.contains("SHELL_CONFIG=\"$HOME/.bashrc\""));
        assert!(script.contains("Error: Unsupported shell"));
    }

    #[test]
    fn aliases_are_grouped_once_per_category() {
        let script = render(&catalog());
        let block_start = script.find("<< 'EOF'").unwrap();
        let block = &script[block_start..];
        assert_eq!(block.matches("# CLI Utilities").count(), 1);
        let jq = block.find("alias dtjq='docker run --rm -i jq \"$@\"'").unwrap();
        let yq = block.find("alias dtyq=").unwrap();
        let db = block.find("# Databases").unwrap();
        assert!(jq < yq && yq < db);
    }

    #[test]
    fn unresolvable_alias_is_skipped() {
        let script = render(&catalog());
        assert!(script.contains("alias dtredisstart='docker start redis'"));
        assert!(!script.contains("dtredisflush"));
    }

    #[test]
    fn guard_restores_unterminated_block() {
        let script = render(&catalog());
        assert!(script.contains(r#"END { if (skip) printf "%s", held }"#));
        assert!(script.contains(r#"skip && $0 == end { skip = 0; held = ""; next }"#));
    }

    #[test]
    fn block_is_delimited_by_markers() {
        let script = render(&catalog());
        let begin = script.find(&format!("\n{BLOCK_BEGIN}\n")).unwrap();
        let end = script.find(&format!("\n{BLOCK_END}\nEOF\n")).unwrap();
        assert!(begin < end);
    }
}
