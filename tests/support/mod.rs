#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use toolbox_gen::{Catalog, CatalogDocument};

/// Catalog with two categories, multi-command tools, and every optional field.
pub const SAMPLE_CATALOG: &str = r#"
categories:
  - id: web
    name: Web Tools
    description: HTTP clients and servers
  - id: data_stores
    name: Data Stores
    description: Databases and caches
tools:
  - name: curler
    category: web
    description: fetch urls
    image: curl:latest
    commands:
      default: curl $args
    aliases:
      - dtcurl
  - name: redis
    category: data_stores
    description: In-memory key-value store
    image: redis:7-alpine
    commands:
      default: docker run --rm -it --network host redis:7-alpine redis-cli $args
      start: docker run -d --name dt-redis -p 6379:6379 redis:7-alpine
      stop: docker stop dt-redis
      logs: docker logs -f dt-redis
    aliases:
      - dtredis
      - dtredisstart
      - dtredisstop
      - dtredislogs
    notes: |
      Data is not persisted unless you mount a volume.
    examples:
      - description: Ping the server
        command: dtredis ping
"#;

/// Tool missing its image and pointing at an undeclared category.
pub const INVALID_CATALOG: &str = r#"
categories:
  - id: web
    name: Web Tools
    description: HTTP clients and servers
tools:
  - name: broken
    category: mobile
    description: no image here
    commands:
      default: broken $args
    aliases:
      - dtbroken
"#;

pub fn catalog_from(yaml: &str) -> Result<Catalog> {
    Ok(Catalog::from_document(CatalogDocument::from_yaml(yaml)?))
}

pub fn write_catalog(dir: &Path, yaml: &str) -> Result<PathBuf> {
    let path = dir.join("tools.yaml");
    fs::write(&path, yaml).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// The generator binary with a scrubbed compiler override.
pub fn toolbox_gen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_toolbox-gen"));
    cmd.env_remove("TOOLBOX_TYPST_BIN").env_remove("TOOLBOX_ROOT");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.output().context("failed to spawn command")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
