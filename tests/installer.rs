#![cfg(unix)]

// Runs the generated install.sh against a throwaway HOME.
mod support;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use toolbox_gen::render::bash::{self, BLOCK_BEGIN, BLOCK_END};

use support::{SAMPLE_CATALOG, catalog_from, run_command, stderr_of};

fn write_installer(dir: &Path) -> Result<PathBuf> {
    let catalog = catalog_from(SAMPLE_CATALOG)?;
    let path = dir.join("install.sh");
    fs::write(&path, bash::render(&catalog)).context("writing install.sh")?;
    Ok(path)
}

fn bash_with_home(home: &Path) -> Command {
    let mut cmd = Command::new("bash");
    cmd.env("HOME", home).env_remove("ZSH_VERSION");
    cmd
}

#[test]
fn unsupported_shell_exits_one_without_writing() -> Result<()> {
    let home = TempDir::new()?;
    let script = write_installer(home.path())?;

    // Sourced after unsetting the variables bash itself sets.
    let mut cmd = bash_with_home(home.path());
    cmd.arg("-c")
        .arg("unset BASH_VERSION ZSH_VERSION; . \"$0\"")
        .arg(&script);
    let output = run_command(cmd)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("Unsupported shell"),
        "stderr was: {}",
        stderr_of(&output)
    );
    assert!(!home.path().join(".bashrc").exists());
    assert!(!home.path().join(".zshrc").exists());
    Ok(())
}

#[test]
fn bash_run_appends_alias_block() -> Result<()> {
    let home = TempDir::new()?;
    let script = write_installer(home.path())?;
    fs::write(home.path().join(".bashrc"), "export EDITOR=vi\n")?;

    let mut cmd = bash_with_home(home.path());
    cmd.arg(&script);
    let output = run_command(cmd)?;
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let rc = fs::read_to_string(home.path().join(".bashrc"))?;
    assert!(rc.starts_with("export EDITOR=vi\n"));
    assert!(rc.contains("# Web Tools\nalias dtcurl='curl \"$@\"'\n"));
    assert!(rc.contains("alias dtredisstop='docker stop dt-redis'"));
    assert!(rc.trim_end().ends_with(BLOCK_END));
    Ok(())
}

#[test]
fn rerun_replaces_previous_block() -> Result<()> {
    let home = TempDir::new()?;
    let script = write_installer(home.path())?;
    fs::write(home.path().join(".bashrc"), "export EDITOR=vi\n")?;

    for _ in 0..2 {
        let mut cmd = bash_with_home(home.path());
        cmd.arg(&script);
        let output = run_command(cmd)?;
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    }

    let rc = fs::read_to_string(home.path().join(".bashrc"))?;
    let begin_lines = rc.lines().filter(|line| *line == BLOCK_BEGIN).count();
    assert_eq!(begin_lines, 1, "profile was:\n{rc}");
    assert_eq!(rc.matches("alias dtcurl=").count(), 1);
    assert!(rc.contains("export EDITOR=vi"));
    Ok(())
}

#[test]
fn unterminated_marker_keeps_profile_lines() -> Result<()> {
    let home = TempDir::new()?;
    let script = write_installer(home.path())?;
    let profile = format!("{BLOCK_BEGIN}\nalias old='x'\nexport IMPORTANT=1\nexport PATH=\"$HOME/bin:$PATH\"\n");
    fs::write(home.path().join(".bashrc"), &profile)?;

    for _ in 0..2 {
        let mut cmd = bash_with_home(home.path());
        cmd.arg(&script);
        let output = run_command(cmd)?;
        assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    }

    let rc = fs::read_to_string(home.path().join(".bashrc"))?;
    assert!(rc.starts_with(&profile), "profile was:\n{rc}");
    assert_eq!(rc.matches("export IMPORTANT=1").count(), 1);
    assert_eq!(rc.matches("alias dtcurl=").count(), 1);
    assert!(rc.trim_end().ends_with(BLOCK_END));
    Ok(())
}
