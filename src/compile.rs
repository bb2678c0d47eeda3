//! Optional Typst compilation of the generated document source.
//!
//! The compiler is an external collaborator: a missing binary, a non-zero
//! exit, or a timeout are all reported as a `CompileOutcome`, never as an
//! error, so generation still counts as successful.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Env override for the compiler program.
pub const TYPST_BIN_ENV: &str = "TOOLBOX_TYPST_BIN";
/// Default wall-clock budget for one compilation.
pub const DEFAULT_COMPILE_TIMEOUT: Duration = Duration::from_secs(30);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    Compiled,
    /// The program could not be found.
    Missing { program: String },
    /// The compiler ran and exited non-zero.
    Failed { code: Option<i32>, stderr: String },
    TimedOut { after: Duration },
    /// Any other launch or wait failure.
    Error { message: String },
}

impl CompileOutcome {
    pub fn is_compiled(&self) -> bool {
        matches!(self, CompileOutcome::Compiled)
    }
}

/// Compiler program: `TOOLBOX_TYPST_BIN` when set and non-empty, else `typst`.
pub fn typst_command() -> OsString {
    match env::var_os(TYPST_BIN_ENV) {
        Some(value) if !value.is_empty() => value,
        _ => OsString::from("typst"),
    }
}

/// Run `<typst> compile <source> <output>` with a bounded wait.
pub fn compile_typst(source: &Path, output: &Path, timeout: Duration) -> CompileOutcome {
    compile_with_program(&typst_command(), source, output, timeout)
}

/// `compile_typst` against an explicit compiler program.
pub fn compile_with_program(
    program: &OsStr,
    source: &Path,
    output: &Path,
    timeout: Duration,
) -> CompileOutcome {
    debug!(program = %program.to_string_lossy(), source = %source.display(), "compiling typst");

    let mut stderr_capture = match tempfile::tempfile() {
        Ok(file) => file,
        Err(err) => {
            return CompileOutcome::Error {
                message: format!("allocating stderr capture: {err}"),
            };
        }
    };
    let stderr_handle = match stderr_capture.try_clone() {
        Ok(file) => file,
        Err(err) => {
            return CompileOutcome::Error {
                message: format!("cloning stderr capture: {err}"),
            };
        }
    };

    let mut child = match Command::new(program)
        .arg("compile")
        .arg(source)
        .arg(output)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::from(stderr_handle))
        .spawn()
    {
        Ok(child) => child,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return CompileOutcome::Missing {
                program: program.to_string_lossy().into_owned(),
            };
        }
        Err(err) => {
            return CompileOutcome::Error {
                message: format!("launching {}: {err}", program.to_string_lossy()),
            };
        }
    };

    let started = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if started.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return CompileOutcome::TimedOut { after: timeout };
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(err) => {
                let _ = child.kill();
                return CompileOutcome::Error {
                    message: format!("waiting for {}: {err}", program.to_string_lossy()),
                };
            }
        }
    };

    if status.success() {
        return CompileOutcome::Compiled;
    }

    CompileOutcome::Failed {
        code: status.code(),
        stderr: read_capture(&mut stderr_capture),
    }
}

fn read_capture(file: &mut File) -> String {
    let mut buf = String::new();
    if file.seek(SeekFrom::Start(0)).is_ok() {
        let _ = file.read_to_string(&mut buf);
    }
    buf.trim().to_string()
}
