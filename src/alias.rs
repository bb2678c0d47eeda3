//! Alias to command-template resolution.
//!
//! Aliases are short shell names such as `dtredisstart`. A tool with several
//! named commands needs each alias pointed at one of them; the mapping is a
//! naming heuristic, so callers must tolerate a `default` result that may not
//! exist in the tool's commands.

use crate::catalog::DEFAULT_COMMAND;
use indexmap::IndexMap;

/// Prefix every catalog alias is expected to carry.
pub const ALIAS_MARKER: &str = "dt";

/// Command verbs tried against the alias suffix, first match wins.
pub const COMMAND_SUFFIXES: &[&str] = &[
    "start", "stop", "logs", "cli", "exec", "run", "serve", "watch", "check", "write", "build",
    "new", "simple", "test", "playbook", "identify", "mogrify",
];

/// Alias name with one leading marker removed, lowercased.
pub fn alias_candidate(alias: &str) -> String {
    let lowered = alias.to_lowercase();
    match lowered.strip_prefix(ALIAS_MARKER) {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}

/// Alias with one leading marker removed, case preserved.
pub fn strip_marker(alias: &str) -> &str {
    match alias.get(..ALIAS_MARKER.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(ALIAS_MARKER) => &alias[ALIAS_MARKER.len()..],
        _ => alias,
    }
}

/// Key in `commands` that `alias` should invoke.
///
/// An exact candidate match wins; otherwise the first listed suffix that the
/// candidate ends with and that is itself a command key; otherwise `default`.
pub fn resolve_alias<'a>(alias: &str, commands: &'a IndexMap<String, String>) -> &'a str {
    let candidate = alias_candidate(alias);

    if let Some((key, _)) = commands.get_key_value(candidate.as_str()) {
        return key;
    }

    for suffix in COMMAND_SUFFIXES {
        if candidate.ends_with(suffix) {
            if let Some((key, _)) = commands.get_key_value(*suffix) {
                return key;
            }
        }
    }

    DEFAULT_COMMAND
}
