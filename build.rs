use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=TOOLBOX_ROOT_HINT");

    let Some(raw_hint) = env::var("TOOLBOX_ROOT_HINT").ok().filter(|hint| !hint.is_empty()) else {
        return;
    };

    // Last-resort root for find_toolbox_root.
    let candidate = PathBuf::from(raw_hint);
    let canonical = candidate.canonicalize().unwrap_or(candidate);
    println!("cargo:rustc-env=TOOLBOX_ROOT_HINT={}", canonical.display());
}
