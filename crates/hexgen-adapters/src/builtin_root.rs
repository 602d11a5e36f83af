//! Built-in apps root discovery.
//!
//! Built-in apps and the base project skeleton ship as a plain directory
//! tree (`assets/builtin_apps/`). This module locates that tree so the
//! installer can copy from it.
//!
//! # Resolution order
//!
//! 1. An explicit path (from `--builtin-root` or config), used as-is.
//! 2. **`$HEXGEN_BUILTIN_ROOT`** environment variable override.
//! 3. **`./assets/builtin_apps`** relative to the current working directory.
//! 4. **`<executable-dir>/assets/builtin_apps`** sibling to the binary.
//! 5. **`../assets/builtin_apps`** one level above CWD, convenient when
//!    running from a workspace subdirectory.
//!
//! The first candidate that exists as a directory wins. `None` means no
//! root was found; the CLI surfaces that as a configuration error.

use std::path::PathBuf;

use tracing::{debug, warn};

/// Environment variable overriding the built-in apps root.
pub const BUILTIN_ROOT_ENV: &str = "HEXGEN_BUILTIN_ROOT";

const DEFAULT_RELATIVE: &str = "assets/builtin_apps";

/// Resolve the built-in apps root.
///
/// `explicit` short-circuits discovery entirely, even if the path does not
/// exist yet; missing explicit roots fail later with a clear source error
/// rather than being silently replaced by a fallback.
pub fn resolve(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit builtin root");
        return Some(path);
    }

    for candidate in candidate_paths() {
        debug!(path = %candidate.display(), "checking candidate builtin root");
        if candidate.is_dir() {
            debug!(path = %candidate.display(), "builtin root found");
            return Some(candidate);
        }
    }

    warn!(
        "no builtin apps root found; checked ${BUILTIN_ROOT_ENV}, \
         ./{DEFAULT_RELATIVE}, <exe>/{DEFAULT_RELATIVE}, and ../{DEFAULT_RELATIVE}"
    );
    None
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    if let Ok(env_root) = std::env::var(BUILTIN_ROOT_ENV) {
        paths.push(PathBuf::from(env_root));
    }

    paths.push(PathBuf::from(DEFAULT_RELATIVE));

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
    {
        paths.push(exe_dir.join(DEFAULT_RELATIVE));
    }

    paths.push(PathBuf::from("..").join(DEFAULT_RELATIVE));

    paths
}
