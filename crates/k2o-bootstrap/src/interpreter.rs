//! Interpreter selection: pinned pyenv build first, PATH lookup second.
//!
//! Resolution never fails. A reference that points at nothing simply fails
//! later, when the bootstrap actually invokes it.

use std::path::{Path, PathBuf};

/// The pyenv version whose Tk links against a compatible Tcl. Stock macOS
/// pythons (and some distro builds) ship a Tkinter that crashes the GUI.
pub const PINNED_PYENV_VERSION: &str = "3.10.6";

/// Fallback command names tried in order on the standard search path.
const FALLBACK_NAMES: &[&str] = &["python3", "python"];

/// Where the chosen interpreter came from (used for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterSource {
    /// The pinned pyenv build at a fixed home-relative path.
    Pinned,
    /// A generic name resolved (or assumed) via PATH.
    PathLookup,
}

/// A chosen interpreter. Selected once per invocation, never mutated.
#[derive(Debug, Clone)]
pub struct InterpreterRef {
    pub path: PathBuf,
    pub source: InterpreterSource,
}

/// Fixed path of the preferred interpreter: `~/.pyenv/versions/<pinned>/bin/python3`.
pub fn preferred_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".pyenv")
            .join("versions")
            .join(PINNED_PYENV_VERSION)
            .join("bin")
            .join("python3")
    })
}

/// Select an interpreter: the pinned pyenv build if present, otherwise a
/// generic `python3`/`python` from PATH. Absence of the preferred path is
/// not an error.
pub fn resolve() -> InterpreterRef {
    match preferred_path() {
        Some(preferred) => resolve_with_preferred(&preferred),
        None => fallback(),
    }
}

/// Same as [`resolve`], with the preferred path supplied by the caller.
pub fn resolve_with_preferred(preferred: &Path) -> InterpreterRef {
    if preferred.is_file() {
        tracing::debug!(path = %preferred.display(), "Using pinned interpreter");
        return InterpreterRef {
            path: preferred.to_path_buf(),
            source: InterpreterSource::Pinned,
        };
    }
    fallback()
}

fn fallback() -> InterpreterRef {
    for name in FALLBACK_NAMES {
        if let Ok(path) = which::which(name) {
            tracing::debug!(path = %path.display(), "Using interpreter from PATH");
            return InterpreterRef {
                path,
                source: InterpreterSource::PathLookup,
            };
        }
    }
    // Nothing on PATH either. Hand back the bare name; the spawn error when
    // it is first invoked is the user-visible failure.
    InterpreterRef {
        path: PathBuf::from(FALLBACK_NAMES[0]),
        source: InterpreterSource::PathLookup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_path_wins_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let pinned = dir.path().join("python3");
        std::fs::write(&pinned, "").unwrap();

        let resolved = resolve_with_preferred(&pinned);
        assert_eq!(resolved.path, pinned);
        assert_eq!(resolved.source, InterpreterSource::Pinned);
    }

    #[test]
    fn absent_pinned_path_falls_back_without_error() {
        let resolved = resolve_with_preferred(Path::new("/nonexistent/pyenv/python3"));
        assert_eq!(resolved.source, InterpreterSource::PathLookup);
        // Either a real PATH hit or the bare fallback name; both are python*.
        let name = resolved.path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("python"), "unexpected fallback: {}", name);
    }

    #[test]
    fn preferred_path_is_home_relative_and_pinned() {
        if let Some(p) = preferred_path() {
            let s = p.to_string_lossy();
            assert!(s.contains(".pyenv"));
            assert!(s.contains(PINNED_PYENV_VERSION));
        }
    }
}
