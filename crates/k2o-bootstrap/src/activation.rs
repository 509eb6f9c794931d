//! Activation as an explicit value instead of ambient process mutation.
//!
//! The classic shell launcher `source`s the venv's activate script, mutating
//! the launcher's own environment. Here the computed environment travels with
//! the `Activation` and is applied to the child `Command` only: process-local,
//! non-persistent, invisible to every other process.

use std::env;
use std::ffi::{OsStr, OsString};
use std::iter;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::env::builder;

/// Vars the venv must shadow; a stray PYTHONHOME would repoint the stdlib.
const REMOVED_VARS: &[&str] = &["PYTHONHOME"];

/// Child-process environment that makes command resolution prefer the
/// isolated environment over system-wide installs.
#[derive(Debug, Clone)]
pub struct Activation {
    env_dir: PathBuf,
    python: PathBuf,
    vars: Vec<(OsString, OsString)>,
}

impl Activation {
    /// Build an activation for an existing environment, layering the venv's
    /// bin directory over the current process's search path.
    pub fn new(env_dir: &Path) -> Self {
        Self::with_search_path(env_dir, env::var_os("PATH").as_deref())
    }

    /// Same as [`Activation::new`] with the search path supplied by the caller.
    pub fn with_search_path(env_dir: &Path, current_path: Option<&OsStr>) -> Self {
        let bin_dir = if env_dir.join("Scripts").exists() {
            env_dir.join("Scripts")
        } else {
            env_dir.join("bin")
        };

        let python = builder::venv_python(env_dir)
            .unwrap_or_else(|| bin_dir.join("python"));

        let search_path = match current_path {
            Some(current) => {
                env::join_paths(iter::once(bin_dir.clone()).chain(env::split_paths(current)))
                    .unwrap_or_else(|_| bin_dir.clone().into_os_string())
            }
            None => bin_dir.clone().into_os_string(),
        };

        let mut vars: Vec<(OsString, OsString)> = vec![
            ("VIRTUAL_ENV".into(), env_dir.as_os_str().to_os_string()),
            ("PATH".into(), search_path),
        ];

        // Quiets the Tk deprecation banner the GUI otherwise prints on macOS.
        if cfg!(target_os = "macos") {
            vars.push(("TK_SILENCE_DEPRECATION".into(), "1".into()));
        }

        Self {
            env_dir: env_dir.to_path_buf(),
            python,
            vars,
        }
    }

    /// Interpreter inside the activated environment.
    pub fn python(&self) -> &Path {
        &self.python
    }

    /// The activated environment directory.
    pub fn env_dir(&self) -> &Path {
        &self.env_dir
    }

    /// Environment overrides carried by this activation.
    pub fn vars(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Apply the activation to a child command.
    pub fn apply(&self, cmd: &mut Command) {
        for name in REMOVED_VARS {
            cmd.env_remove(name);
        }
        for (k, v) in &self.vars {
            cmd.env(k, v);
        }
    }
}
