//! Launcher configuration layer.
//!
//! All environment variable reads are centralized here; the pipeline code
//! consumes structured values instead of calling `std::env::var` directly.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Fixed entry point of the wrapped application, adjacent to the launcher.
pub const ENTRY_POINT_NAME: &str = "kindle_to_obsidian.py";

/// Read an env var, treating empty values as unset.
pub fn env_optional(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Read an env var with a default: 1/true/yes are true, 0/false/no/off false.
pub fn env_bool(name: &str, default: bool) -> bool {
    match env::var(name).ok().as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

/// Logging knobs, read once at startup.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self {
            quiet: env_bool("K2O_QUIET", false),
            log_level: env_optional("K2O_LOG_LEVEL").unwrap_or_else(|| "k2o=info".to_string()),
            log_json: env_bool("K2O_LOG_JSON", false),
        }
    }
}

/// Filesystem anchors of the launcher: the app directory holds the entry
/// point, the dependency manifest, and the `venv/` environment.
#[derive(Debug, Clone)]
pub struct LauncherPaths {
    pub app_dir: PathBuf,
}

impl LauncherPaths {
    /// App dir is where the launcher binary itself lives, overridable with
    /// `K2O_HOME` (useful when running via `cargo run` from target/).
    pub fn discover() -> Result<Self> {
        if let Some(home) = env_optional("K2O_HOME") {
            return Ok(Self {
                app_dir: PathBuf::from(home),
            });
        }
        let exe = env::current_exe().context("Locate launcher executable")?;
        let app_dir = exe
            .parent()
            .context("Launcher executable has no parent directory")?
            .to_path_buf();
        Ok(Self { app_dir })
    }

    pub fn entry_point(&self) -> PathBuf {
        self.app_dir.join(ENTRY_POINT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_bool_accepts_common_truthy_and_falsy_spellings() {
        env::set_var("K2O_TEST_BOOL", "yes");
        assert!(env_bool("K2O_TEST_BOOL", false));
        env::set_var("K2O_TEST_BOOL", "off");
        assert!(!env_bool("K2O_TEST_BOOL", true));
        env::remove_var("K2O_TEST_BOOL");
        assert!(env_bool("K2O_TEST_BOOL", true));
    }

    #[test]
    fn env_optional_treats_blank_as_unset() {
        env::set_var("K2O_TEST_OPT", "   ");
        assert_eq!(env_optional("K2O_TEST_OPT"), None);
        env::set_var("K2O_TEST_OPT", "value");
        assert_eq!(env_optional("K2O_TEST_OPT").as_deref(), Some("value"));
        env::remove_var("K2O_TEST_OPT");
    }

    #[test]
    fn entry_point_sits_next_to_the_app_dir() {
        let paths = LauncherPaths {
            app_dir: PathBuf::from("/opt/k2o"),
        };
        assert_eq!(
            paths.entry_point(),
            PathBuf::from("/opt/k2o").join(ENTRY_POINT_NAME)
        );
    }
}
