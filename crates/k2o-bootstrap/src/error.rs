//! Bootstrap failures that carry the underlying step's exit status.
//!
//! The launcher's own exit code must equal the failing step's exit code, so
//! venv creation and pip install errors keep the child status instead of
//! flattening everything to 1.

use std::path::PathBuf;

/// Errors from environment provisioning and target execution.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The interpreter (or pip) could not be spawned at all — typically the
    /// fallback interpreter is missing from PATH. Surfaces only at invocation
    /// time, never during resolution.
    #[error("failed to invoke {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `python -m venv` exited non-zero. Fatal, no retry.
    #[error("virtualenv creation failed (exit code {code}): {stderr}")]
    EnvCreate { code: i32, stderr: String },

    /// `pip install -r requirements.txt` exited non-zero. Fatal, no retry;
    /// the env directory is left as-is (possibly partially initialized).
    #[error("dependency install failed (exit code {code}): {stderr}")]
    PipInstall { code: i32, stderr: String },
}

impl BootstrapError {
    /// Exit status the launcher should terminate with for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            BootstrapError::Spawn { .. } => 127,
            BootstrapError::EnvCreate { code, .. } | BootstrapError::PipInstall { code, .. } => {
                *code
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_follows_failing_step() {
        let err = BootstrapError::EnvCreate {
            code: 3,
            stderr: String::new(),
        };
        assert_eq!(err.exit_code(), 3);

        let err = BootstrapError::PipInstall {
            code: 1,
            stderr: "No matching distribution".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn spawn_failure_uses_command_not_found_convention() {
        let err = BootstrapError::Spawn {
            program: PathBuf::from("python3"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 127);
    }
}
