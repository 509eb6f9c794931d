//! Delegated execution of the target app inside the activated environment.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::activation::Activation;
use crate::error::BootstrapError;

/// Run the target entry point with the caller's arguments forwarded verbatim.
///
/// Stdio is inherited and the call blocks until the target exits. The returned
/// code is the target's own exit status, unreinterpreted; the launcher is
/// expected to terminate with exactly this value.
pub fn execute(
    activation: &Activation,
    entry_point: &Path,
    args: &[OsString],
    cwd: &Path,
) -> Result<i32, BootstrapError> {
    tracing::info!(
        python = %activation.python().display(),
        entry = %entry_point.display(),
        argc = args.len(),
        "Delegating to target"
    );

    let mut cmd = Command::new(activation.python());
    cmd.arg(entry_point).args(args).current_dir(cwd);
    activation.apply(&mut cmd);

    let status = cmd.status().map_err(|source| BootstrapError::Spawn {
        program: activation.python().to_path_buf(),
        source,
    })?;

    Ok(exit_code(status))
}

/// Exit code for a finished child; death by signal maps to `128 + signal`,
/// matching shell convention.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}
