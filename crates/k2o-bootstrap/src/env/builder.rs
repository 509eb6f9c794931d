//! Create the app's isolated Python environment if it does not exist yet.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::BootstrapError;
use crate::interpreter::InterpreterRef;

/// Fixed name of the isolated environment directory, adjacent to the launcher.
pub const ENV_DIR_NAME: &str = "venv";

/// Fixed name of the dependency manifest, read only at creation time.
pub const MANIFEST_NAME: &str = "requirements.txt";

/// Path of the isolated environment for a given app directory.
pub fn env_dir(app_dir: &Path) -> PathBuf {
    app_dir.join(ENV_DIR_NAME)
}

/// Interpreter inside an existing venv, if the venv looks materialized.
pub fn venv_python(env_path: &Path) -> Option<PathBuf> {
    let unix = env_path.join("bin").join("python");
    if unix.exists() {
        return Some(unix);
    }
    let windows = env_path.join("Scripts").join("python.exe");
    if windows.exists() {
        return Some(windows);
    }
    None
}

/// Ensure the isolated environment exists next to the app.
///
/// If the venv interpreter is already present the directory is trusted as-is:
/// no validation, no upgrade, no diff against the manifest. Otherwise the
/// environment is created with the given interpreter and the manifest is
/// installed into it. Must be called before building an `Activation`.
pub fn ensure_environment(
    app_dir: &Path,
    interpreter: &InterpreterRef,
) -> Result<PathBuf, BootstrapError> {
    let env_path = env_dir(app_dir);

    if venv_python(&env_path).is_some() {
        tracing::debug!(env = %env_path.display(), "Reusing existing virtualenv");
        return Ok(env_path);
    }

    create_venv(app_dir, interpreter, &env_path)?;
    install_manifest(app_dir, &env_path)?;

    Ok(env_path)
}

fn create_venv(
    app_dir: &Path,
    interpreter: &InterpreterRef,
    env_path: &Path,
) -> Result<(), BootstrapError> {
    tracing::info!(
        interpreter = %interpreter.path.display(),
        env = %env_path.display(),
        "Creating virtualenv"
    );

    let out = Command::new(&interpreter.path)
        .arg("-m")
        .arg("venv")
        .arg(env_path)
        .current_dir(app_dir)
        .output()
        .map_err(|source| BootstrapError::Spawn {
            program: interpreter.path.clone(),
            source,
        })?;

    if !out.status.success() {
        return Err(BootstrapError::EnvCreate {
            code: out.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }

    Ok(())
}

fn install_manifest(app_dir: &Path, env_path: &Path) -> Result<(), BootstrapError> {
    let manifest = app_dir.join(MANIFEST_NAME);
    if !manifest.exists() {
        tracing::debug!(manifest = %manifest.display(), "No dependency manifest, skipping install");
        return Ok(());
    }

    let pip_bin = env_path.join("bin").join("pip");
    let pip_scripts = env_path.join("Scripts").join("pip.exe");
    let pip = if pip_bin.exists() {
        pip_bin
    } else if pip_scripts.exists() {
        pip_scripts
    } else {
        // fallback: python -m pip
        env_path.join("bin").join("python")
    };

    tracing::info!(manifest = %manifest.display(), "Installing dependencies");

    let mut cmd = if pip.file_name().map(|n| n == "python").unwrap_or(false) {
        let mut c = Command::new(&pip);
        c.arg("-m").arg("pip").arg("install");
        c
    } else {
        let mut c = Command::new(&pip);
        c.arg("install");
        c
    };
    let out = cmd
        .arg("-r")
        .arg(&manifest)
        .current_dir(app_dir)
        .output()
        .map_err(|source| BootstrapError::Spawn {
            program: pip.clone(),
            source,
        })?;

    if !out.status.success() {
        return Err(BootstrapError::PipInstall {
            code: out.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }

    Ok(())
}
