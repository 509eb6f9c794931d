mod cli;
mod config;
mod observability;

use std::ffi::OsString;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use k2o_bootstrap::activation::Activation;
use k2o_bootstrap::env::builder;
use k2o_bootstrap::{interpreter, runner, BootstrapError};

fn main() {
    observability::init_tracing();
    let cli = cli::Cli::parse();

    match run(cli.args) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("k2o: {:#}", err);
            process::exit(exit_code_for(&err));
        }
    }
}

/// The whole launcher: resolve -> ensure -> activate -> execute. Strictly
/// sequential; any failure halts the chain and the process terminates with
/// the underlying status.
fn run(args: Vec<OsString>) -> Result<i32> {
    let paths = config::LauncherPaths::discover().context("Locate app directory")?;
    let interpreter = interpreter::resolve();
    tracing::debug!(
        app_dir = %paths.app_dir.display(),
        interpreter = %interpreter.path.display(),
        source = ?interpreter.source,
        "Bootstrap starting"
    );
    let env_dir = builder::ensure_environment(&paths.app_dir, &interpreter)?;
    let activation = Activation::new(&env_dir);
    let code = runner::execute(&activation, &paths.entry_point(), &args, &paths.app_dir)?;
    Ok(code)
}

/// Setup failures exit with the failing step's own status; anything else is 1.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BootstrapError>()
        .map(BootstrapError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_failures_keep_the_step_exit_code() {
        let err = anyhow::Error::from(BootstrapError::EnvCreate {
            code: 2,
            stderr: String::new(),
        });
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn unclassified_errors_exit_with_one() {
        let err = anyhow::anyhow!("some launcher-side failure");
        assert_eq!(exit_code_for(&err), 1);
    }

    #[cfg(unix)]
    #[test]
    fn pipeline_skips_creation_and_delegates_when_env_exists() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join(builder::ENV_DIR_NAME).join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let python = bin.join("python");
        std::fs::write(&python, "#!/bin/sh\nexit 5\n").unwrap();
        std::fs::set_permissions(&python, std::fs::Permissions::from_mode(0o755)).unwrap();

        std::env::set_var("K2O_HOME", dir.path());
        let code = run(vec![OsString::from("--cli")]).unwrap();
        std::env::remove_var("K2O_HOME");

        assert_eq!(code, 5);
    }
}
