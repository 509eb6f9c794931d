use std::ffi::OsString;

use clap::Parser;

/// k2o — bootstrapping launcher for the Kindle-to-Obsidian app.
///
/// The launcher has no flags of its own: everything after the program name
/// belongs to the wrapped app and is forwarded untouched. Help and version
/// handling are disabled so that even `--help` reaches the target.
#[derive(Parser, Debug)]
#[command(name = "k2o")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments forwarded verbatim to the target application.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "ARGS"
    )]
    pub args: Vec<OsString>,
}
