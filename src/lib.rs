//! Provider-style manager for files in Databricks DBFS.
//!
//! The crate mirrors local files to a fixed DBFS prefix over the workspace
//! REST API and tracks their remote state. The shape follows a plugin
//! provider: a [`provider::Provider`] validates credentials once and issues
//! a shared [`provider::ClientSecretCredential`], a directory-listing
//! [`datasource::DbfsListDataSource`] and a file-lifecycle
//! [`resource::DbfsFileResource`] implement the [`lifecycle`] traits, and the
//! command layer plays the host that dispatches them.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod datasource;
pub mod dbfs;
pub mod diagnostics;
pub mod lifecycle;
pub mod ports;
pub mod provider;
pub mod resource;
pub mod store;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution
/// fails.
pub async fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command).await
}
