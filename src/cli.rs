//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `dbfsctl`.
#[derive(Debug, Parser)]
#[command(name = "dbfsctl", version, about = "Manage files in Databricks DBFS")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a DBFS directory.
    List {
        /// DBFS path to list.
        path: String,
    },
    /// Upload a local file to the managed DBFS prefix.
    Push {
        /// Local file to mirror.
        local_path: PathBuf,
        /// md5 hash of the file contents, stored alongside the state.
        #[arg(long, default_value = "")]
        content_md5: String,
    },
    /// Refresh the stored state of a pushed file from the workspace.
    Refresh {
        /// Local file whose state should be refreshed.
        local_path: PathBuf,
    },
    /// Delete the remote mirror of a pushed file.
    Remove {
        /// Local file whose remote mirror should be deleted.
        local_path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_list_subcommand() {
        let cli = Cli::parse_from(["dbfsctl", "list", "/FileStore"]);
        assert!(matches!(cli.command, Command::List { path } if path == "/FileStore"));
    }

    #[test]
    fn parses_push_with_md5() {
        let cli = Cli::parse_from(["dbfsctl", "push", "lib.jar", "--content-md5", "abc123"]);
        match cli.command {
            Command::Push { local_path, content_md5 } => {
                assert_eq!(local_path.to_str(), Some("lib.jar"));
                assert_eq!(content_md5, "abc123");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn push_md5_defaults_to_empty() {
        let cli = Cli::parse_from(["dbfsctl", "push", "lib.jar"]);
        assert!(matches!(cli.command, Command::Push { content_md5, .. } if content_md5.is_empty()));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["dbfsctl", "unknown"]).is_err());
    }
}
