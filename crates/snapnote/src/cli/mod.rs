//! Command-line interface for snapnote.
//!
//! This module provides the CLI structure and command handlers for the
//! `snapnote` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, PreviewCommand, ServeCommand, SourceArg, StatusCommand};

/// snapnote - camera preview snapshots and flat-file text ingest
///
/// Runs either the capture preview (periodic snapshots of a frame source
/// onto an in-memory render target) or the text ingest endpoint (JSON in,
/// newline-prefixed records out to a flat file).
#[derive(Debug, Parser)]
#[command(name = "snapnote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the text ingest endpoint
    Serve(ServeCommand),

    /// Run the capture preview
    Preview(PreviewCommand),

    /// Show storage statistics
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "snapnote");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: true,
            command: Command::Status(StatusCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let cli = Cli {
            config: None,
            verbose: 0,
            quiet: false,
            command: Command::Status(StatusCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose_and_trace() {
        let cli = Cli {
            config: None,
            verbose: 1,
            quiet: false,
            command: Command::Status(StatusCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli {
            config: None,
            verbose: 2,
            quiet: false,
            command: Command::Status(StatusCommand { json: false }),
        };
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_serve() {
        let args = vec!["snapnote", "serve"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(cli.command, Command::Serve(_)));
    }

    #[test]
    fn test_parse_serve_with_listen() {
        let args = vec!["snapnote", "serve", "--listen", "0.0.0.0:9000"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Serve(cmd) => assert_eq!(cmd.listen, Some("0.0.0.0:9000".to_string())),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_preview_with_ticks() {
        let args = vec!["snapnote", "preview", "--ticks", "3"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Preview(cmd) => {
                assert_eq!(cmd.ticks, Some(3));
                assert_eq!(cmd.source, SourceArg::Pattern);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_preview_camera_source() {
        let args = vec!["snapnote", "preview", "--source", "camera"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Preview(cmd) => assert_eq!(cmd.source, SourceArg::Camera),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_status_json() {
        let args = vec!["snapnote", "status", "--json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Status(cmd) => assert!(cmd.json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_show() {
        let args = vec!["snapnote", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { .. })
        ));
    }

    #[test]
    fn test_parse_with_config_path() {
        let args = vec!["snapnote", "-c", "/custom/config.toml", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let args = vec!["snapnote", "-v", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_with_quiet() {
        let args = vec!["snapnote", "-q", "status"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.quiet);
    }
}
