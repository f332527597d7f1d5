//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Listen address override (e.g. 0.0.0.0:8087)
    #[arg(short, long)]
    pub listen: Option<String>,
}

/// Preview command arguments.
#[derive(Debug, Args)]
pub struct PreviewCommand {
    /// Stop after this many snapshot ticks (runs until interrupted if omitted)
    #[arg(short, long)]
    pub ticks: Option<u64>,

    /// Frame source to preview
    #[arg(short, long, value_enum, default_value = "pattern")]
    pub source: SourceArg,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Frame source argument for the preview command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceArg {
    /// Synthetic moving gradient
    #[default]
    Pattern,
    /// Video device camera
    Camera,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_arg_default() {
        assert_eq!(SourceArg::default(), SourceArg::Pattern);
    }

    #[test]
    fn test_serve_command_debug() {
        let cmd = ServeCommand {
            listen: Some("0.0.0.0:9000".to_string()),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("listen"));
        assert!(debug_str.contains("9000"));
    }

    #[test]
    fn test_preview_command_debug() {
        let cmd = PreviewCommand {
            ticks: Some(5),
            source: SourceArg::Pattern,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("ticks"));
    }

    #[test]
    fn test_status_command_debug() {
        let cmd = StatusCommand { json: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("json"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_source_arg_clone() {
        let arg = SourceArg::Camera;
        let cloned = arg;
        assert_eq!(arg, cloned);
    }
}
