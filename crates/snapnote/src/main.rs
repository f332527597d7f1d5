//! `snapnote` - CLI for the capture preview and the text ingest endpoint.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::sync::Arc;

use clap::Parser;

use snapnote::cli::{Cli, Command, ConfigCommand, PreviewCommand, ServeCommand, SourceArg};
use snapnote::preview::{Preview, PreviewOptions};
use snapnote::source::{FrameSource, PatternSource};
use snapnote::storage::TextStore;
use snapnote::{init_logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Serve(cmd) => handle_serve(&config, &cmd).await,
        Command::Preview(cmd) => handle_preview(&config, &cmd).await,
        Command::Status(cmd) => handle_status(&config, cmd.json).await,
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

async fn handle_serve(config: &Config, cmd: &ServeCommand) -> anyhow::Result<()> {
    let addr = match &cmd.listen {
        Some(listen) => listen.parse()?,
        None => config.listen_addr()?,
    };

    let store = TextStore::open(config.storage_path()).await?;
    snapnote::ingest::serve(addr, Arc::new(store)).await?;
    Ok(())
}

async fn handle_preview(config: &Config, cmd: &PreviewCommand) -> anyhow::Result<()> {
    let options = PreviewOptions {
        frame_width: config.capture.frame_width,
        frame_height: config.capture.frame_height,
        snapshot_interval: config.snapshot_interval(),
        image_path: Some(config.capture.image_path.clone()),
    };

    let source: Box<dyn FrameSource> = match cmd.source {
        SourceArg::Pattern => Box::new(PatternSource::new(
            config.capture.frame_width,
            config.capture.frame_height,
        )),
        SourceArg::Camera => camera_source(config)?,
    };

    let mut preview = Preview::new(source, options);
    preview.run(cmd.ticks).await?;

    println!(
        "Preview finished: {} ({}x{})",
        preview.target().state(),
        preview.target().width(),
        preview.target().height()
    );
    Ok(())
}

#[cfg(all(feature = "v4l2-camera", target_os = "linux"))]
fn camera_source(config: &Config) -> anyhow::Result<Box<dyn FrameSource>> {
    Ok(Box::new(snapnote::source::v4l2::V4l2Source::new(
        config.capture.device.clone(),
        config.capture.frame_width,
        config.capture.frame_height,
    )))
}

#[cfg(not(all(feature = "v4l2-camera", target_os = "linux")))]
fn camera_source(_config: &Config) -> anyhow::Result<Box<dyn FrameSource>> {
    anyhow::bail!("camera support requires the v4l2-camera feature on Linux")
}

async fn handle_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let store = TextStore::open(config.storage_path()).await?;
    let stats = store.stats().await?;

    if json {
        let status = serde_json::json!({
            "storage_path": store.path(),
            "records": stats.records,
            "size_bytes": stats.size_bytes,
            "last_append": stats.modified.map(|t| t.to_rfc3339()),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("snapnote status");
        println!("---------------");
        println!("Storage file:  {}", store.path().display());
        println!("Records:       {}", stats.records);
        println!("Size (bytes):  {}", stats.size_bytes);
        match stats.modified {
            Some(modified) => println!("Last write:    {modified}"),
            None => println!("Last write:    never"),
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Listen address:     {}", config.server.listen);
                println!();
                println!("[Capture]");
                println!(
                    "  Snapshot interval:  {} ms",
                    config.capture.snapshot_interval_ms
                );
                println!(
                    "  Frame size:         {}x{}",
                    config.capture.frame_width, config.capture.frame_height
                );
                println!("  Image path:         {}", config.capture.image_path.display());
                println!("  Device:             {}", config.capture.device.display());
                println!();
                println!("[Storage]");
                println!("  Path:               {}", config.storage_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
