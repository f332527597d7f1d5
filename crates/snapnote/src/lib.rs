//! `snapnote` - camera preview snapshots and flat-file text ingest
//!
//! This library provides two independent components deployed side by
//! side: a capture preview that periodically draws a frame source onto
//! an owned in-memory render target, and an HTTP endpoint that appends
//! the `text` field of JSON payloads to an append-only flat file.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod ingest;
pub mod logging;
pub mod preview;
pub mod render;
pub mod source;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use frame::Frame;
pub use logging::init_logging;
pub use preview::{Preview, PreviewHandle, PreviewOptions};
pub use render::{RenderTarget, SourceState};
pub use source::{FrameSource, PatternSource};
pub use storage::{StoreStats, TextStore};
