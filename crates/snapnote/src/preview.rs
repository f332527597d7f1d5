//! The capture preview service.
//!
//! Owns the render target and a frame source. At startup it draws the
//! configured static image (when present), then acquires the source and
//! redraws the target with the source's current frame on a fixed
//! interval. Acquisition failure is logged and leaves the target as the
//! image path left it; there is no retry and no other writer.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::render::RenderTarget;
use crate::source::FrameSource;

/// Options for a preview run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Initial render target width in pixels.
    pub frame_width: u32,
    /// Initial render target height in pixels.
    pub frame_height: u32,
    /// Interval between live frame snapshots.
    pub snapshot_interval: Duration,
    /// Static image drawn at startup, if any.
    pub image_path: Option<PathBuf>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            frame_width: 640,
            frame_height: 480,
            snapshot_interval: Duration::from_millis(2000),
            image_path: Some(PathBuf::from("img3.jpg")),
        }
    }
}

/// A cloneable handle used to stop a running preview.
#[derive(Debug, Clone, Default)]
pub struct PreviewHandle {
    stop: Arc<AtomicBool>,
}

impl PreviewHandle {
    /// Create a new handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal the preview loop to stop.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Check if the stop signal has been sent.
    #[must_use]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}

/// The capture preview service.
pub struct Preview {
    target: RenderTarget,
    source: Box<dyn FrameSource>,
    options: PreviewOptions,
    handle: PreviewHandle,
}

impl fmt::Debug for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preview")
            .field("source", &self.source.name())
            .field("target", &self.target.state())
            .field("options", &self.options)
            .finish()
    }
}

impl Preview {
    /// Create a preview over the given source.
    ///
    /// The render target starts blank at the configured frame size.
    #[must_use]
    pub fn new(source: Box<dyn FrameSource>, options: PreviewOptions) -> Self {
        let target = RenderTarget::new(options.frame_width, options.frame_height);
        Self {
            target,
            source,
            options,
            handle: PreviewHandle::new(),
        }
    }

    /// Get a handle that can stop this preview from another task.
    #[must_use]
    pub fn handle(&self) -> PreviewHandle {
        self.handle.clone()
    }

    /// The render target in its current state.
    #[must_use]
    pub fn target(&self) -> &RenderTarget {
        &self.target
    }

    /// Run the preview.
    ///
    /// Draws the startup image, acquires the source, then snapshots the
    /// source onto the render target every interval until the stop
    /// handle fires or the optional tick limit is reached. Source
    /// acquisition failure ends the run without touching the target.
    ///
    /// # Errors
    ///
    /// Currently infallible at the loop level; per-tick read failures
    /// are logged and skipped.
    pub async fn run(&mut self, ticks: Option<u64>) -> Result<()> {
        if let Some(path) = self.options.image_path.clone() {
            self.show_startup_image(&path);
        }

        if let Err(e) = self.source.open().await {
            error!("error accessing camera: {e}");
            return Ok(());
        }

        info!(
            source = self.source.name(),
            interval_ms = self.options.snapshot_interval.as_millis() as u64,
            "starting snapshot loop"
        );

        let mut interval = tokio::time::interval(self.options.snapshot_interval);
        // tokio intervals fire immediately; swallow the first tick so the
        // first snapshot lands after one full period.
        interval.tick().await;

        let mut attempts: u64 = 0;
        loop {
            if ticks.is_some_and(|max| attempts >= max) {
                break;
            }
            if self.handle.should_stop() {
                break;
            }
            interval.tick().await;
            if self.handle.should_stop() {
                break;
            }
            match self.source.next_frame().await {
                Ok(frame) => {
                    self.target.show_live_frame(&frame);
                    debug!(
                        width = self.target.width(),
                        height = self.target.height(),
                        "drew live frame"
                    );
                }
                Err(e) => warn!("failed to read frame: {e}"),
            }
            attempts += 1;
        }

        self.source.close();
        info!(snapshots = attempts, "snapshot loop stopped");
        Ok(())
    }

    /// Draw the startup image onto the target at its natural size.
    ///
    /// Failure to load or decode is logged; the preview continues
    /// regardless, exactly like the camera path.
    fn show_startup_image(&mut self, path: &Path) {
        match image::open(path) {
            Ok(img) => {
                self.target.show_image(&img);
                info!(
                    path = %path.display(),
                    width = self.target.width(),
                    height = self.target.height(),
                    "drew startup image"
                );
            }
            Err(e) => {
                warn!(path = %path.display(), "could not load startup image: {e}");
            }
        }
    }
}
