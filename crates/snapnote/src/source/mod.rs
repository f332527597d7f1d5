//! Frame sources for the capture preview.
//!
//! A [`FrameSource`] is the seam between the preview loop and whatever
//! produces video frames. Opening a source is where acquisition can be
//! refused (no device, no permission); once open, the loop pulls the
//! current frame on every snapshot tick.

#[cfg(all(feature = "v4l2-camera", target_os = "linux"))]
pub mod v4l2;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::frame::Frame;

/// A source of video frames.
#[async_trait]
pub trait FrameSource: Send {
    /// The name of this frame source (for logging/diagnostics).
    fn name(&self) -> &'static str;

    /// Check if the source has been opened.
    fn is_open(&self) -> bool;

    /// Acquire the underlying device or stream.
    ///
    /// # Errors
    ///
    /// Returns an error if acquisition is refused, such as when the
    /// device is missing or access is denied.
    async fn open(&mut self) -> Result<()>;

    /// Pull the source's current frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not open or the read fails.
    async fn next_frame(&mut self) -> Result<Frame>;

    /// Release the underlying device or stream.
    fn close(&mut self);
}

/// A synthetic frame source producing a moving gradient.
///
/// Always opens successfully. Each pulled frame shifts the gradient, so
/// consecutive frames differ; useful for camera-less runs and tests.
#[derive(Debug, Clone)]
pub struct PatternSource {
    width: u32,
    height: u32,
    tick: u64,
    open: bool,
}

impl PatternSource {
    /// Create a pattern source producing frames of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tick: 0,
            open: false,
        }
    }

    fn render_tick(&self) -> Frame {
        let (w, h) = (self.width, self.height);
        let shift = (self.tick % 256) as u8;
        let mut data = Vec::with_capacity(w as usize * h as usize * 3);
        for y in 0..h {
            for x in 0..w {
                let r = ((x * 255) / w.max(1)) as u8;
                let g = ((y * 255) / h.max(1)) as u8;
                data.extend_from_slice(&[r.wrapping_add(shift), g, shift]);
            }
        }
        // Length is exact by construction.
        Frame::new(w, h, data).unwrap_or_else(|_| Frame::filled(w, h, [0, 0, 0]))
    }
}

#[async_trait]
impl FrameSource for PatternSource {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn is_open(&self) -> bool {
        self.open
    }

    async fn open(&mut self) -> Result<()> {
        self.open = true;
        Ok(())
    }

    async fn next_frame(&mut self) -> Result<Frame> {
        if !self.open {
            return Err(Error::source_read(self.name(), "source not open"));
        }
        let frame = self.render_tick();
        self.tick += 1;
        Ok(frame)
    }

    fn close(&mut self) {
        self.open = false;
    }
}
