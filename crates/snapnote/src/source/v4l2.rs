//! Linux camera frame source backed by video4linux2.
//!
//! Pulls MJPG frames from a `/dev/video*` device and decodes them into
//! RGB frames. Compiled only on Linux with the `v4l2-camera` feature.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use v4l::buffer::Type;
use v4l::io::traits::CaptureStream;
use v4l::prelude::*;
use v4l::video::Capture;
use v4l::FourCC;

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::source::FrameSource;

const SOURCE_NAME: &str = "v4l2";

/// A frame source reading from a v4l2 video device.
pub struct V4l2Source {
    device_path: PathBuf,
    width: u32,
    height: u32,
    device: Option<Device>,
}

impl V4l2Source {
    /// Create a source for the given device path, requesting frames of
    /// the given size.
    #[must_use]
    pub fn new(device_path: PathBuf, width: u32, height: u32) -> Self {
        Self {
            device_path,
            width,
            height,
            device: None,
        }
    }

    /// The device path this source reads from.
    #[must_use]
    pub fn device_path(&self) -> &Path {
        &self.device_path
    }
}

impl fmt::Debug for V4l2Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("V4l2Source")
            .field("device_path", &self.device_path)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("open", &self.device.is_some())
            .finish()
    }
}

#[async_trait]
impl FrameSource for V4l2Source {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn is_open(&self) -> bool {
        self.device.is_some()
    }

    async fn open(&mut self) -> Result<()> {
        let device = Device::with_path(&self.device_path)
            .map_err(|e| Error::source_open(SOURCE_NAME, e.to_string()))?;

        let format = v4l::Format::new(self.width, self.height, FourCC::new(b"MJPG"));
        device
            .set_format(&format)
            .map_err(|e| Error::source_open(SOURCE_NAME, e.to_string()))?;

        self.device = Some(device);
        Ok(())
    }

    async fn next_frame(&mut self) -> Result<Frame> {
        let device = self
            .device
            .as_ref()
            .ok_or_else(|| Error::source_read(SOURCE_NAME, "source not open"))?;

        // The mmap stream borrows the device, so it is rebuilt per snapshot.
        let mut stream = MmapStream::with_buffers(device, Type::VideoCapture, 2)
            .map_err(|e| Error::source_read(SOURCE_NAME, e.to_string()))?;
        let (buf, _meta) = stream
            .next()
            .map_err(|e| Error::source_read(SOURCE_NAME, e.to_string()))?;

        let decoded = image::load_from_memory(buf)
            .map_err(|e| Error::source_read(SOURCE_NAME, e.to_string()))?;
        Ok(Frame::from_image(&decoded))
    }

    fn close(&mut self) {
        self.device = None;
    }
}
