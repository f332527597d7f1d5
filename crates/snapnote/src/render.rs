//! The render target for the capture preview.
//!
//! [`RenderTarget`] is the in-memory drawing surface the preview writes
//! onto: either the static image at its natural size, or the latest live
//! frame scaled to the surface's current size. The surface records which
//! kind of content it currently shows, and exactly one writer (the
//! preview loop) mutates it.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use crate::frame::Frame;

/// What the render target currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceState {
    /// Nothing has been drawn; the surface is blank.
    Idle,
    /// The static image was drawn at its natural size.
    ShowingImage,
    /// The most recent live frame was drawn, scaled to the surface.
    ShowingLiveFrame,
}

impl std::fmt::Display for SourceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::ShowingImage => write!(f, "showing_image"),
            Self::ShowingLiveFrame => write!(f, "showing_live_frame"),
        }
    }
}

/// An owned in-memory drawing surface.
///
/// Starts blank at a fixed size. Drawing the static image resizes the
/// surface to the image's natural dimensions; drawing a live frame keeps
/// the current dimensions and scales the frame to fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    surface: RgbImage,
    state: SourceState,
}

impl RenderTarget {
    /// Create a blank render target of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: RgbImage::new(width, height),
            state: SourceState::Idle,
        }
    }

    /// Current width of the surface in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    /// Current height of the surface in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// What the surface currently shows.
    #[must_use]
    pub fn state(&self) -> SourceState {
        self.state
    }

    /// Borrow the surface pixels.
    #[must_use]
    pub fn surface(&self) -> &RgbImage {
        &self.surface
    }

    /// Draw a decoded image at the origin, resizing the surface to the
    /// image's natural dimensions first.
    pub fn show_image(&mut self, image: &DynamicImage) {
        self.surface = image.to_rgb8();
        self.state = SourceState::ShowingImage;
    }

    /// Draw a live frame scaled to the surface's current dimensions.
    ///
    /// The surface keeps its size; the frame is stretched or shrunk to
    /// cover it entirely.
    pub fn show_live_frame(&mut self, frame: &Frame) {
        let (width, height) = (self.surface.width(), self.surface.height());
        if frame.width() == width && frame.height() == height {
            self.surface = frame.as_image().clone();
        } else {
            self.surface = imageops::resize(frame.as_image(), width, height, FilterType::Triangle);
        }
        self.state = SourceState::ShowingLiveFrame;
    }
}
