//! Frame types for the capture preview.
//!
//! A [`Frame`] is one owned RGB8 bitmap pulled from a frame source. It is
//! short-lived: the preview loop pulls a frame and immediately draws it
//! onto the render target.

use image::{DynamicImage, RgbImage};

use crate::error::{Error, Result};

/// A single captured video frame.
///
/// Pixel data is RGB8, row-major, tightly packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: RgbImage,
}

impl Frame {
    /// Create a frame from raw RGB8 bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` does not hold exactly
    /// `width * height * 3` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        let actual = data.len();
        let pixels =
            RgbImage::from_raw(width, height, data).ok_or(Error::FrameSizeMismatch {
                expected,
                actual,
            })?;
        Ok(Self { pixels })
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, image::Rgb(color)),
        }
    }

    /// Create a frame from a decoded image, converting to RGB8.
    #[must_use]
    pub fn from_image(image: &DynamicImage) -> Self {
        Self {
            pixels: image.to_rgb8(),
        }
    }

    /// Width of the frame in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height of the frame in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the underlying pixel buffer.
    #[must_use]
    pub fn as_image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Consume the frame, yielding the pixel buffer.
    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.pixels
    }
}
