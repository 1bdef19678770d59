use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::{Result, TurntableError};
use crate::frame::Frame;

/// The 2D raster surface frames are painted onto.
///
/// The equivalent of the viewport-sized canvas: an RGBA8 buffer that is
/// cleared to transparent black and repainted with the current frame,
/// scaled to fit with aspect ratio preserved.
#[derive(Clone, Debug)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Allocate a surface. Zero-area surfaces cannot be acquired.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TurntableError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
    }

    /// Clear, then draw `frame` scaled by min(sw/iw, sh/ih) and centered.
    pub fn draw_frame(&mut self, frame: &Frame) {
        self.clear();

        let (sw, sh) = (self.width() as f64, self.height() as f64);
        let (iw, ih) = (frame.width() as f64, frame.height() as f64);
        if iw == 0.0 || ih == 0.0 {
            return;
        }

        let scale = (sw / iw).min(sh / ih);
        let tw = ((iw * scale).round() as u32).max(1);
        let th = ((ih * scale).round() as u32).max(1);

        let scaled = if (tw, th) == (frame.width(), frame.height()) {
            frame.image.clone()
        } else {
            imageops::resize(&frame.image, tw, th, FilterType::Triangle)
        };

        let x = (self.width() as i64 - tw as i64) / 2;
        let y = (self.height() as i64 - th as i64) / 2;
        imageops::overlay(&mut self.pixels, &scaled, x, y);
    }

    /// Reallocate to new dimensions. The caller re-renders afterwards.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(TurntableError::InvalidDimensions { width, height });
        }
        if (width, height) != (self.width(), self.height()) {
            self.pixels = RgbaImage::new(width, height);
        }
        Ok(())
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixels.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }
}
