use std::sync::Arc;

use image::RgbaImage;

/// A single decoded frame of the turntable sequence, RGBA8.
#[derive(Clone, Debug)]
pub struct Frame {
    pub image: RgbaImage,
}

impl Frame {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Load state of one cache entry.
///
/// A slot only ever moves forward: `Unloaded` -> `Loading` -> `Loaded` or
/// `Failed`. Failed slots stay failed for the lifetime of the player.
#[derive(Clone, Debug, Default)]
pub enum FrameSlot {
    #[default]
    Unloaded,
    Loading,
    Loaded(Arc<Frame>),
    Failed,
}

impl FrameSlot {
    /// True once a load attempt for this slot has finished, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}
