/// Width of the zero-padded frame number in file names (`male0001.png`).
pub const FRAME_NUMBER_PAD: usize = 4;

/// Fraction of the scrollable distance reserved at the bottom of the page,
/// during which the last frame stays pinned. The remaining distance scrubs
/// through the whole sequence.
pub const TAIL_HOLD_FRACTION: f64 = 0.15;

/// Pixels of page scroll corresponding to one frame of keyboard navigation.
pub const KEY_SCROLL_STEP_PX: f32 = 15.0;

/// Frames skipped by coarse keyboard navigation (PageUp/PageDown).
pub const COARSE_STEP_FRAMES: i64 = 10;

/// Frame rate of the auxiliary time-driven playback mode.
pub const PLAYBACK_FPS: f64 = 30.0;

/// Frame count of the reference turntable sequence.
pub const DEFAULT_FRAME_COUNT: usize = 300;

/// Default file-name prefix of the reference sequence.
pub const DEFAULT_PREFIX: &str = "male";

/// Default frame file extension.
pub const DEFAULT_EXTENSION: &str = "png";
