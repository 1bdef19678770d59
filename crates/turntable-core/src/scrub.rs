use crate::consts::TAIL_HOLD_FRACTION;

/// Scroll geometry reported by the hosting scroll container.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollMetrics {
    /// Current scroll offset from the top, in pixels.
    pub offset: f64,
    /// Total content height, in pixels.
    pub content_height: f64,
    /// Visible viewport height, in pixels.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Distance the page can actually scroll.
    pub fn scrollable(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// Map a scroll offset to a frame index.
///
/// The last `TAIL_HOLD_FRACTION` of the scrollable distance pins the final
/// frame, so the animation finishes before the page's last fold; the rest
/// interpolates linearly as floor(fraction * (N-1)). The result is always
/// within [0, N-1]: negative offsets map to 0, overshoot to the last frame.
/// A page that cannot scroll maps everything to frame 0.
pub fn map_scroll_to_frame(offset: f64, scrollable: f64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let last = frame_count - 1;
    if scrollable <= 0.0 {
        return 0;
    }

    let offset = offset.max(0.0);
    let scrub_span = scrollable * (1.0 - TAIL_HOLD_FRACTION);
    let fraction = if offset >= scrub_span {
        1.0
    } else {
        (offset / scrub_span).min(1.0)
    };

    ((fraction * last as f64).floor() as usize).min(last)
}

/// Clamp a signed frame index into [0, N-1].
pub fn clamp_frame(index: i64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    index.clamp(0, frame_count as i64 - 1) as usize
}
