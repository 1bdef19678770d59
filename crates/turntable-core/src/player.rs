use crate::cache::FrameCache;
use crate::consts::PLAYBACK_FPS;
use crate::error::{Result, TurntableError};
use crate::frame::Frame;
use crate::scrub::{clamp_frame, map_scroll_to_frame, ScrollMetrics};
use crate::sequence::SequenceSpec;
use crate::surface::Surface;

/// The frame player: one sequence, one surface, one current frame.
///
/// The player exclusively owns its cache and playback index from creation
/// to teardown. All mutation goes through its operations; there are no
/// ambient globals. Load outcomes are fed in via [`Player::apply_load`] by
/// whoever performs the actual I/O (a worker thread in the GUI, inline code
/// in the CLI and tests), in any completion order.
pub struct Player {
    spec: SequenceSpec,
    cache: FrameCache,
    surface: Surface,
    current: usize,
    playing: bool,
    play_accum: f64,
    closed: bool,
    first_frame_error: Option<String>,
}

impl Player {
    /// Requires a positive frame count and a usable surface size.
    pub fn new(spec: SequenceSpec, width: u32, height: u32) -> Result<Self> {
        if spec.count == 0 {
            return Err(TurntableError::EmptySequence(spec.dir.clone()));
        }
        let surface = Surface::new(width, height)?;
        let cache = FrameCache::new(spec.count);
        Ok(Self {
            spec,
            cache,
            surface,
            current: 0,
            playing: false,
            play_accum: 0.0,
            closed: false,
            first_frame_error: None,
        })
    }

    pub fn spec(&self) -> &SequenceSpec {
        &self.spec
    }

    pub fn frame_count(&self) -> usize {
        self.spec.count
    }

    pub fn current_frame(&self) -> usize {
        self.current
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn cache(&self) -> &FrameCache {
        &self.cache
    }

    pub fn progress_percent(&self) -> u8 {
        self.cache.progress_percent()
    }

    /// True once every frame has settled (loaded or failed).
    pub fn is_ready(&self) -> bool {
        self.cache.is_complete()
    }

    /// The user-visible notice recorded when frame 0 failed to load.
    pub fn first_frame_error(&self) -> Option<&str> {
        self.first_frame_error.as_deref()
    }

    /// Feed one settled load into the cache.
    ///
    /// Outcomes arriving after teardown are discarded; the loader has no
    /// cancellation, so late completions must not touch a disposed player.
    /// Returns true when the outcome repainted the surface.
    pub fn apply_load(&mut self, index: usize, outcome: Result<Frame>) -> Result<bool> {
        if self.closed {
            tracing::debug!(index, "discarding load for torn-down player");
            return Ok(false);
        }
        if index == 0 {
            if let Err(ref err) = outcome {
                self.first_frame_error = Some(err.to_string());
            }
        }
        self.cache.insert_outcome(index, outcome)?;
        if index == self.current {
            return Ok(self.render());
        }
        Ok(false)
    }

    /// Draw the current frame, if it has loaded.
    ///
    /// Skips silently otherwise, leaving the previous surface contents in
    /// place; the surface is only cleared as part of an actual draw.
    pub fn render(&mut self) -> bool {
        match self.cache.get(self.current) {
            Some(frame) => {
                let frame = frame.clone();
                self.surface.draw_frame(&frame);
                true
            }
            None => {
                tracing::debug!(frame = self.current, "render skipped, frame not loaded");
                false
            }
        }
    }

    /// Clamp and jump to a frame. Returns true when the index changed.
    pub fn set_frame(&mut self, index: i64) -> bool {
        let clamped = clamp_frame(index, self.spec.count);
        let changed = clamped != self.current;
        self.current = clamped;
        self.render();
        changed
    }

    /// Keyboard navigation: move by `delta` frames, clamped.
    pub fn step(&mut self, delta: i64) -> bool {
        self.set_frame(self.current as i64 + delta)
    }

    /// Scrub to the frame mapped from the scroll position.
    ///
    /// A page that cannot scroll leaves the frame untouched; an unchanged
    /// mapping does not re-render.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        let scrollable = metrics.scrollable();
        if scrollable <= 0.0 {
            return false;
        }
        let mapped = map_scroll_to_frame(metrics.offset, scrollable, self.spec.count);
        if mapped == self.current {
            return false;
        }
        self.set_frame(mapped as i64)
    }

    /// Resize the surface and repaint the current frame.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.surface.resize(width, height)?;
        self.render();
        Ok(())
    }

    /// Toggle the auxiliary time-driven playback mode.
    pub fn toggle_play(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.playing = !self.playing;
        self.play_accum = 0.0;
        self.playing
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance time-driven playback by `dt` seconds, wrapping at the end.
    /// Returns true when the frame changed.
    pub fn advance(&mut self, dt: f64) -> bool {
        if !self.playing || self.spec.count == 0 {
            return false;
        }
        self.play_accum += dt * PLAYBACK_FPS;
        let steps = self.play_accum.floor() as i64;
        if steps < 1 {
            return false;
        }
        self.play_accum -= steps as f64;
        let next = (self.current as i64 + steps).rem_euclid(self.spec.count as i64);
        let changed = next as usize != self.current;
        self.current = next as usize;
        self.render();
        changed
    }

    /// Release the player. Idempotent; later load completions are ignored.
    pub fn teardown(&mut self) {
        self.playing = false;
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
