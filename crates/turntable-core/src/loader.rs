use rayon::prelude::*;

use crate::error::Result;
use crate::frame::Frame;
use crate::sequence::SequenceSpec;

/// Decode a single frame to RGBA8.
pub fn load_frame(spec: &SequenceSpec, index: usize) -> Result<Frame> {
    let path = spec.frame_path(index)?;
    let image = image::open(&path)?.to_rgba8();
    Ok(Frame::new(image))
}

/// Outcome summary of a preload batch.
#[derive(Clone, Debug)]
pub struct PreloadReport {
    /// Frames the batch attempted (all but frame 0).
    pub attempted: usize,
    /// Indices whose load failed, in ascending order.
    pub failed: Vec<usize>,
}

impl PreloadReport {
    pub fn loaded(&self) -> usize {
        self.attempted - self.failed.len()
    }
}

/// Load frames 1..N-1 across the Rayon thread pool.
///
/// Frame 0 is the caller's responsibility: it is loaded eagerly before the
/// batch so there is visible content while the rest streams in.
///
/// `on_settled` fires exactly once per frame, in whatever order the pool
/// finishes them. Individual failures never abort the batch; they are
/// reported through the callback and collected in the returned report, and
/// counting them as settled keeps progress moving to 100%.
pub fn preload_rest<F>(spec: &SequenceSpec, on_settled: F) -> PreloadReport
where
    F: Fn(usize, Result<Frame>) + Sync,
{
    if spec.count <= 1 {
        return PreloadReport {
            attempted: 0,
            failed: Vec::new(),
        };
    }

    let mut failed: Vec<usize> = (1..spec.count)
        .into_par_iter()
        .filter_map(|index| {
            let outcome = load_frame(spec, index);
            let is_err = outcome.is_err();
            on_settled(index, outcome);
            is_err.then_some(index)
        })
        .collect();
    failed.sort_unstable();

    PreloadReport {
        attempted: spec.count - 1,
        failed,
    }
}
