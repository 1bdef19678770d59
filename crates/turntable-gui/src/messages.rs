use std::path::PathBuf;

use turntable_core::error::Result;
use turntable_core::frame::Frame;
use turntable_core::loader::PreloadReport;
use turntable_core::sequence::{SequenceInfo, SequenceSpec};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Discover a sequence in `dir` and start loading it: frame 0 eagerly,
    /// the rest as a background batch.
    OpenSequence { dir: PathBuf, prefix: String },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    SequenceOpened {
        spec: SequenceSpec,
        /// Absent when the first frame's header could not be read; the
        /// player still mounts and surfaces the failure itself.
        info: Option<SequenceInfo>,
    },

    /// One frame load settled. Batch results arrive in whatever order the
    /// thread pool finishes them.
    FrameSettled {
        index: usize,
        outcome: Result<Frame>,
    },

    /// The background batch has settled every frame.
    PreloadFinished { report: PreloadReport },

    Error { message: String },
    Log { message: String },
}
