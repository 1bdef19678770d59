use std::sync::Arc;

use crate::error::{Result, TurntableError};
use crate::frame::{Frame, FrameSlot};

/// Per-frame load states and progress counters for one sequence.
///
/// The cache holds exactly one slot per frame and is owned by a single
/// player for its lifetime. Loaded frames are kept until the player goes
/// away; there is no eviction. Outcomes may be inserted in any order;
/// background preloading settles frames as the thread pool finishes them.
#[derive(Debug)]
pub struct FrameCache {
    slots: Vec<FrameSlot>,
}

impl FrameCache {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![FrameSlot::Unloaded; count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<&FrameSlot> {
        self.slots.get(index)
    }

    /// The frame at `index`, if its load has succeeded.
    pub fn get(&self, index: usize) -> Option<&Arc<Frame>> {
        match self.slots.get(index) {
            Some(FrameSlot::Loaded(frame)) => Some(frame),
            _ => None,
        }
    }

    pub fn mark_loading(&mut self, index: usize) -> Result<()> {
        let slot = self.slot_mut(index)?;
        if matches!(slot, FrameSlot::Unloaded) {
            *slot = FrameSlot::Loading;
        }
        Ok(())
    }

    /// Record one settled load. A failure marks the slot permanently
    /// `Failed`; it still counts toward settled progress.
    pub fn insert_outcome(&mut self, index: usize, outcome: Result<Frame>) -> Result<()> {
        let slot = self.slot_mut(index)?;
        match outcome {
            Ok(frame) => *slot = FrameSlot::Loaded(Arc::new(frame)),
            Err(err) => {
                tracing::warn!(index, error = %err, "frame load failed");
                *slot = FrameSlot::Failed;
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, index: usize, frame: Arc<Frame>) -> Result<()> {
        let slot = self.slot_mut(index)?;
        *slot = FrameSlot::Loaded(frame);
        Ok(())
    }

    pub fn insert_failure(&mut self, index: usize) -> Result<()> {
        let slot = self.slot_mut(index)?;
        *slot = FrameSlot::Failed;
        Ok(())
    }

    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_loaded()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, FrameSlot::Failed))
            .count()
    }

    pub fn settled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_settled()).count()
    }

    /// Load progress as an integer percentage. Failed frames count as
    /// settled, so the batch always reaches 100%.
    pub fn progress_percent(&self) -> u8 {
        if self.slots.is_empty() {
            return 100;
        }
        (self.settled_count() * 100 / self.slots.len()) as u8
    }

    /// True once every slot has settled (loaded or failed).
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.is_settled())
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut FrameSlot> {
        let total = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(TurntableError::FrameIndexOutOfRange { index, total })
    }
}
