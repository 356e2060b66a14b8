use posewave_pose::PoseFrame;
use std::collections::VecDeque;

/// Sliding window of the most recent pose frames.
///
/// Never holds more than `capacity` frames: the oldest frame is evicted before
/// a new one is stored.
#[derive(Debug, Clone)]
pub struct PoseHistory {
    frames: VecDeque<PoseFrame>,
    capacity: usize,
}

impl PoseHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, frame: PoseFrame) {
        if self.capacity == 0 {
            return;
        }
        while self.frames.len() >= self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() == self.capacity
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &PoseFrame> {
        self.frames.iter()
    }
}
