use crate::{Keypoint, KeypointIndex, COCO_KEYPOINT_COUNT};
use posewave_base::Vec2;

/// The tracked person of one frame, as handed to gesture detectors.
///
/// Points are normalized to [0, 1] with a top-left origin; missing joints keep
/// the sentinel `(-1, -1)` with confidence 0. `PoseFrame` is `Copy`, so a
/// detector that keeps history stores its own copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseFrame {
    pub points: [Vec2<f32>; COCO_KEYPOINT_COUNT],
    pub confidences: [f32; COCO_KEYPOINT_COUNT],
    /// Strictly increasing across frames delivered to one engine
    pub frame_id: u64,
}

impl PoseFrame {
    /// Normalize model-space keypoints by the model input size
    pub fn from_keypoints(
        keypoints: &[Keypoint; COCO_KEYPOINT_COUNT],
        input_size: Vec2<f32>,
        frame_id: u64,
    ) -> Self {
        Self {
            points: std::array::from_fn(|k| {
                let keypoint = &keypoints[k];
                if keypoint.is_valid() {
                    keypoint.position / input_size
                } else {
                    Vec2::SENTINEL
                }
            }),
            confidences: std::array::from_fn(|k| keypoints[k].score),
            frame_id,
        }
    }

    pub fn point(&self, index: KeypointIndex) -> Vec2<f32> {
        self.points[usize::from(index)]
    }

    pub fn confidence(&self, index: KeypointIndex) -> f32 {
        self.confidences[usize::from(index)]
    }

    /// Confident enough and inside the frame. Sentinel points are never present.
    pub fn is_present(&self, index: KeypointIndex, min_confidence: f32) -> bool {
        let point = self.point(index);
        self.confidence(index) >= min_confidence && point.x >= 0.0 && point.y >= 0.0
    }
}
