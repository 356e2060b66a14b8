use crate::TensorView;
use posewave_base::{Rect, Vec2};

pub const BOX_CX_CHANNEL: usize = 0;
pub const BOX_CY_CHANNEL: usize = 1;
pub const BOX_W_CHANNEL: usize = 2;
pub const BOX_H_CHANNEL: usize = 3;
pub const CONFIDENCE_CHANNEL: usize = 4;

/// One output slot whose confidence cleared the threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionCandidate {
    /// Candidate index in the output tensor
    pub source_index: usize,
    /// In `[conf_threshold, 1]`
    pub confidence: f32,
    /// Model-space pixels, top-left origin
    pub bbox: Rect<f32>,
}

/// Shared by decoding and best-pose selection so both paths rank the same scores
pub(crate) fn is_accepted(confidence: f32, conf_threshold: f32) -> bool {
    (conf_threshold..=1.0).contains(&confidence)
}

/// Collect every candidate with confidence `>= conf_threshold`, in tensor order.
///
/// Confidences outside `[conf_threshold, 1]`, NaN included, are skipped.
/// Box fields are `(cx, cy, w, h)` and come out as top-left origin + size.
pub fn decode_candidates(view: &TensorView, conf_threshold: f32) -> Vec<DetectionCandidate> {
    let mut candidates = Vec::new();

    for i in 0..view.candidates() {
        let confidence = view.read(CONFIDENCE_CHANNEL, i);
        if !is_accepted(confidence, conf_threshold) {
            continue;
        }

        let center = Vec2::new(view.read(BOX_CX_CHANNEL, i), view.read(BOX_CY_CHANNEL, i));
        let size = Vec2::new(view.read(BOX_W_CHANNEL, i), view.read(BOX_H_CHANNEL, i));

        candidates.push(DetectionCandidate {
            source_index: i,
            confidence,
            bbox: Rect::from_center_size(center, size),
        });
    }

    candidates
}
