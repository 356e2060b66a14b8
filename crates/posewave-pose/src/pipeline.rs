use crate::{
    decode_candidates, extract_keypoints, select_best, suppress, PoseConfig, PoseDetection,
    PoseFrame, TensorView,
};
use posewave_base::{Tensor, Vec2};
use std::sync::atomic::{AtomicBool, Ordering};

/// Both outputs of one decoded tensor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedFrame {
    /// NMS survivors in keep order, at most `max_detections`
    pub detections: Vec<PoseDetection>,
    /// Best single person, normalized; `None` when nobody cleared the threshold
    pub tracked: Option<PoseFrame>,
}

/// Decodes raw pose outputs with a fixed [`PoseConfig`].
///
/// Shape problems never propagate: an unrecognized tensor decodes to no
/// detections and no tracked pose. The first rejection is logged as a
/// warning, later ones at debug level.
pub struct PoseDecoder {
    config: PoseConfig,
    shape_warned: AtomicBool,
}

impl PoseDecoder {
    pub fn new(config: PoseConfig) -> Self {
        Self {
            config,
            shape_warned: AtomicBool::new(false),
        }
    }

    /// Multi-person and tracking paths over one layout resolution
    pub fn decode(&self, tensor: &Tensor<f32>, frame_id: u64) -> DecodedFrame {
        match self.view(tensor) {
            Some(view) => DecodedFrame {
                detections: self.detect_in(&view),
                tracked: self.track_in(&view, frame_id),
            },
            None => DecodedFrame::default(),
        }
    }

    /// Multi-person path only
    pub fn detect(&self, tensor: &Tensor<f32>) -> Vec<PoseDetection> {
        self.view(tensor)
            .map(|view| self.detect_in(&view))
            .unwrap_or_default()
    }

    /// Tracking path only
    pub fn track(&self, tensor: &Tensor<f32>, frame_id: u64) -> Option<PoseFrame> {
        self.view(tensor)
            .and_then(|view| self.track_in(&view, frame_id))
    }

    fn view<'a>(&self, tensor: &'a Tensor<f32>) -> Option<TensorView<'a>> {
        match TensorView::new(tensor) {
            Ok(view) => Some(view),
            Err(err) => {
                if self.shape_warned.swap(true, Ordering::Relaxed) {
                    log::debug!("skipping pose output: {}", err);
                } else {
                    log::warn!("skipping pose output: {}", err);
                }
                None
            }
        }
    }

    fn detect_in(&self, view: &TensorView) -> Vec<PoseDetection> {
        let candidates = decode_candidates(view, self.config.conf_threshold);
        let kept = suppress(
            &candidates,
            self.config.iou_threshold,
            self.config.max_detections,
        );

        log::debug!(
            "{} candidates above {}, kept {}",
            candidates.len(),
            self.config.conf_threshold,
            kept.len()
        );

        kept.into_iter()
            .filter_map(|source_index| {
                // decode_candidates emits in source order
                let position = candidates
                    .binary_search_by_key(&source_index, |c| c.source_index)
                    .ok()?;
                Some(PoseDetection {
                    candidate: candidates[position],
                    keypoints: extract_keypoints(
                        view,
                        source_index,
                        self.config.keypoint_threshold,
                    ),
                })
            })
            .collect()
    }

    fn track_in(&self, view: &TensorView, frame_id: u64) -> Option<PoseFrame> {
        let best = select_best(view, self.config.conf_threshold)?;
        let keypoints = extract_keypoints(view, best, self.config.keypoint_threshold);
        let input_size = Vec2::new(
            self.config.input_width as f32,
            self.config.input_height as f32,
        );
        Some(PoseFrame::from_keypoints(&keypoints, input_size, frame_id))
    }
}
