//! Decoding of YOLO-pose style output tensors into per-person skeletons.
//!
//! Two paths share one resolved [`AxisLayout`]: the multi-person path
//! (decode, NMS, keypoints) and the tracking path (best candidate,
//! keypoints, normalized [`PoseFrame`]).

pub mod config;
pub mod decode;
pub mod error;
pub mod frame;
pub mod keypoints;
pub mod layout;
pub mod nms;
pub mod pipeline;
pub mod select;

pub use config::PoseConfig;
pub use decode::{decode_candidates, DetectionCandidate};
pub use error::PoseError;
pub use frame::PoseFrame;
pub use keypoints::{
    extract_keypoints, Keypoint, KeypointIndex, PoseDetection, COCO_KEYPOINT_COUNT, SKELETON,
};
pub use layout::{resolve_layout, AxisLayout, TensorView};
pub use nms::{iou, suppress};
pub use pipeline::{DecodedFrame, PoseDecoder};
pub use select::select_best;
