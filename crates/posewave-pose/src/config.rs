use serde::Deserialize;

/// Thresholds and model geometry for decoding pose outputs
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    /// Minimum person confidence for a candidate to be considered at all
    pub conf_threshold: f32,
    /// Keypoints scoring below this are reported missing
    pub keypoint_threshold: f32,
    /// NMS suppresses boxes overlapping a kept box by more than this
    pub iou_threshold: f32,
    /// Upper bound on people returned by the multi-person path
    pub max_detections: usize,
    /// Model input size in pixels, used to normalize tracked keypoints
    pub input_width: u32,
    pub input_height: u32,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            conf_threshold: 0.25,
            keypoint_threshold: 0.2,
            iou_threshold: 0.45,
            max_detections: 5,
            input_width: 640,
            input_height: 640,
        }
    }
}

impl PoseConfig {
    pub fn with_conf_threshold(mut self, threshold: f32) -> Self {
        self.conf_threshold = threshold;
        self
    }

    pub fn with_keypoint_threshold(mut self, threshold: f32) -> Self {
        self.keypoint_threshold = threshold;
        self
    }

    pub fn with_iou_threshold(mut self, threshold: f32) -> Self {
        self.iou_threshold = threshold;
        self
    }

    pub fn with_max_detections(mut self, max_detections: usize) -> Self {
        self.max_detections = max_detections;
        self
    }

    pub fn with_input_size(mut self, width: u32, height: u32) -> Self {
        self.input_width = width;
        self.input_height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PoseConfig =
            serde_json::from_str(r#"{ "conf_threshold": 0.5, "max_detections": 2 }"#).unwrap();
        assert_eq!(config.conf_threshold, 0.5);
        assert_eq!(config.max_detections, 2);
        assert_eq!(config.keypoint_threshold, 0.2);
        assert_eq!(config.input_width, 640);
    }

    #[test]
    fn test_builder() {
        let config = PoseConfig::default()
            .with_iou_threshold(0.7)
            .with_input_size(320, 256);
        assert_eq!(config.iou_threshold, 0.7);
        assert_eq!((config.input_width, config.input_height), (320, 256));
    }
}
