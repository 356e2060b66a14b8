use crate::{DetectionCandidate, TensorView};
use posewave_base::Vec2;

/// Number of keypoints in COCO pose format
pub const COCO_KEYPOINT_COUNT: usize = 17;

/// First keypoint channel; keypoint `k` occupies `5 + 3k .. 5 + 3k + 3` as (x, y, score)
pub const KEYPOINT_CHANNEL_OFFSET: usize = 5;

/// COCO limbs drawn by skeleton overlays, as keypoint index pairs
pub const SKELETON: [(KeypointIndex, KeypointIndex); 16] = {
    use KeypointIndex::*;
    [
        (LeftShoulder, RightShoulder),
        (LeftShoulder, LeftElbow),
        (LeftElbow, LeftWrist),
        (RightShoulder, RightElbow),
        (RightElbow, RightWrist),
        (LeftHip, RightHip),
        (LeftShoulder, LeftHip),
        (RightShoulder, RightHip),
        (LeftHip, LeftKnee),
        (LeftKnee, LeftAnkle),
        (RightHip, RightKnee),
        (RightKnee, RightAnkle),
        (LeftEye, Nose),
        (RightEye, Nose),
        (LeftEye, LeftEar),
        (RightEye, RightEar),
    ]
};

/// A single keypoint in model-space pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// [`Vec2::SENTINEL`] when the score was below the keypoint threshold
    pub position: Vec2<f32>,
    /// Score in [0.0, 1.0]; 0.0 for missing keypoints
    pub score: f32,
}

impl Keypoint {
    pub const MISSING: Keypoint = Keypoint {
        position: Vec2::SENTINEL,
        score: 0.0,
    };

    pub fn is_valid(&self) -> bool {
        !self.position.is_sentinel()
    }
}

/// COCO keypoint indices for human pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypointIndex {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl KeypointIndex {
    pub const ALL: [KeypointIndex; COCO_KEYPOINT_COUNT] = {
        use KeypointIndex::*;
        [
            Nose,
            LeftEye,
            RightEye,
            LeftEar,
            RightEar,
            LeftShoulder,
            RightShoulder,
            LeftElbow,
            RightElbow,
            LeftWrist,
            RightWrist,
            LeftHip,
            RightHip,
            LeftKnee,
            RightKnee,
            LeftAnkle,
            RightAnkle,
        ]
    };
}

impl From<KeypointIndex> for usize {
    fn from(index: KeypointIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for KeypointIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid keypoint index: {}. Must be in range 0-{}.",
                value,
                COCO_KEYPOINT_COUNT - 1
            )
        })
    }
}

/// A detected person: the candidate it was decoded from and its skeleton
#[derive(Debug, Clone, PartialEq)]
pub struct PoseDetection {
    pub candidate: DetectionCandidate,
    pub keypoints: [Keypoint; COCO_KEYPOINT_COUNT],
}

impl PoseDetection {
    pub fn confidence(&self) -> f32 {
        self.candidate.confidence
    }

    pub fn keypoint(&self, index: KeypointIndex) -> &Keypoint {
        &self.keypoints[usize::from(index)]
    }

    /// Skeleton segments whose endpoints are both valid
    pub fn bones(&self) -> impl Iterator<Item = (Vec2<f32>, Vec2<f32>)> + '_ {
        SKELETON.iter().filter_map(|&(a, b)| {
            let (a, b) = (self.keypoint(a), self.keypoint(b));
            (a.is_valid() && b.is_valid()).then_some((a.position, b.position))
        })
    }
}

/// Read the 17 keypoints of one candidate.
///
/// Keypoints scoring below `keypoint_threshold` become [`Keypoint::MISSING`],
/// so a raw coordinate is never reported for a rejected joint.
pub fn extract_keypoints(
    view: &TensorView,
    candidate: usize,
    keypoint_threshold: f32,
) -> [Keypoint; COCO_KEYPOINT_COUNT] {
    std::array::from_fn(|k| {
        let base = KEYPOINT_CHANNEL_OFFSET + k * 3;
        let score = view.read(base + 2, candidate);
        // NaN scores fail this comparison and fall through to MISSING
        if score >= keypoint_threshold {
            Keypoint {
                position: Vec2::new(view.read(base, candidate), view.read(base + 1, candidate)),
                score,
            }
        } else {
            Keypoint::MISSING
        }
    })
}
