use posewave_pose::{KeypointIndex, PoseFrame};

/// Which arm a gesture was made with, from the person's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandSide {
    Left,
    Right,
}

impl HandSide {
    pub fn wrist(self) -> KeypointIndex {
        match self {
            HandSide::Left => KeypointIndex::LeftWrist,
            HandSide::Right => KeypointIndex::RightWrist,
        }
    }

    pub fn shoulder(self) -> KeypointIndex {
        match self {
            HandSide::Left => KeypointIndex::LeftShoulder,
            HandSide::Right => KeypointIndex::RightShoulder,
        }
    }
}

/// A recognized gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEvent {
    /// Name of the sink that fired
    pub gesture: &'static str,
    pub side: Option<HandSide>,
    /// Frame on which the gesture completed
    pub frame_id: u64,
}

/// Receives the tracked pose stream, once per produced frame.
///
/// Implementations own all of their state; the engine only ever calls these
/// hooks, in frame order.
pub trait GestureSink: Send {
    /// Stable name, used in events and logs
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// A pose was tracked this frame. Returns the gestures that fired.
    fn on_pose(&mut self, frame: &PoseFrame) -> Vec<GestureEvent>;

    /// No pose this frame
    fn on_no_pose(&mut self) {}

    /// Drop all history, e.g. when the pipeline starts or stops
    fn reset_state(&mut self) {}
}
