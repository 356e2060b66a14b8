use crate::PoseError;
use posewave_base::Tensor;
use std::fmt;

/// 4 box fields + 1 confidence + 17 keypoints * (x, y, score)
pub const MIN_CHANNELS: usize = 56;

/// In 4-D outputs the candidate axis is recognized by size alone
pub const MIN_CANDIDATES_4D: usize = 1000;

/// Which tensor axes carry the per-candidate fields and the candidates themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLayout {
    pub channel_axis: usize,
    pub candidate_axis: usize,
    pub channels: usize,
    pub candidates: usize,
}

impl AxisLayout {
    fn from_axes(shape: &[usize], channel_axis: usize, candidate_axis: usize) -> Self {
        Self {
            channel_axis,
            candidate_axis,
            channels: shape[channel_axis],
            candidates: shape[candidate_axis],
        }
    }
}

/// Resolve the channel and candidate axes of a pose output shape.
///
/// Accepts `[1, C, N]` and `[1, N, C]` with `C >= 56` (when both axes qualify
/// the smaller one is the channel axis, axis 1 on a tie), and 4-D shapes where
/// the first axis with size >= 56 holds the channels and the first other axis
/// with size >= 1000 holds the candidates.
/// Every other shape, and any shape containing a zero dim, is
/// [`PoseError::ShapeUnrecognized`].
pub fn resolve_layout(shape: &[usize]) -> Result<AxisLayout, PoseError> {
    let unrecognized = || PoseError::ShapeUnrecognized {
        shape: shape.to_vec(),
    };

    if shape.contains(&0) {
        return Err(unrecognized());
    }

    match shape.len() {
        3 if shape[0] == 1 => match (shape[1] >= MIN_CHANNELS, shape[2] >= MIN_CHANNELS) {
            // both qualify: candidates outnumber fields, so the smaller axis holds the fields
            (true, true) if shape[2] < shape[1] => Ok(AxisLayout::from_axes(shape, 2, 1)),
            (true, _) => Ok(AxisLayout::from_axes(shape, 1, 2)),
            (false, true) => Ok(AxisLayout::from_axes(shape, 2, 1)),
            (false, false) => Err(unrecognized()),
        },
        4 => {
            let channel_axis = (0..4)
                .find(|&axis| shape[axis] >= MIN_CHANNELS)
                .ok_or_else(unrecognized)?;
            let candidate_axis = (0..4)
                .filter(|&axis| axis != channel_axis)
                .find(|&axis| shape[axis] >= MIN_CANDIDATES_4D)
                .ok_or_else(unrecognized)?;
            Ok(AxisLayout::from_axes(shape, channel_axis, candidate_axis))
        }
        _ => Err(unrecognized()),
    }
}

/// Read-only `(channel, candidate)` addressing over a raw output tensor.
///
/// Axes that are neither the channel nor the candidate axis are read at index 0.
/// For `[1, C, N]`/`[1, N, C]` that is exact; for 4-D layouts it is a best-effort
/// approximation that assumes the extra axes are singleton.
#[derive(Clone, Copy)]
pub struct TensorView<'a> {
    data: &'a [f32],
    layout: AxisLayout,
    channel_stride: usize,
    candidate_stride: usize,
}

impl fmt::Debug for TensorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorView")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<'a> TensorView<'a> {
    pub fn new(tensor: &'a Tensor<f32>) -> Result<Self, PoseError> {
        tensor.validate()?;
        let layout = resolve_layout(&tensor.shape)?;
        Ok(Self::with_layout(tensor, layout))
    }

    fn with_layout(tensor: &'a Tensor<f32>, layout: AxisLayout) -> Self {
        let strides = tensor.strides();
        Self {
            data: &tensor.data,
            layout,
            channel_stride: strides[layout.channel_axis],
            candidate_stride: strides[layout.candidate_axis],
        }
    }

    pub fn candidates(&self) -> usize {
        self.layout.candidates
    }

    /// Value of field `channel` for candidate `candidate`; indices clamp to the axis bounds
    pub fn read(&self, channel: usize, candidate: usize) -> f32 {
        let channel = channel.min(self.layout.channels - 1);
        let candidate = candidate.min(self.layout.candidates - 1);
        self.data[channel * self.channel_stride + candidate * self.candidate_stride]
    }
}
