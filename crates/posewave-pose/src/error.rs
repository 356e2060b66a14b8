use posewave_base::TensorError;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum PoseError {
    /// Rank or dims match none of the known output layouts
    ShapeUnrecognized { shape: Vec<usize> },
    /// Buffer length disagrees with the declared shape
    Tensor(TensorError),
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::ShapeUnrecognized { shape } => {
                write!(f, "unrecognized pose output shape: {shape:?}")
            }
            PoseError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for PoseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PoseError::Tensor(err) => Some(err),
            PoseError::ShapeUnrecognized { .. } => None,
        }
    }
}

impl From<TensorError> for PoseError {
    fn from(err: TensorError) -> Self {
        PoseError::Tensor(err)
    }
}
