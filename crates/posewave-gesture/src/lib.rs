//! Temporal gesture recognition over the tracked single-person pose stream.

pub mod engine;
pub mod history;
pub mod sink;
pub mod wave;

pub use engine::GestureEngine;
pub use history::PoseHistory;
pub use sink::{GestureEvent, GestureSink, HandSide};
pub use wave::{Evaluation, WaveConfig, WaveDetector, MIN_WINDOW_LENGTH};
