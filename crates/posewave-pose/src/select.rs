use crate::TensorView;
use crate::decode::{is_accepted, CONFIDENCE_CHANNEL};

/// Index of the single most confident candidate with confidence in `[conf_threshold, 1]`.
///
/// The first index wins exact ties. No suppression is applied, and the choice is
/// made from scratch every frame, so with several similar people in view the
/// tracked person can change between frames.
pub fn select_best(view: &TensorView, conf_threshold: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for i in 0..view.candidates() {
        let confidence = view.read(CONFIDENCE_CHANNEL, i);
        if !is_accepted(confidence, conf_threshold) {
            continue;
        }
        if best.is_none_or(|(_, best_confidence)| confidence > best_confidence) {
            best = Some((i, confidence));
        }
    }

    best.map(|(index, _)| index)
}
