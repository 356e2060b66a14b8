use crate::DetectionCandidate;
use posewave_base::Rect;

/// Intersection over Union of two boxes.
///
/// Disjoint boxes, zero-area boxes and a zero union all give 0.0.
pub fn iou(a: &Rect<f32>, b: &Rect<f32>) -> f32 {
    let intersection_area = match a.intersection(b) {
        Some(rect) => rect.area(),
        None => return 0.0,
    };

    let union_area = a.area() + b.area() - intersection_area;
    if union_area <= 0.0 {
        return 0.0;
    }

    intersection_area / union_area
}

/// Greedy Non-Maximum Suppression.
///
/// Visits candidates by confidence descending (ties keep input order), keeps
/// each one not yet suppressed and suppresses every later candidate whose IoU
/// with it exceeds `iou_threshold`. Stops after `max_kept` boxes.
///
/// Returns the `source_index` of each kept candidate, in keep order.
pub fn suppress(
    candidates: &[DetectionCandidate],
    iou_threshold: f32,
    max_kept: usize,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    // sort_by is stable, equal confidences stay in tensor order
    order.sort_by(|&a, &b| candidates[b].confidence.total_cmp(&candidates[a].confidence));

    let mut keep = Vec::new();
    let mut suppressed = vec![false; order.len()];

    for i in 0..order.len() {
        if keep.len() >= max_kept {
            break;
        }
        if suppressed[i] {
            continue;
        }

        let kept = &candidates[order[i]];
        keep.push(kept.source_index);

        for j in (i + 1)..order.len() {
            if !suppressed[j] && iou(&kept.bbox, &candidates[order[j]].bbox) > iou_threshold {
                suppressed[j] = true;
            }
        }
    }

    keep
}
