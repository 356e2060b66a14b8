mod common;

use common::{Arrangement, OutputBuilder};
use posewave_base::{Tensor, Vec2};
use posewave_pose::{KeypointIndex, PoseConfig, PoseDecoder};

#[test]
fn test_multi_person_detections() {
    let tensor = OutputBuilder::new(Arrangement::ChannelsFirst, 4)
        .person(0, 100.0, 100.0, 80.0, 200.0, 0.7)
        .all_keypoints(0, 0.9)
        .person(1, 102.0, 101.0, 80.0, 200.0, 0.9)
        .all_keypoints(1, 0.9)
        .person(2, 400.0, 300.0, 80.0, 200.0, 0.6)
        .all_keypoints(2, 0.1)
        .person(3, 600.0, 300.0, 80.0, 200.0, 0.1)
        .build();
    let decoder = PoseDecoder::new(PoseConfig::default());

    let detections = decoder.detect(&tensor);
    let sources: Vec<_> = detections.iter().map(|d| d.candidate.source_index).collect();
    assert_eq!(sources, vec![1, 2]);
    assert_eq!(detections[0].confidence(), 0.9);
    assert!(detections[0].keypoints.iter().all(|k| k.is_valid()));
    assert!(detections[1].keypoints.iter().all(|k| !k.is_valid()));
    assert_eq!(detections[0].bones().count(), 16);
    assert_eq!(detections[1].bones().count(), 0);
}

#[test]
fn test_max_detections_cap() {
    let mut builder = OutputBuilder::new(Arrangement::ChannelsFirst, 8);
    for i in 0..8 {
        builder = builder.person(i, 50.0 + i as f32 * 70.0, 100.0, 40.0, 40.0, 0.5);
    }
    let decoder = PoseDecoder::new(PoseConfig::default().with_max_detections(3));
    assert_eq!(decoder.detect(&builder.build()).len(), 3);
}

#[test]
fn test_tracked_frame_is_normalized() {
    let tensor = OutputBuilder::new(Arrangement::CandidatesFirst, 2)
        .person(0, 100.0, 100.0, 80.0, 200.0, 0.6)
        .person(1, 320.0, 320.0, 80.0, 200.0, 0.8)
        .keypoint(1, 10, 320.0, 160.0, 0.9)
        .keypoint(1, 6, 640.0, 0.0, 0.3)
        .keypoint(1, 9, 500.0, 500.0, 0.05)
        .build();
    let decoder = PoseDecoder::new(PoseConfig::default());

    let frame = decoder.track(&tensor, 42).unwrap();
    assert_eq!(frame.frame_id, 42);
    assert_eq!(frame.point(KeypointIndex::RightWrist), Vec2::new(0.5, 0.25));
    assert_eq!(frame.confidence(KeypointIndex::RightWrist), 0.9);
    assert_eq!(frame.point(KeypointIndex::RightShoulder), Vec2::new(1.0, 0.0));
    assert_eq!(frame.point(KeypointIndex::LeftWrist), Vec2::SENTINEL);
    assert_eq!(frame.confidence(KeypointIndex::LeftWrist), 0.0);
    assert!(!frame.is_present(KeypointIndex::LeftWrist, 0.0));
}

#[test]
fn test_tracking_uses_custom_input_size() {
    let tensor = OutputBuilder::new(Arrangement::ChannelsFirst, 1)
        .person(0, 100.0, 100.0, 80.0, 200.0, 0.6)
        .keypoint(0, 0, 160.0, 64.0, 0.9)
        .build();
    let decoder = PoseDecoder::new(PoseConfig::default().with_input_size(320, 256));

    let frame = decoder.track(&tensor, 1).unwrap();
    assert_eq!(frame.point(KeypointIndex::Nose), Vec2::new(0.5, 0.25));
}

#[test]
fn test_decode_runs_both_paths() {
    let tensor = OutputBuilder::new(Arrangement::FourD, 1500)
        .person(700, 100.0, 100.0, 80.0, 200.0, 0.9)
        .all_keypoints(700, 0.9)
        .person(1200, 500.0, 100.0, 80.0, 200.0, 0.4)
        .build();
    let decoder = PoseDecoder::new(PoseConfig::default());

    let decoded = decoder.decode(&tensor, 3);
    assert_eq!(decoded.detections.len(), 2);
    let tracked = decoded.tracked.unwrap();
    assert_eq!(tracked.frame_id, 3);
    assert!((tracked.point(KeypointIndex::Nose).x - 100.0 / 640.0).abs() < 1e-6);
}

#[test]
fn test_nothing_above_threshold() {
    let tensor = OutputBuilder::new(Arrangement::ChannelsFirst, 3).build();
    let decoded = PoseDecoder::new(PoseConfig::default()).decode(&tensor, 1);
    assert!(decoded.detections.is_empty());
    assert!(decoded.tracked.is_none());
}

#[test]
fn test_unrecognized_shape_decodes_to_nothing() {
    let decoder = PoseDecoder::new(PoseConfig::default());
    let tensor = Tensor::new(vec![1, 10, 10], vec![0.9; 100]).unwrap();

    // repeated failures stay quiet and never panic
    for frame_id in 0..3 {
        let decoded = decoder.decode(&tensor, frame_id);
        assert!(decoded.detections.is_empty());
        assert!(decoded.tracked.is_none());
    }
}

#[test]
fn test_decoding_is_repeatable() {
    let tensor = OutputBuilder::new(Arrangement::ChannelsFirst, 3)
        .person(0, 100.0, 100.0, 80.0, 200.0, 0.7)
        .all_keypoints(0, 0.5)
        .person(2, 110.0, 100.0, 80.0, 200.0, 0.7)
        .build();
    let decoder = PoseDecoder::new(PoseConfig::default());
    assert_eq!(decoder.decode(&tensor, 9), decoder.decode(&tensor, 9));
}

#[test]
fn test_candidates_first_full_size_output() {
    let tensor = OutputBuilder::new(Arrangement::CandidatesFirst, 8400)
        .person(8000, 320.0, 320.0, 100.0, 300.0, 0.85)
        .keypoint(8000, 0, 320.0, 200.0, 0.9)
        .build();
    assert_eq!(tensor.shape, vec![1, 8400, 56]);

    let decoded = PoseDecoder::new(PoseConfig::default()).decode(&tensor, 0);
    assert_eq!(decoded.detections.len(), 1);
    assert_eq!(decoded.detections[0].candidate.source_index, 8000);
    let tracked = decoded.tracked.unwrap();
    assert_eq!(tracked.point(KeypointIndex::Nose), Vec2::new(0.5, 0.3125));
}
