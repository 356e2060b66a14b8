mod replay;

use anyhow::{Context, Result};
use posewave_base::Tensor;
use posewave_gesture::{GestureEngine, WaveDetector};
use posewave_pose::PoseDecoder;
use replay::{read_config, ReplayConfig, TensorReader};
use std::env;
use std::path::PathBuf;
use std::time::Instant;
use tokio::sync::mpsc;

const USAGE: &str = "usage: pose-replay <tensor-dump.jsonl> [config.json]";

#[tokio::main]
async fn main() -> Result<()> {
    match env::var_os("POSEWAVE_LOG_DIR") {
        Some(dir) => posewave_base::init_file_logger(PathBuf::from(dir))
            .context("opening log directory")?,
        None => posewave_base::init_stdout_logger(),
    }

    let mut args = env::args().skip(1);
    let dump_path: PathBuf = args
        .next()
        .or_else(|| env::var("POSEWAVE_DUMP").ok())
        .context(USAGE)?
        .into();
    let config = match args.next() {
        Some(path) => read_config(path)?,
        None => ReplayConfig::default(),
    };

    log::info!("Replaying {}", dump_path.display());
    log::info!("{:?}", config);

    let reader = TensorReader::open(&dump_path)?;

    // capacity 1: at most one finished output waits while the previous one decodes
    let (tx, mut rx) = mpsc::channel::<Tensor<f32>>(1);
    let producer = tokio::task::spawn_blocking(move || -> Result<u64> {
        let mut produced = 0;
        for tensor in reader {
            if tx.blocking_send(tensor?).is_err() {
                break;
            }
            produced += 1;
        }
        Ok(produced)
    });

    let decoder = PoseDecoder::new(config.pose);
    let mut engine = GestureEngine::new().with_sink(WaveDetector::new(config.wave));
    engine.reset();

    let mut frame_id = 0u64;
    let mut tracked_frames = 0u64;
    while let Some(tensor) = rx.recv().await {
        let started = Instant::now();
        let decoded = decoder.decode(&tensor, frame_id);
        let elapsed = started.elapsed();

        log::debug!(
            "frame {}: {} people, tracked: {}, decode {:.2} ms",
            frame_id,
            decoded.detections.len(),
            decoded.tracked.is_some(),
            elapsed.as_secs_f64() * 1000.0
        );
        if decoded.tracked.is_some() {
            tracked_frames += 1;
        }

        for event in engine.on_frame(decoded.tracked.as_ref()) {
            log::info!(
                "{} ({:?}) at frame {}",
                event.gesture,
                event.side,
                event.frame_id
            );
        }

        frame_id += 1;
    }

    let produced = producer.await.context("tensor reader panicked")??;
    engine.reset();

    log::info!(
        "Done: {} frames, {} with a tracked person",
        produced,
        tracked_frames
    );
    Ok(())
}
