use crate::{GestureEvent, GestureSink};
use posewave_pose::PoseFrame;

/// Drives every registered [`GestureSink`] with the tracked pose stream
#[derive(Default)]
pub struct GestureEngine {
    sinks: Vec<Box<dyn GestureSink>>,
    last_frame_id: Option<u64>,
}

impl GestureEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: impl GestureSink + 'static) -> Self {
        self.register(Box::new(sink));
        self
    }

    pub fn register(&mut self, sink: Box<dyn GestureSink>) {
        log::debug!("registered gesture sink {}", sink.name());
        self.sinks.push(sink);
    }

    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Deliver one frame's tracking result: `Some` goes to `on_pose`, `None` to `on_no_pose`
    pub fn on_frame(&mut self, frame: Option<&PoseFrame>) -> Vec<GestureEvent> {
        match frame {
            Some(frame) => self.on_pose(frame),
            None => {
                self.on_no_pose();
                Vec::new()
            }
        }
    }

    /// Frame ids must increase; a stale or repeated id is logged and still delivered
    pub fn on_pose(&mut self, frame: &PoseFrame) -> Vec<GestureEvent> {
        if let Some(last) = self.last_frame_id {
            if frame.frame_id <= last {
                log::warn!(
                    "pose frame {} delivered after frame {}",
                    frame.frame_id,
                    last
                );
            }
        }
        self.last_frame_id = Some(frame.frame_id);

        self.sinks
            .iter_mut()
            .flat_map(|sink| sink.on_pose(frame))
            .collect()
    }

    pub fn on_no_pose(&mut self) {
        for sink in &mut self.sinks {
            sink.on_no_pose();
        }
    }

    /// Reset every sink, e.g. when the pipeline starts or stops
    pub fn reset(&mut self) {
        self.last_frame_id = None;
        for sink in &mut self.sinks {
            sink.reset_state();
        }
    }
}
