use crate::{GestureEvent, GestureSink, HandSide, PoseHistory};
use posewave_pose::PoseFrame;
use serde::Deserialize;

/// Shortest window the detector will evaluate, whatever `history_length` says
pub const MIN_WINDOW_LENGTH: usize = 5;

/// Hand-wave thresholds, all distances in normalized image units
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Frames per evaluation window (raised to [`MIN_WINDOW_LENGTH`])
    pub history_length: usize,
    /// Mean height of the wrist above the shoulder over the window
    pub min_y_above_shoulder: f32,
    /// Horizontal wrist travel over the window
    pub min_x_delta: f32,
    /// Wrist and shoulder confidence required in every frame
    pub min_confidence: f32,
    /// Frames a side stays silent after firing
    pub cooldown_frames: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            history_length: 30,
            min_y_above_shoulder: 0.05,
            min_x_delta: 0.15,
            min_confidence: 0.5,
            cooldown_frames: 30,
        }
    }
}

impl WaveConfig {
    pub fn window_length(&self) -> usize {
        self.history_length.max(MIN_WINDOW_LENGTH)
    }

    pub fn with_history_length(mut self, frames: usize) -> Self {
        self.history_length = frames;
        self
    }

    pub fn with_min_y_above_shoulder(mut self, distance: f32) -> Self {
        self.min_y_above_shoulder = distance;
        self
    }

    pub fn with_min_x_delta(mut self, distance: f32) -> Self {
        self.min_x_delta = distance;
        self
    }

    pub fn with_min_confidence(mut self, confidence: f32) -> Self {
        self.min_confidence = confidence;
        self
    }

    pub fn with_cooldown_frames(mut self, frames: u32) -> Self {
        self.cooldown_frames = frames;
        self
    }
}

/// Result of checking one side against the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Fewer frames than the window length have been seen since the last reset
    InsufficientHistory,
    /// Some frame lacks a confident, in-frame wrist or shoulder
    MissingKeypoints,
    NotWaving,
    Waving,
}

/// Detects a raised hand moving side to side.
///
/// A side waves when, across the whole window, its wrist stays on average at
/// least `min_y_above_shoulder` above the shoulder and its horizontal range
/// reaches `min_x_delta`. Each side has its own cooldown, and both sides can
/// fire on the same frame.
#[derive(Debug, Clone)]
pub struct WaveDetector {
    config: WaveConfig,
    history: PoseHistory,
    /// Indexed by [`slot`]
    cooldowns: [u32; 2],
}

fn slot(side: HandSide) -> usize {
    match side {
        HandSide::Left => 0,
        HandSide::Right => 1,
    }
}

impl WaveDetector {
    pub const NAME: &'static str = "hand_wave";

    pub fn new(config: WaveConfig) -> Self {
        Self {
            history: PoseHistory::new(config.window_length()),
            config,
            cooldowns: [0; 2],
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Remaining cooldown frames for `side`
    pub fn cooldown(&self, side: HandSide) -> u32 {
        self.cooldowns[slot(side)]
    }

    /// Check `side` against the frames currently in the window, ignoring cooldown
    pub fn evaluate(&self, side: HandSide) -> Evaluation {
        if !self.history.is_full() {
            return Evaluation::InsufficientHistory;
        }

        let (wrist, shoulder) = (side.wrist(), side.shoulder());
        let min_confidence = self.config.min_confidence;

        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut y_above_sum = 0.0;

        for frame in self.history.iter() {
            if !frame.is_present(wrist, min_confidence)
                || !frame.is_present(shoulder, min_confidence)
            {
                return Evaluation::MissingKeypoints;
            }
            let hand = frame.point(wrist);
            min_x = min_x.min(hand.x);
            max_x = max_x.max(hand.x);
            // image y grows downward, positive means the wrist is higher
            y_above_sum += frame.point(shoulder).y - hand.y;
        }

        let y_above_mean = y_above_sum / self.history.len() as f32;
        if y_above_mean >= self.config.min_y_above_shoulder
            && max_x - min_x >= self.config.min_x_delta
        {
            Evaluation::Waving
        } else {
            Evaluation::NotWaving
        }
    }

    fn tick_cooldowns(&mut self) {
        for cooldown in &mut self.cooldowns {
            *cooldown = cooldown.saturating_sub(1);
        }
    }
}

impl GestureSink for WaveDetector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_pose(&mut self, frame: &PoseFrame) -> Vec<GestureEvent> {
        self.history.push(*frame);

        if !self.history.is_full() {
            self.tick_cooldowns();
            return Vec::new();
        }

        let fired: Vec<HandSide> = [HandSide::Right, HandSide::Left]
            .into_iter()
            .filter(|&side| {
                self.cooldowns[slot(side)] == 0 && self.evaluate(side) == Evaluation::Waving
            })
            .collect();

        // a side that fires is armed after the tick, so it misses exactly cooldown_frames frames
        self.tick_cooldowns();

        fired
            .into_iter()
            .map(|side| {
                self.cooldowns[slot(side)] = self.config.cooldown_frames;
                log::info!("{:?} hand wave detected at frame {}", side, frame.frame_id);
                GestureEvent {
                    gesture: Self::NAME,
                    side: Some(side),
                    frame_id: frame.frame_id,
                }
            })
            .collect()
    }

    fn on_no_pose(&mut self) {
        self.tick_cooldowns();
    }

    fn reset_state(&mut self) {
        self.history.clear();
        self.cooldowns = [0; 2];
    }
}
