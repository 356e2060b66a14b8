#![allow(dead_code)]

use posewave_base::Tensor;

pub const CHANNELS: usize = 56;

/// Axis arrangement of a synthetic pose output
#[derive(Debug, Clone, Copy)]
pub enum Arrangement {
    /// [1, 56, N]
    ChannelsFirst,
    /// [1, N, 56]
    CandidatesFirst,
    /// [1, 56, 1, N]
    FourD,
}

/// Builds pose output tensors one candidate at a time
pub struct OutputBuilder {
    arrangement: Arrangement,
    n: usize,
    fields: Vec<[f32; CHANNELS]>,
}

impl OutputBuilder {
    pub fn new(arrangement: Arrangement, n: usize) -> Self {
        Self {
            arrangement,
            n,
            fields: vec![[0.0; CHANNELS]; n],
        }
    }

    /// Box in center form plus confidence
    pub fn person(mut self, index: usize, cx: f32, cy: f32, w: f32, h: f32, conf: f32) -> Self {
        let f = &mut self.fields[index];
        f[0] = cx;
        f[1] = cy;
        f[2] = w;
        f[3] = h;
        f[4] = conf;
        self
    }

    pub fn keypoint(mut self, index: usize, k: usize, x: f32, y: f32, score: f32) -> Self {
        let base = 5 + k * 3;
        let f = &mut self.fields[index];
        f[base] = x;
        f[base + 1] = y;
        f[base + 2] = score;
        self
    }

    /// Every keypoint at a distinct position with the same score
    pub fn all_keypoints(mut self, index: usize, score: f32) -> Self {
        for k in 0..17 {
            self = self.keypoint(index, k, 100.0 + k as f32 * 10.0, 200.0 + k as f32 * 5.0, score);
        }
        self
    }

    pub fn build(self) -> Tensor<f32> {
        let n = self.n;
        let mut data = vec![0.0; CHANNELS * n];
        for (i, fields) in self.fields.iter().enumerate() {
            for (c, &value) in fields.iter().enumerate() {
                let offset = match self.arrangement {
                    Arrangement::ChannelsFirst | Arrangement::FourD => c * n + i,
                    Arrangement::CandidatesFirst => i * CHANNELS + c,
                };
                data[offset] = value;
            }
        }
        let shape = match self.arrangement {
            Arrangement::ChannelsFirst => vec![1, CHANNELS, n],
            Arrangement::CandidatesFirst => vec![1, n, CHANNELS],
            Arrangement::FourD => vec![1, CHANNELS, 1, n],
        };
        Tensor::new(shape, data).unwrap()
    }
}
