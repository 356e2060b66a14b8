use anyhow::{Context, Result};
use posewave_base::Tensor;
use posewave_gesture::WaveConfig;
use posewave_pose::PoseConfig;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Settings file with optional `pose` and `wave` sections
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub pose: PoseConfig,
    pub wave: WaveConfig,
}

pub fn read_config(path: impl AsRef<Path>) -> Result<ReplayConfig> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))
}

/// One dumped model output: `{"shape": [1, 56, 8400], "data": [...]}`
#[derive(Debug, Deserialize)]
struct TensorRecord {
    shape: Vec<usize>,
    data: Vec<f32>,
}

pub fn parse_tensor(line: &str) -> Result<Tensor<f32>> {
    let record: TensorRecord = serde_json::from_str(line)?;
    Ok(Tensor::new(record.shape, record.data)?)
}

/// Reads one tensor per non-empty line of a JSON-lines dump
pub struct TensorReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl TensorReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening dump {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TensorReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for TensorReader<R> {
    type Item = Result<Tensor<f32>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_number += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if line.trim().is_empty() {
                continue;
            }
            let line_number = self.line_number;
            return Some(parse_tensor(&line).with_context(|| format!("line {line_number}")));
        }
    }
}
