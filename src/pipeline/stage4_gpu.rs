use std::collections::HashMap;

use crate::model::{GpuRecord, RunRecord};
use crate::pipeline::stage3_categories::mean;

pub const UNKNOWN_GPU: &str = "Unknown GPU";
pub const SPEED_CATEGORY: &str = "Velocity/Speed";

/// Running telemetry for one GPU. `avg_vram_mb` is updated incrementally as each
/// record is folded in, so it depends on fold order.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuAcc {
    pub gpu: String,
    pub cpu: Option<String>,
    pub peak_vram_mb: f64,
    pub avg_vram_mb: f64,
    pub records: usize,
    pub speed_sum: f64,
    pub speed_samples: usize,
}

impl GpuAcc {
    fn new(gpu: &str, cpu: Option<&str>) -> Self {
        Self {
            gpu: gpu.to_string(),
            cpu: cpu.map(str::to_string),
            peak_vram_mb: 0.0,
            avg_vram_mb: 0.0,
            records: 0,
            speed_sum: 0.0,
            speed_samples: 0,
        }
    }

    /// `new_avg = (old_avg * (n - 1) + record_avg) / n`
    pub fn update(&mut self, record: &RunRecord) {
        self.records += 1;
        let n = self.records as f64;
        self.avg_vram_mb = (self.avg_vram_mb * (n - 1.0) + record_avg_vram(record)) / n;
        self.peak_vram_mb = self.peak_vram_mb.max(record_peak_vram(record));
        if let Some(speed) = record_speed(record) {
            self.speed_sum += speed;
            self.speed_samples += 1;
        }
    }

    pub fn finish(self) -> GpuRecord {
        GpuRecord {
            speed_tokens_per_sec: mean(self.speed_sum, self.speed_samples),
            gpu: self.gpu,
            cpu: self.cpu,
            peak_vram_mb: self.peak_vram_mb,
            avg_vram_mb: self.avg_vram_mb,
        }
    }
}

/// GPU name -> accumulator, in first-seen order.
#[derive(Debug, Default)]
pub struct GpuFold {
    index: HashMap<String, usize>,
    accs: Vec<GpuAcc>,
}

impl GpuFold {
    pub fn push(mut self, record: &RunRecord) -> Self {
        let gpu = gpu_key(record);
        let slot = match self.index.get(gpu).copied() {
            Some(slot) => slot,
            None => {
                self.accs.push(GpuAcc::new(gpu, record.cpu_name()));
                self.index.insert(gpu.to_string(), self.accs.len() - 1);
                self.accs.len() - 1
            }
        };
        self.accs[slot].update(record);
        self
    }

    pub fn finish(self) -> Vec<GpuRecord> {
        self.accs.into_iter().map(GpuAcc::finish).collect()
    }
}

pub fn aggregate_gpus(records: &[&RunRecord]) -> Vec<GpuRecord> {
    records
        .iter()
        .fold(GpuFold::default(), |fold, record| fold.push(record))
        .finish()
}

fn gpu_key(record: &RunRecord) -> &str {
    match record.gpu_name() {
        Some(gpu) if !gpu.is_empty() => gpu,
        _ => UNKNOWN_GPU,
    }
}

/// Root peak if reported, else the largest per-category peak, else 0.
pub fn record_peak_vram(record: &RunRecord) -> f64 {
    if let Some(peak) = record.metrics.as_ref().and_then(|m| m.peak_vram_mb) {
        return peak;
    }
    record
        .benchmarks
        .iter()
        .filter_map(|b| b.metrics.as_ref().and_then(|m| m.peak_vram_mb))
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Root average if reported, else the mean over categories carrying a metrics
/// block (a block without `avg_vram_mb` counts as 0), else 0.
pub fn record_avg_vram(record: &RunRecord) -> f64 {
    if let Some(avg) = record.metrics.as_ref().and_then(|m| m.avg_vram_mb) {
        return avg;
    }
    let values = record
        .benchmarks
        .iter()
        .filter_map(|b| b.metrics.as_ref())
        .map(|m| m.avg_vram_mb.unwrap_or(0.0))
        .collect::<Vec<_>>();
    mean(values.iter().sum(), values.len())
}

pub fn record_speed(record: &RunRecord) -> Option<f64> {
    record
        .benchmarks
        .iter()
        .find(|b| b.name == SPEED_CATEGORY)
        .and_then(|b| b.details.as_ref())
        .and_then(|d| d.tokens_per_sec)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_gpu.rs"]
mod tests;
