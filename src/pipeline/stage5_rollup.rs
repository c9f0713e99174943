use crate::model::{GpuRecord, ModelMetrics, RunRecord};
use crate::pipeline::stage3_categories::mean;

/// Model-level VRAM summary: worst peak across GPUs, mean of per-GPU averages.
pub fn rollup_metrics(gpu_data: &[GpuRecord]) -> ModelMetrics {
    let peak_vram_mb = gpu_data
        .iter()
        .map(|g| g.peak_vram_mb)
        .reduce(f64::max)
        .unwrap_or(0.0);
    let avg_sum = gpu_data.iter().map(|g| g.avg_vram_mb).sum();
    ModelMetrics {
        peak_vram_mb,
        avg_vram_mb: mean(avg_sum, gpu_data.len()),
    }
}

pub fn rollup_total_score(records: &[&RunRecord]) -> i64 {
    let sum = records.iter().map(|r| r.total_score).sum();
    round_half_up(mean(sum, records.len()))
}

/// `x.5` always rounds toward positive infinity.
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_rollup.rs"]
mod tests;
