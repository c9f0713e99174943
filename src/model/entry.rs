use serde::{Deserialize, Serialize};

use crate::model::run::ModelDetails;

/// Canonical leaderboard record for one normalized model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedModelEntry {
    pub model: String,
    pub benchmark_version: String,
    pub date: Option<String>,
    pub judge_model: Option<String>,
    pub model_details: Option<ModelDetails>,
    pub filename: String,
    pub benchmarks: Vec<CategoryScore>,
    pub metrics: ModelMetrics,
    pub gpu_data: Vec<GpuRecord>,
    pub total_score: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: String,
    pub score: f64,
    pub comment: Option<String>,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub peak_vram_mb: f64,
    pub avg_vram_mb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuRecord {
    pub gpu: String,
    pub cpu: Option<String>,
    #[serde(rename = "peak_vram")]
    pub peak_vram_mb: f64,
    #[serde(rename = "avg_vram")]
    pub avg_vram_mb: f64,
    #[serde(rename = "speed")]
    pub speed_tokens_per_sec: f64,
}

/// Looks up an entry by routing id.
pub fn find_by_id<'a>(
    entries: &'a [AggregatedModelEntry],
    id: &str,
) -> Option<&'a AggregatedModelEntry> {
    entries.iter().find(|e| e.filename == id)
}

/// Case-insensitive substring match on the model name or family; order is kept.
pub fn filter_entries<'a>(
    entries: &'a [AggregatedModelEntry],
    text: &str,
) -> Vec<&'a AggregatedModelEntry> {
    let needle = text.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.model.to_lowercase().contains(&needle)
                || e.model_details
                    .as_ref()
                    .and_then(|d| d.family.as_deref())
                    .is_some_and(|f| f.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/entry.rs"]
mod tests;
