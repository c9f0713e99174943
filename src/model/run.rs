use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::lenient::{null_as_empty, number_or_none, number_or_zero, string_or_number};

/// One submitted benchmark report for one model on one machine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunRecord {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub benchmark_version: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub judge_model: Option<String>,
    #[serde(default)]
    pub model_details: Option<ModelDetails>,
    #[serde(default)]
    pub system: Option<SystemInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub benchmarks: Vec<BenchmarkResult>,
    #[serde(default)]
    pub metrics: Option<RunMetrics>,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_score: f64,
    /// Set by the loader, never read from the report body.
    #[serde(skip)]
    pub filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDetails {
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub parameter_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_length: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemInfo {
    #[serde(default)]
    pub gpu: Option<String>,
    #[serde(default)]
    pub cpu: Option<String>,
    // Carried for completeness; the leaderboard never reports total VRAM.
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "number_or_none")]
    pub vram_total_mb: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenchmarkResult {
    pub name: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub score: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub issues: Vec<String>,
    #[serde(default)]
    pub details: Option<RunDetails>,
    #[serde(default)]
    pub metrics: Option<CategoryMetrics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunDetails {
    #[serde(default, deserialize_with = "number_or_none")]
    pub tokens_per_sec: Option<f64>,
    #[allow(dead_code)]
    #[serde(default, deserialize_with = "number_or_none")]
    pub total_time_s: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryMetrics {
    #[serde(default, deserialize_with = "number_or_none")]
    pub peak_vram_mb: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub avg_vram_mb: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunMetrics {
    #[serde(default, deserialize_with = "number_or_none")]
    pub peak_vram_mb: Option<f64>,
    #[serde(default, deserialize_with = "number_or_none")]
    pub avg_vram_mb: Option<f64>,
}

impl RunRecord {
    pub fn parameter_size(&self) -> Option<&str> {
        self.model_details
            .as_ref()
            .and_then(|d| d.parameter_size.as_deref())
    }

    pub fn gpu_name(&self) -> Option<&str> {
        self.system.as_ref().and_then(|s| s.gpu.as_deref())
    }

    pub fn cpu_name(&self) -> Option<&str> {
        self.system.as_ref().and_then(|s| s.cpu.as_deref())
    }
}
