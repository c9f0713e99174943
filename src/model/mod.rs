pub mod entry;
pub mod lenient;
pub mod run;

pub use entry::{AggregatedModelEntry, CategoryScore, GpuRecord, ModelMetrics};
pub use run::{
    BenchmarkResult, CategoryMetrics, ModelDetails, RunDetails, RunMetrics, RunRecord, SystemInfo,
};
