use crate::model::AggregatedModelEntry;
use crate::report::format_gb;

pub fn render_leaderboard_text(entries: &[AggregatedModelEntry]) -> String {
    let mut out = String::new();

    out.push_str("LLM Benchmark Leaderboard\n");
    out.push_str("=========================\n\n");
    out.push_str(&format!("Models: {}\n\n", entries.len()));

    out.push_str(&format!(
        "{:>4}  {:<32} {:<24} {:>4} {:>6} {:>9} {:>5}  {}\n",
        "#", "model", "id", "ver", "score", "peak_gb", "gpus", "family"
    ));
    for (rank, entry) in entries.iter().enumerate() {
        let family = entry
            .model_details
            .as_ref()
            .and_then(|d| d.family.as_deref())
            .unwrap_or("Unknown");
        out.push_str(&format!(
            "{:>4}  {:<32} {:<24} {:>4} {:>6} {:>9} {:>5}  {}\n",
            rank + 1,
            entry.model,
            entry.filename,
            entry.benchmark_version,
            entry.total_score,
            format_gb(entry.metrics.peak_vram_mb),
            entry.gpu_data.len(),
            family
        ));
    }

    out
}
