pub mod stage1_normalize;
pub mod stage2_version;
pub mod stage3_categories;
pub mod stage4_gpu;
pub mod stage5_rollup;

use std::collections::HashMap;

use crate::model::{AggregatedModelEntry, RunRecord};
use stage1_normalize::{normalize_model_name, routing_id};
use stage2_version::{format_version, select_authoritative};
use stage3_categories::aggregate_categories;
use stage4_gpu::aggregate_gpus;
use stage5_rollup::{rollup_metrics, rollup_total_score};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("invalid record {filename}: {reason}")]
    InvalidRecord { filename: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregationOutcome {
    pub entries: Vec<AggregatedModelEntry>,
    pub skipped: Vec<RecordError>,
}

/// Returns the raw model identifier of a structurally valid record.
pub fn validate_record(record: &RunRecord) -> Result<&str, RecordError> {
    match record.model.as_deref() {
        Some(model) if !model.trim().is_empty() => Ok(model),
        Some(_) => Err(invalid(record, "empty `model`")),
        None => Err(invalid(record, "missing `model`")),
    }
}

fn invalid(record: &RunRecord, reason: &str) -> RecordError {
    RecordError::InvalidRecord {
        filename: record.filename.clone(),
        reason: reason.to_string(),
    }
}

/// Folds a batch of run records into one entry per normalized model, sorted by
/// total score (descending, ties in encounter order). Invalid records are skipped
/// and reported in [`AggregationOutcome::skipped`].
pub fn aggregate(records: &[RunRecord]) -> AggregationOutcome {
    let (groups, skipped) = group_records(records);
    for err in &skipped {
        tracing::warn!("skipping record: {err}");
    }

    let mut entries = groups
        .into_iter()
        .map(|(model, group)| build_entry(model, &group))
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    tracing::info!(
        "aggregated {} records into {} models ({} skipped)",
        records.len(),
        entries.len(),
        skipped.len()
    );

    AggregationOutcome { entries, skipped }
}

/// Same as [`aggregate`] but the first invalid record fails the whole batch.
pub fn aggregate_strict(records: &[RunRecord]) -> Result<Vec<AggregatedModelEntry>, RecordError> {
    if let Some(err) = records.iter().find_map(|r| validate_record(r).err()) {
        return Err(err);
    }
    Ok(aggregate(records).entries)
}

type Group<'a> = (String, Vec<&'a RunRecord>);

/// Buckets valid records by normalized model name, groups in first-seen order.
fn group_records(records: &[RunRecord]) -> (Vec<Group<'_>>, Vec<RecordError>) {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut skipped = Vec::new();

    for record in records {
        let raw = match validate_record(record) {
            Ok(raw) => raw,
            Err(err) => {
                skipped.push(err);
                continue;
            }
        };
        let key = normalize_model_name(raw, record.parameter_size());
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    (groups, skipped)
}

fn build_entry(model: String, group: &[&RunRecord]) -> AggregatedModelEntry {
    let selection = select_authoritative(group);
    if selection.discarded > 0 {
        tracing::debug!(
            "{model}: keeping {} record(s) at {}, discarding {} older",
            selection.records.len(),
            format_version(selection.version),
            selection.discarded
        );
    }
    let authoritative = &selection.records;
    // Groups are never empty, and the max version always has a record.
    let first = authoritative[0];

    let benchmarks = aggregate_categories(authoritative);
    let gpu_data = aggregate_gpus(authoritative);
    let metrics = rollup_metrics(&gpu_data);
    let total_score = rollup_total_score(authoritative);

    AggregatedModelEntry {
        filename: routing_id(&model),
        model,
        benchmark_version: format_version(selection.version),
        date: first.date.clone(),
        judge_model: first.judge_model.clone(),
        model_details: first.model_details.clone(),
        benchmarks,
        metrics,
        gpu_data,
        total_score,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
