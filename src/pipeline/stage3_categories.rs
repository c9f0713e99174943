use std::collections::{HashMap, HashSet};

use crate::model::{CategoryScore, RunRecord};

#[derive(Debug, Default)]
struct CategoryAcc {
    name: String,
    score_sum: f64,
    score_count: usize,
    comment: Option<String>,
    issues: Vec<String>,
    seen_issues: HashSet<String>,
}

/// Folds every category reported across the records into one score per name.
///
/// Categories keep the order in which they first appear. The first non-empty
/// comment wins; issues are de-duplicated by exact string.
pub fn aggregate_categories(records: &[&RunRecord]) -> Vec<CategoryScore> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut accs: Vec<CategoryAcc> = Vec::new();

    for record in records {
        for bench in &record.benchmarks {
            let slot = *index.entry(bench.name.as_str()).or_insert_with(|| {
                accs.push(CategoryAcc {
                    name: bench.name.clone(),
                    ..CategoryAcc::default()
                });
                accs.len() - 1
            });
            let acc = &mut accs[slot];

            acc.score_sum += bench.score;
            acc.score_count += 1;

            if acc.comment.is_none()
                && let Some(comment) = bench.comment.as_deref().filter(|c| !c.is_empty())
            {
                acc.comment = Some(comment.to_string());
            }

            for issue in &bench.issues {
                if acc.seen_issues.insert(issue.clone()) {
                    acc.issues.push(issue.clone());
                }
            }
        }
    }

    accs.into_iter()
        .map(|acc| CategoryScore {
            score: round2(mean(acc.score_sum, acc.score_count)),
            name: acc.name,
            comment: acc.comment,
            issues: acc.issues,
        })
        .collect()
}

pub fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_categories.rs"]
mod tests;
