use super::*;
use crate::model::BenchmarkResult;

fn bench(name: &str, score: f64, comment: Option<&str>, issues: &[&str]) -> BenchmarkResult {
    BenchmarkResult {
        name: name.to_string(),
        score,
        comment: comment.map(str::to_string),
        issues: issues.iter().map(|s| s.to_string()).collect(),
        ..BenchmarkResult::default()
    }
}

fn run(benchmarks: Vec<BenchmarkResult>) -> RunRecord {
    RunRecord {
        model: Some("m".to_string()),
        benchmarks,
        ..RunRecord::default()
    }
}

#[test]
fn test_scores_averaged_per_category() {
    let a = run(vec![bench("Reasoning", 6.0, None, &[])]);
    let b = run(vec![bench("Reasoning", 8.0, None, &[])]);

    let out = aggregate_categories(&[&a, &b]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Reasoning");
    assert_eq!(out[0].score, 7.0);
}

#[test]
fn test_scores_rounded_to_two_decimals() {
    let a = run(vec![bench("Coding", 7.0, None, &[])]);
    let b = run(vec![bench("Coding", 8.0, None, &[])]);
    let c = run(vec![bench("Coding", 8.0, None, &[])]);

    let out = aggregate_categories(&[&a, &b, &c]);
    assert_eq!(out[0].score, 7.67);
}

#[test]
fn test_single_report_category_kept_and_order_stable() {
    let a = run(vec![
        bench("Reasoning", 5.0, None, &[]),
        bench("Coding", 9.0, None, &[]),
    ]);
    let b = run(vec![
        bench("Creativity", 4.0, None, &[]),
        bench("Reasoning", 7.0, None, &[]),
    ]);

    let out = aggregate_categories(&[&a, &b]);
    let names = out.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Reasoning", "Coding", "Creativity"]);
    assert_eq!(out[1].score, 9.0);
    assert_eq!(out[2].score, 4.0);
}

#[test]
fn test_category_names_case_sensitive() {
    let a = run(vec![bench("reasoning", 2.0, None, &[])]);
    let b = run(vec![bench("Reasoning", 8.0, None, &[])]);

    let out = aggregate_categories(&[&a, &b]);
    assert_eq!(out.len(), 2);
}

#[test]
fn test_first_non_empty_comment_wins() {
    let a = run(vec![bench("Coding", 5.0, Some(""), &[])]);
    let b = run(vec![bench("Coding", 5.0, Some("terse but correct"), &[])]);
    let c = run(vec![bench(
        "Coding",
        5.0,
        Some("much longer and more detailed commentary"),
        &[],
    )]);

    let out = aggregate_categories(&[&a, &b, &c]);
    assert_eq!(out[0].comment.as_deref(), Some("terse but correct"));
}

#[test]
fn test_missing_comment_is_none() {
    let a = run(vec![bench("Coding", 5.0, None, &[])]);
    let out = aggregate_categories(&[&a]);
    assert_eq!(out[0].comment, None);
}

#[test]
fn test_issues_deduplicated() {
    let a = run(vec![bench("Instruction", 6.0, None, &["slow output"])]);
    let b = run(vec![bench(
        "Instruction",
        6.0,
        None,
        &["slow output", "repeats text"],
    )]);

    let out = aggregate_categories(&[&a, &b]);
    let issues = out[0].issues.iter().cloned().collect::<HashSet<_>>();
    assert_eq!(out[0].issues.len(), 2);
    assert!(issues.contains("slow output"));
    assert!(issues.contains("repeats text"));
}

#[test]
fn test_empty_input() {
    assert!(aggregate_categories(&[]).is_empty());
    assert_eq!(mean(0.0, 0), 0.0);
}
