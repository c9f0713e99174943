use super::*;

fn entry(model: &str, family: Option<&str>) -> AggregatedModelEntry {
    AggregatedModelEntry {
        model: model.to_string(),
        benchmark_version: "v1".to_string(),
        date: None,
        judge_model: None,
        model_details: family.map(|f| ModelDetails {
            family: Some(f.to_string()),
            ..ModelDetails::default()
        }),
        filename: crate::pipeline::stage1_normalize::routing_id(model),
        benchmarks: Vec::new(),
        metrics: ModelMetrics::default(),
        gpu_data: Vec::new(),
        total_score: 0,
    }
}

#[test]
fn test_find_by_routing_id() {
    let entries = vec![entry("llama3.1:8b", None), entry("qwen2.5:7b", None)];
    assert_eq!(
        find_by_id(&entries, "qwen257b").map(|e| e.model.as_str()),
        Some("qwen2.5:7b")
    );
    assert!(find_by_id(&entries, "qwen2.5:7b").is_none());
}

#[test]
fn test_filter_matches_model_or_family() {
    let entries = vec![
        entry("Llama3.1:8b", Some("llama")),
        entry("hermes3:8b", Some("llama")),
        entry("qwen2.5:7b", Some("qwen2")),
        entry("phi3:mini", None),
    ];
    let hits = filter_entries(&entries, "LLAMA")
        .iter()
        .map(|e| e.model.as_str())
        .collect::<Vec<_>>();
    assert_eq!(hits, vec!["Llama3.1:8b", "hermes3:8b"]);

    assert_eq!(filter_entries(&entries, "").len(), 4);
    assert!(filter_entries(&entries, "mistral").is_empty());
}
