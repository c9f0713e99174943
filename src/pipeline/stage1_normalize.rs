const LATEST_SUFFIX: &str = ":latest";
const LATEST_TOKEN: &str = "latest";

/// Canonical grouping key for a submitted model identifier.
///
/// A trailing `:latest` alias is resolved to the reported parameter size so that
/// `llama3.1:latest` (8B) and `llama3.1:8b` land in the same group. Anything else
/// passes through untouched, which makes the mapping idempotent.
pub fn normalize_model_name(raw: &str, parameter_size: Option<&str>) -> String {
    let Some(base) = raw.strip_suffix(LATEST_SUFFIX) else {
        return raw.to_string();
    };
    let size = match parameter_size {
        Some(size) if !size.is_empty() => size_tag(size),
        _ => LATEST_TOKEN.to_string(),
    };
    format!("{base}:{size}")
}

fn size_tag(parameter_size: &str) -> String {
    parameter_size
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '.')
        .collect()
}

/// URL-safe routing id derived from a normalized model name.
///
/// Distinct names may collapse to the same id (`a:b` and `ab`); collisions are
/// not detected.
pub fn routing_id(normalized: &str) -> String {
    normalized
        .chars()
        .filter(|c| *c != ':' && *c != '/')
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
