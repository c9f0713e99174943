use crate::model::RunRecord;

const DEFAULT_VERSION: u64 = 1;

/// Numeric benchmark version of a record; unparseable or missing tags count as 1.
/// Digit runs too large for `u64` saturate so they still rank as newest.
pub fn parse_version(tag: Option<&str>) -> u64 {
    let Some(tag) = tag else {
        return DEFAULT_VERSION;
    };
    let tag = tag.trim();
    let digits = tag
        .strip_prefix(['v', 'V'])
        .unwrap_or(tag)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>();
    if digits.is_empty() {
        return DEFAULT_VERSION;
    }
    match digits.parse::<u64>() {
        Ok(0) => DEFAULT_VERSION,
        Ok(v) => v,
        Err(_) => u64::MAX,
    }
}

pub fn format_version(version: u64) -> String {
    format!("v{version}")
}

#[derive(Debug)]
pub struct VersionSelection<'a> {
    pub version: u64,
    pub records: Vec<&'a RunRecord>,
    pub discarded: usize,
}

/// Keeps only the records at the highest version in the group, in encounter order.
pub fn select_authoritative<'a>(group: &[&'a RunRecord]) -> VersionSelection<'a> {
    let versions = group
        .iter()
        .map(|r| parse_version(r.benchmark_version.as_deref()))
        .collect::<Vec<_>>();
    let version = versions.iter().copied().max().unwrap_or(DEFAULT_VERSION);

    let records = group
        .iter()
        .zip(&versions)
        .filter(|&(_, &v)| v == version)
        .map(|(&r, _)| r)
        .collect::<Vec<_>>();
    let discarded = group.len() - records.len();

    VersionSelection {
        version,
        records,
        discarded,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_version.rs"]
mod tests;
