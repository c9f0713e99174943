use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::model::{AggregatedModelEntry, RunRecord};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error in {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
pub struct LoadedRecords {
    pub records: Vec<RunRecord>,
    pub skipped_files: Vec<String>,
}

pub fn is_report_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".json") || name.ends_with(".json.gz")
}

/// Lists report files in `dir`, sorted by file name.
pub fn find_report_files(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !dir.is_dir() {
        return Err(InputError::MissingInput(format!(
            "report directory not found: {}",
            dir.display()
        )));
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_report_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_run_record(path: &Path) -> Result<RunRecord, InputError> {
    let file = File::open(path)?;
    let mut reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;

    let filename = file_name(path);
    let mut record: RunRecord =
        serde_json::from_str(&buf).map_err(|source| InputError::Parse {
            file: filename.clone(),
            source,
        })?;
    record.filename = filename;
    Ok(record)
}

/// Loads every report in `dir`. Files that cannot be read or parsed are logged
/// and skipped.
pub fn load_run_records(dir: &Path) -> Result<LoadedRecords, InputError> {
    let files = find_report_files(dir)?;
    tracing::info!(
        "scanning {} report file(s) in {}",
        files.len(),
        dir.display()
    );

    let mut records = Vec::with_capacity(files.len());
    let mut skipped_files = Vec::new();
    for path in &files {
        match read_run_record(path) {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::warn!("skipping {}: {err}", path.display());
                skipped_files.push(file_name(path));
            }
        }
    }

    Ok(LoadedRecords {
        records,
        skipped_files,
    })
}

/// Reads a database previously written by `write_db`.
pub fn read_db(path: &Path) -> Result<Vec<AggregatedModelEntry>, InputError> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| InputError::Parse {
        file: file_name(path),
        source,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
