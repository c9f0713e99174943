pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::AggregatedModelEntry;
use crate::report::text::render_leaderboard_text;

/// Writes the leaderboard database as a single pretty-printed JSON array.
pub fn write_db(entries: &[AggregatedModelEntry], path: &Path) -> std::io::Result<()> {
    ensure_parent(path)?;
    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, entries)?;
    w.write_all(b"\n")?;
    w.flush()?;
    tracing::info!("wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

pub fn write_summary(entries: &[AggregatedModelEntry], path: &Path) -> std::io::Result<()> {
    ensure_parent(path)?;
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(render_leaderboard_text(entries).as_bytes())?;
    w.flush()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

pub fn format_gb(mb: f64) -> String {
    if mb > 0.0 {
        format!("{:.1}", mb / 1024.0)
    } else {
        "-".to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
