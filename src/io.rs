use crate::clock::format_duration;
use crate::model::CalcResult;
use anyhow::Context;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Export JSON du résultat (jolie mise en forme)
pub fn export_result_json<P: AsRef<Path>>(path: P, result: &CalcResult) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(result)?;
    write_atomic(path.as_ref(), &json)
}

/// Export CSV des scénarios, une ligne par scénario, heures rendues `HH:MM (+Nd)`.
pub fn export_scenarios_csv<P: AsRef<Path>>(path: P, result: &CalcResult) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    w.write_record([
        "title",
        "work_start",
        "work_end",
        "release_start",
        "release_end",
        "total_start",
        "total_end",
        "included",
        "overtime",
        "next_start",
        "next_end",
    ])?;
    for s in &result.scenarios {
        w.write_record([
            s.title.clone(),
            s.work.start.to_string(),
            s.work.end.to_string(),
            s.release.start.to_string(),
            s.release.end.to_string(),
            s.total.start.to_string(),
            s.total.end.to_string(),
            format_duration(s.included_minutes),
            format_duration(s.overtime_minutes),
            s.next_day.start.to_string(),
            s.next_day.end.to_string(),
        ])?;
    }
    w.flush()?;
    let data = w.into_inner().map_err(|e| e.into_error())?;
    write_atomic(path.as_ref(), &data)
}

/// Écriture via fichier temporaire + rename.
fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}
