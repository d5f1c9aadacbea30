use anyhow::{Context, Result, anyhow};
use log::debug;
use std::path::Path;

// @module: Lap time import from tabular files

/// Header of the column holding lap times
pub const LAP_TIME_COLUMN: &str = "Lap Time";

/// Read the `"Lap Time"` column of a CSV file as raw lap strings.
///
/// The read is asynchronous; no lap data is visible to the caller until the
/// returned future resolves. Column values are passed through untouched,
/// blank cells included; the timeline builder filters blanks the same way
/// it filters blank manual entries.
pub async fn import_lap_times<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read lap time CSV: {}", path.display()))?;

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV headers: {}", path.display()))?;
    let column = headers
        .iter()
        .position(|header| header == LAP_TIME_COLUMN)
        .ok_or_else(|| {
            anyhow!(
                "No '{}' column in {} (found: {})",
                LAP_TIME_COLUMN,
                path.display(),
                headers.iter().collect::<Vec<_>>().join(", ")
            )
        })?;

    let mut laps = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read CSV record: {}", path.display()))?;
        laps.push(record.get(column).unwrap_or_default().to_string());
    }

    debug!("Imported {} lap time(s) from {}", laps.len(), path.display());
    Ok(laps)
}
