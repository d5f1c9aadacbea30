/*!
 * Common test utilities for the lapchapters test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use lapchapters::lap_time::LapDuration;
use lapchapters::timeline::TimelineEntry;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample lap time CSV export for testing
pub fn create_test_csv(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "\
Lap,Lap Time,Sector 1
1,1:32.500,31.2
2,1:29.800,30.8
3,1:31.250,31.0
";
    create_test_file(dir, filename, content)
}

/// Shorthand for parsing a known-good lap time in tests
pub fn lap(text: &str) -> LapDuration {
    LapDuration::parse(text).expect("test lap time should parse")
}

/// Builds a timeline entry from millisecond bounds
pub fn entry(start_ms: i64, end_ms: i64, description: &str) -> TimelineEntry {
    TimelineEntry {
        start: LapDuration::from_millis(start_ms),
        end: LapDuration::from_millis(end_ms),
        description: description.to_string(),
    }
}
