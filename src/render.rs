use chrono::{DateTime, Local};

use crate::lap_time::TimeFormat;
use crate::timeline::TimelineEntry;

// @module: Textual projections of the timeline

/// Render the chapter-description text block.
///
/// One line per entry: the absolute start as an untruncated `HH:mm:ss`
/// timestamp followed by the entry description. Callers pass the
/// already-filtered entry list (see `TimelineBuilder::description_entries`).
pub fn render_description(entries: &[TimelineEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{} {}",
                entry.start.format(TimeFormat::Timestamp, false),
                entry.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the subtitle-track text block.
///
/// For every entry, unfiltered: a block of the 1-based index, the
/// `start --> end` range in SRT timing, and the description. Blocks are
/// separated by a blank line.
pub fn render_subtitles(entries: &[TimelineEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{}\n{} --> {}\n{}",
                i + 1,
                entry.start.format(TimeFormat::Subtitle, false),
                entry.end.format(TimeFormat::Subtitle, false),
                entry.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// File name for a generated subtitle track: the tab identifier plus the
/// local date-time truncated to whole seconds, with `T` replaced by `_`.
pub fn subtitle_file_name(tab: &str, at: DateTime<Local>) -> String {
    let stamp = at.format("%Y-%m-%dT%H:%M:%S").to_string().replace('T', "_");
    format!("subtitles_{}_{}.srt", tab, stamp)
}
