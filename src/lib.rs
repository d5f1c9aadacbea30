/*!
 * # lapchapters
 *
 * A Rust library and CLI for turning human-entered racing lap times into
 * timestamped video artifacts.
 *
 * ## Features
 *
 * - Lenient lap/offset time parsing down to millisecond resolution
 * - Absolute timeline construction across ordered, named sessions
 * - Fastest-lap detection with signed deltas per session
 * - Chapter-description text output for video descriptions
 * - SRT subtitle-track output with sequential timing blocks
 * - Optional lap import from CSV timing exports ("Lap Time" column)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `lap_time`: duration type, parsing and output formatting
 * - `fastest_lap`: fastest-lap detection and delta computation
 * - `timeline`: session model and timeline construction
 * - `render`: description and subtitle projections of the timeline
 * - `lap_sheet`: lap sheet input model (JSON, optional CSV import)
 * - `csv_import`: asynchronous "Lap Time" column extraction
 * - `validation`: inline entry validation with per-field help messages
 * - `app_config`: configuration management
 * - `file_utils`: file system operations
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod csv_import;
pub mod errors;
pub mod fastest_lap;
pub mod file_utils;
pub mod lap_sheet;
pub mod lap_time;
pub mod render;
pub mod timeline;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::{Config, GeneratorConfig, TabConfig};
pub use errors::{AppError, TimeParseError, TimelineError};
pub use fastest_lap::{LapDelta, delta, fastest};
pub use lap_sheet::LapSheet;
pub use lap_time::{LapDuration, TimeFormat};
pub use timeline::{Session, TimelineBuilder, TimelineEntry};
