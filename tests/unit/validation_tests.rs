/*!
 * Tests for inline entry validation
 */

use lapchapters::timeline::Session;
use lapchapters::validation::{EntryIssue, validate_sessions};

/// Test well-formed entries pass
#[test]
fn test_validate_withWellFormedEntries_shouldPass() {
    let sessions = vec![
        Session::new("Qualifying", "40", &["40.983", "1:32.987"]),
        Session::new("Race", "1:32", &["1:29.8", "55"]),
    ];

    let result = validate_sessions(&sessions);
    assert!(result.passed());
    assert!(result.issues.is_empty());
}

/// Test an empty offset and blank laps are valid (lenient fields)
#[test]
fn test_validate_withEmptyOffsetAndBlankLaps_shouldPass() {
    let sessions = vec![Session::new("Race", "", &["", "1:30", "  "])];
    assert!(validate_sessions(&sessions).passed());
}

/// Test a malformed offset is reported with its session
#[test]
fn test_validate_withMalformedOffset_shouldReportIssue() {
    let sessions = vec![Session::new("Race", "later", &["1:30"])];

    let result = validate_sessions(&sessions);
    assert!(!result.passed());
    assert_eq!(
        result.issues,
        vec![EntryIssue::InvalidOffset {
            session: "Race".to_string(),
            value: "later".to_string(),
        }]
    );
}

/// Test the offset pattern accepts no fractional seconds
#[test]
fn test_validate_withFractionalOffset_shouldReportIssue() {
    let sessions = vec![Session::new("Race", "1:32.5", &[])];
    assert!(!validate_sessions(&sessions).passed());
}

/// Test a malformed lap is reported with its position among non-blank laps
#[test]
fn test_validate_withMalformedLap_shouldReportPosition() {
    let sessions = vec![Session::new("Race", "", &["", "1:30", "fast", "1:31"])];

    let result = validate_sessions(&sessions);
    assert_eq!(
        result.issues,
        vec![EntryIssue::InvalidLap {
            session: "Race".to_string(),
            lap: 2,
            value: "fast".to_string(),
        }]
    );
}

/// Test the lap pattern rejects a full hours:minutes:seconds entry
#[test]
fn test_validate_withThreeGroupLap_shouldReportIssue() {
    let sessions = vec![Session::new("Race", "", &["1:02:03"])];
    assert!(!validate_sessions(&sessions).passed());
}

/// Test issue display carries the format help messages
#[test]
fn test_issue_display_shouldIncludeHelpMessage() {
    let offset_issue = EntryIssue::InvalidOffset {
        session: "Race".to_string(),
        value: "later".to_string(),
    };
    assert!(offset_issue.to_string().contains("Invalid offset time!"));

    let lap_issue = EntryIssue::InvalidLap {
        session: "Race".to_string(),
        lap: 3,
        value: "fast".to_string(),
    };
    let rendered = lap_issue.to_string();
    assert!(rendered.contains("Invalid lap time!"));
    assert!(rendered.contains("lap 3"));
}

/// Test issues from multiple sessions are collected in order
#[test]
fn test_validate_withMultipleSessions_shouldCollectAllIssues() {
    let sessions = vec![
        Session::new("Qualifying", "bad", &["1:30"]),
        Session::new("Race", "", &["worse"]),
    ];

    let result = validate_sessions(&sessions);
    assert_eq!(result.issues.len(), 2);
    assert!(matches!(result.issues[0], EntryIssue::InvalidOffset { .. }));
    assert!(matches!(result.issues[1], EntryIssue::InvalidLap { .. }));
}
